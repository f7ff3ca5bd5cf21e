//! Shared mapping from Diesel and pool failures to the store error taxonomy.

use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::unavailable(message)
        }
    }
}

pub(super) fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                constraint = info.constraint_name(),
                message = info.message(),
                "unique constraint violated"
            );
            StoreError::constraint_violation(
                info.constraint_name().unwrap_or("unique constraint").to_owned(),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            StoreError::unavailable("database connection closed")
        }
        DieselError::NotFound => StoreError::query("record not found"),
        other => {
            debug!(error = %other, "diesel operation failed");
            StoreError::query("database error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_unavailable() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(mapped, StoreError::Unavailable { .. }));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violations_are_distinguishable() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_owned()),
        );
        let mapped = map_diesel_error(diesel_err);
        assert!(matches!(mapped, StoreError::ConstraintViolation { .. }));
    }

    #[rstest]
    fn missing_records_map_to_query_errors() {
        let mapped = map_diesel_error(DieselError::NotFound);
        assert!(matches!(mapped, StoreError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }
}
