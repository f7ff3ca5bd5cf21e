//! Error taxonomy shared by the persistence ports.

/// Failures raised by store adapters.
///
/// Uniqueness violations are distinguishable from connectivity failures so
/// the service layer can recover a raced upsert instead of failing the
/// request outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (or raced) at the store.
    #[error("uniqueness constraint violated: {constraint}")]
    ConstraintViolation { constraint: String },

    /// The store could not be reached or the connection was lost.
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    /// A query or mutation failed during execution.
    #[error("storage query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Create a constraint violation error naming the violated constraint.
    pub fn constraint_violation(constraint: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            constraint: constraint.into(),
        }
    }

    /// Create an unavailability error with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
