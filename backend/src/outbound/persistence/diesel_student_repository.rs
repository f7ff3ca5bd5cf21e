//! PostgreSQL-backed `StudentRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreError, StudentRepository};
use crate::domain::{Name, NewStudent, Student, StudentId, TelegramId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`StudentRepository`] port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository over the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub(super) fn row_to_student(row: UserRow) -> Result<Student, StoreError> {
    let first_name = Name::new(row.first_name)
        .map_err(|_| StoreError::query("users row holds an empty first_name"))?;
    let last_name = Name::new(row.last_name)
        .map_err(|_| StoreError::query("users row holds an empty last_name"))?;
    Ok(Student::new(
        StudentId::new(row.id),
        TelegramId::new(row.telegram_id),
        first_name,
        last_name,
    ))
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn find_by_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Option<Student>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::telegram_id.eq(telegram_id.value()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_student).transpose()
    }

    async fn insert(&self, new_student: &NewStudent) -> Result<Student, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            telegram_id: new_student.telegram_id.value(),
            first_name: new_student.first_name.as_ref(),
            last_name: new_student.last_name.as_ref(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_student(row)
    }
}
