//! Port abstraction for student persistence adapters.

use async_trait::async_trait;

use crate::domain::student::{NewStudent, Student, TelegramId};

use super::StoreError;

/// Durable storage for registered students.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch a student by chat-platform identity, `None` when absent.
    async fn find_by_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Option<Student>, StoreError>;

    /// Insert a new student and return the stored record.
    ///
    /// Fails with [`StoreError::ConstraintViolation`] when the telegram
    /// identity is already registered.
    async fn insert(&self, new_student: &NewStudent) -> Result<Student, StoreError>;
}
