//! Port abstraction for score persistence adapters.

use async_trait::async_trait;

use crate::domain::score::{ScoreEntry, ScoreEntryId, Subject};
use crate::domain::student::{StudentId, TelegramId};

use super::StoreError;

/// Durable storage for score entries.
///
/// Each mutation is a single atomic store operation; the `(student,
/// subject)` uniqueness constraint is enforced by the store itself.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Fetch the entry for a `(student, subject)` pair, `None` when absent.
    async fn find_by_student_and_subject(
        &self,
        student_id: StudentId,
        subject: &Subject,
    ) -> Result<Option<ScoreEntry>, StoreError>;

    /// Insert a new entry and return the stored record.
    ///
    /// Fails with [`StoreError::ConstraintViolation`] when an entry for the
    /// `(student, subject)` pair already exists.
    async fn insert(
        &self,
        student_id: StudentId,
        subject: &Subject,
        score: i32,
    ) -> Result<ScoreEntry, StoreError>;

    /// Overwrite the score value of an existing entry in place.
    async fn update_score(
        &self,
        entry_id: ScoreEntryId,
        score: i32,
    ) -> Result<ScoreEntry, StoreError>;

    /// List all entries owned by the student with the given chat identity,
    /// in insertion order. Unknown students yield an empty list, not an
    /// error.
    async fn list_for_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Vec<ScoreEntry>, StoreError>;
}
