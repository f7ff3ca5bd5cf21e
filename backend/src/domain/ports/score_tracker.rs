//! Driving port exposed to the API boundary.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::score::{ScoreEntry, Subject};
use crate::domain::student::{NewStudent, Student, TelegramId};

/// Score submission request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScore {
    pub telegram_id: TelegramId,
    pub subject: Subject,
    pub score: i32,
}

/// Outcome of a score submission.
///
/// `NotRegistered` is a domain outcome the caller must branch on, not a
/// fault; the HTTP adapter maps it to a 404 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScoreOutcome {
    /// The score was recorded (inserted or overwritten in place).
    Recorded(ScoreEntry),
    /// No student is registered under the supplied chat identity.
    NotRegistered,
}

/// Domain operations offered to the API boundary.
#[async_trait]
pub trait ScoreTracker: Send + Sync {
    /// Register a student, idempotently.
    ///
    /// Re-registering an existing chat identity returns the stored record
    /// unchanged, even when the supplied names differ.
    async fn register(&self, request: NewStudent) -> Result<Student, Error>;

    /// Record a score for a registered student, upserting per subject.
    async fn record_score(&self, request: RecordScore) -> Result<RecordScoreOutcome, Error>;

    /// List all scores owned by the given chat identity, in insertion
    /// order. Unknown identities yield an empty list.
    async fn get_scores(&self, telegram_id: TelegramId) -> Result<Vec<ScoreEntry>, Error>;
}
