//! Score entries and the subject component.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::student::StudentId;

/// Validation errors returned by the score component constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreValidationError {
    /// The subject was empty once trimmed of whitespace.
    EmptySubject,
}

impl fmt::Display for ScoreValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "subject must not be empty"),
        }
    }
}

impl std::error::Error for ScoreValidationError {}

/// Store-assigned score entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreEntryId(i32);

impl ScoreEntryId {
    /// Wrap a store-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ScoreEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exam subject name.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
///
/// Subjects are compared verbatim; "Math" and "math" are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Validate and construct a [`Subject`] from owned input.
    pub fn new(subject: impl Into<String>) -> Result<Self, ScoreValidationError> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(ScoreValidationError::EmptySubject);
        }
        Ok(Self(subject))
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Subject> for String {
    fn from(value: Subject) -> Self {
        value.0
    }
}

impl TryFrom<String> for Subject {
    type Error = ScoreValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A recorded exam score.
///
/// ## Invariants
/// - At most one entry exists per `(student, subject)` pair.
/// - Entries are owned by exactly one student and removed with it.
///
/// Resubmitting a score for an already-recorded subject overwrites the value
/// in place; history is intentionally not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    id: ScoreEntryId,
    student_id: StudentId,
    subject: Subject,
    score: i32,
}

impl ScoreEntry {
    /// Build a [`ScoreEntry`] from validated components.
    pub const fn new(
        id: ScoreEntryId,
        student_id: StudentId,
        subject: Subject,
        score: i32,
    ) -> Self {
        Self {
            id,
            student_id,
            subject,
            score,
        }
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> ScoreEntryId {
        self.id
    }

    /// Owning student.
    pub const fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// Subject this score was recorded for.
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Recorded score value.
    pub const fn score(&self) -> i32 {
        self.score
    }
}
