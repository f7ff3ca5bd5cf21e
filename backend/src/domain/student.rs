//! Student entity and its validated components.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the student component constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    /// A name was empty once trimmed of whitespace.
    EmptyName,
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

/// Store-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i32);

impl StudentId {
    /// Wrap a store-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External identity assigned by the chat platform.
///
/// This is the natural key for a student: unique across all students and
/// supplied by callers on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelegramId(i64);

impl TelegramId {
    /// Wrap a chat-platform user identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TelegramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student's first or last name.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validate and construct a [`Name`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, StudentValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl TryFrom<String> for Name {
    type Error = StudentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A registered student.
///
/// ## Invariants
/// - `telegram_id` is unique across all students.
/// - Names are non-empty.
///
/// Students are created on first registration and never updated afterwards;
/// re-registration returns the stored record unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    telegram_id: TelegramId,
    first_name: Name,
    last_name: Name,
}

impl Student {
    /// Build a [`Student`] from validated components.
    pub const fn new(
        id: StudentId,
        telegram_id: TelegramId,
        first_name: Name,
        last_name: Name,
    ) -> Self {
        Self {
            id,
            telegram_id,
            first_name,
            last_name,
        }
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// Chat-platform identity.
    pub const fn telegram_id(&self) -> TelegramId {
        self.telegram_id
    }

    /// First name supplied at registration.
    pub const fn first_name(&self) -> &Name {
        &self.first_name
    }

    /// Last name supplied at registration.
    pub const fn last_name(&self) -> &Name {
        &self.last_name
    }
}

/// Registration request payload accepted by the score tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub telegram_id: TelegramId,
    pub first_name: Name,
    pub last_name: Name,
}
