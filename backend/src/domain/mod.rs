//! Domain entities, errors, ports, and the score tracking service.
//!
//! Types here are transport and storage agnostic. Inbound adapters translate
//! wire payloads into these types; outbound adapters persist them.

pub mod error;
pub mod ports;
pub mod score;
pub mod service;
pub mod student;

pub use self::error::{Error, ErrorCode};
pub use self::score::{ScoreEntry, ScoreEntryId, ScoreValidationError, Subject};
pub use self::service::ScoreTrackerService;
pub use self::student::{
    Name, NewStudent, Student, StudentId, StudentValidationError, TelegramId,
};
