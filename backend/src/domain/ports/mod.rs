//! Domain ports for the hexagonal boundary.

mod score_repository;
mod score_tracker;
mod store_error;
mod student_repository;

pub use score_repository::ScoreRepository;
pub use score_tracker::{RecordScore, RecordScoreOutcome, ScoreTracker};
pub use store_error::StoreError;
pub use student_repository::StudentRepository;
