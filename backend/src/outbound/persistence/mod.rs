//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! The adapters are thin: they translate between Diesel row structs
//! (`models.rs`) and domain types, and map database failures onto the
//! [`crate::domain::ports::StoreError`] taxonomy. No business logic lives
//! here.

mod diesel_score_repository;
mod diesel_student_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_score_repository::DieselScoreRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
