//! Exam score tracking backend.
//!
//! Stores students and their per-subject exam scores behind a small REST
//! API consumed by chat-bot front-ends. The crate is organised as a
//! hexagon: `domain` holds the entities, ports, and the score tracking
//! service; `inbound` adapts HTTP requests onto the driving port; and
//! `outbound` implements the persistence ports against PostgreSQL (or an
//! in-memory store when no database is configured).

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
