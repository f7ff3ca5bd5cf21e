//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ScoreTracker;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tracker: Arc<dyn ScoreTracker>,
}

impl HttpState {
    /// Construct state around a score tracker implementation.
    pub fn new(tracker: Arc<dyn ScoreTracker>) -> Self {
        Self { tracker }
    }
}
