//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The corpus registry is immutable after startup, so handlers share it
//! through a plain `Arc` with no locking.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::services::corpus::CorpusRegistry;

#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<CorpusRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(corpus: CorpusRegistry) -> Self {
        Self { corpus: Arc::new(corpus) }
    }
}
