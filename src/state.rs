//! Application state shared across all operations.
//!
//! This module defines the `AppState` struct holding the two opened document
//! stores. The state is constructed once during startup and passed down
//! explicitly to services and the scheduler; there are no ambient globals.

use std::sync::Arc;

use crate::data::document::DocumentStore;
use crate::model::config::ConfigDocument;
use crate::model::points::PointsDocument;

/// Application state containing the opened document stores.
///
/// Cheap to clone: both stores live behind `Arc`, and every clone shares the
/// same per-document locks, so concurrent operations through any clone
/// serialize correctly.
#[derive(Clone)]
pub struct AppState {
    /// The points ledger document.
    pub points: Arc<DocumentStore<PointsDocument>>,
    /// The configuration document (activity values and rank rules).
    pub config: Arc<DocumentStore<ConfigDocument>>,
}

impl AppState {
    /// Creates a new application state with the provided stores.
    ///
    /// # Arguments
    /// - `points` - Opened points document store
    /// - `config` - Opened configuration document store
    pub fn new(
        points: Arc<DocumentStore<PointsDocument>>,
        config: Arc<DocumentStore<ConfigDocument>>,
    ) -> Self {
        Self { points, config }
    }
}
