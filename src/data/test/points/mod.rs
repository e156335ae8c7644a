use chrono::{Duration, Utc};
use std::path::Path;

use crate::data::document::DocumentStore;
use crate::data::points::PointsRepository;
use crate::error::store::StoreError;
use crate::model::points::PointsDocument;
use test_utils::builder::TestBuilder;

mod set_points;
mod sweep_departed;

/// Opens a points store over the document at `path`.
fn open_points(path: &Path) -> DocumentStore<PointsDocument> {
    DocumentStore::open(path, &PointsDocument::default()).unwrap()
}
