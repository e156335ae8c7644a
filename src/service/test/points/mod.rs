use chrono::{Duration, Utc};
use std::path::Path;

use crate::data::document::DocumentStore;
use crate::error::AppError;
use crate::model::points::PointsDocument;
use crate::service::points::PointsService;
use test_utils::builder::TestBuilder;


/// Opens a points store over the document at `path`.
fn open_points(path: &Path) -> DocumentStore<PointsDocument> {
    DocumentStore::open(path, &PointsDocument::default()).unwrap()
}
