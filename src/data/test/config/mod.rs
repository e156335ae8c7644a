use std::path::Path;

use crate::data::config::ConfigRepository;
use crate::data::document::DocumentStore;
use crate::error::store::StoreError;
use crate::model::config::ConfigDocument;
use crate::model::rank::UpsertRankParam;
use test_utils::builder::TestBuilder;

mod get_value;
mod upsert_rank;

/// Opens a configuration store over the document at `path`.
fn open_config(path: &Path) -> DocumentStore<ConfigDocument> {
    DocumentStore::open(path, &ConfigDocument::default()).unwrap()
}
