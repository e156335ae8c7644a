use std::sync::Arc;

use crate::config::Config;
use crate::data::config::ConfigRepository;
use crate::data::document::DocumentStore;
use crate::error::AppError;
use crate::model::config::ConfigDocument;
use crate::model::points::PointsDocument;
use crate::state::AppState;

/// Opens both document stores, materializing defaults where absent.
///
/// The points document starts empty; the configuration document starts with
/// the full zeroed value table and no ranks. An existing configuration
/// document is backfilled with any value keys it is missing. A corrupt
/// document fails startup here rather than on the first command.
///
/// # Arguments
/// - `config` - Application configuration containing the document paths
///
/// # Returns
/// - `Ok(AppState)` - Both stores opened and validated
/// - `Err(AppError)` - Corrupt document or filesystem failure
pub async fn open_stores(config: &Config) -> Result<AppState, AppError> {
    let points = DocumentStore::open(&config.points_file, &PointsDocument::default())?;
    let config_store = DocumentStore::open(&config.config_file, &ConfigDocument::default())?;

    ConfigRepository::new(&config_store)
        .ensure_default_values()
        .await?;

    Ok(AppState::new(Arc::new(points), Arc::new(config_store)))
}
