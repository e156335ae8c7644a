//! Configuration service for value and rank administration.
//!
//! Thin orchestration over the configuration repository, exposed to the
//! command layer's privileged configuration commands.

use std::collections::BTreeMap;

use crate::data::config::ConfigRepository;
use crate::data::document::DocumentStore;
use crate::error::AppError;
use crate::model::config::ConfigDocument;
use crate::model::rank::{RankRule, UpsertRankParam};

/// Service providing business logic for configuration management.
pub struct ConfigService<'a> {
    config: &'a DocumentStore<ConfigDocument>,
}

impl<'a> ConfigService<'a> {
    /// Creates a new ConfigService instance.
    ///
    /// # Arguments
    /// - `config` - Reference to the opened configuration document store
    pub fn new(config: &'a DocumentStore<ConfigDocument>) -> Self {
        Self { config }
    }

    /// Returns the configured point value for an activity key, 0 when the
    /// key is unknown.
    pub async fn get_value(&self, key: &str) -> Result<f64, AppError> {
        let repo = ConfigRepository::new(self.config);
        Ok(repo.get_value(key).await?)
    }

    /// Upserts the point value for an activity key and returns the stored
    /// value.
    pub async fn set_value(&self, key: &str, value: f64) -> Result<f64, AppError> {
        let repo = ConfigRepository::new(self.config);
        repo.set_value(key, value).await?;
        Ok(repo.get_value(key).await?)
    }

    /// Returns all configured rank rules keyed by name.
    pub async fn get_ranks(&self) -> Result<BTreeMap<String, RankRule>, AppError> {
        let repo = ConfigRepository::new(self.config);
        Ok(repo.get_ranks().await?)
    }

    /// Lists configured rank names, for boundary autocompletion.
    pub async fn rank_names(&self) -> Result<Vec<String>, AppError> {
        let repo = ConfigRepository::new(self.config);
        Ok(repo.get_ranks().await?.into_keys().collect())
    }

    /// Creates or replaces a rank rule.
    pub async fn upsert_rank(&self, param: UpsertRankParam) -> Result<(), AppError> {
        let repo = ConfigRepository::new(self.config);
        repo.upsert_rank(param).await?;
        Ok(())
    }

    /// Removes a rank rule by name.
    ///
    /// # Returns
    /// - `Ok(true)` - Rank existed and was removed
    /// - `Ok(false)` - No such rank
    pub async fn remove_rank(&self, name: &str) -> Result<bool, AppError> {
        let repo = ConfigRepository::new(self.config);
        Ok(repo.remove_rank(name).await?)
    }
}
