//! Configuration repository.
//!
//! This module provides the `ConfigRepository` for all reads and writes of
//! the configuration document: the activity value table and the rank rules.
//! Unknown value keys read as 0 without being created; rank rules are only
//! created, replaced, or removed through explicit calls.

use std::collections::BTreeMap;

use crate::data::document::DocumentStore;
use crate::error::store::StoreError;
use crate::model::config::{default_value_table, ConfigDocument};
use crate::model::rank::{RankRule, UpsertRankParam};

/// Repository providing operations over the configuration document.
pub struct ConfigRepository<'a> {
    store: &'a DocumentStore<ConfigDocument>,
}

impl<'a> ConfigRepository<'a> {
    /// Creates a new ConfigRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the opened configuration document store
    pub fn new(store: &'a DocumentStore<ConfigDocument>) -> Self {
        Self { store }
    }

    /// Backfills any missing default value keys at 0.
    ///
    /// Run once at startup so operators editing the document by hand always
    /// see the full key set. Saves only when something was missing.
    ///
    /// # Returns
    /// - `Ok(())` - Document contains the full default key set
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn ensure_default_values(&self) -> Result<(), StoreError> {
        self.store
            .update_if(|document| {
                let mut added = false;
                for (key, value) in default_value_table() {
                    if !document.values.contains_key(&key) {
                        document.values.insert(key, value);
                        added = true;
                    }
                }
                (added, ())
            })
            .await
    }

    /// Returns the configured point value for an activity key.
    ///
    /// # Arguments
    /// - `key` - Activity key to look up
    ///
    /// # Returns
    /// - `Ok(f64)` - The configured value, 0 for unknown keys (no key is
    ///   created by a read)
    /// - `Err(StoreError)` - Document load failure
    pub async fn get_value(&self, key: &str) -> Result<f64, StoreError> {
        let document = self.store.read().await?;
        Ok(document.values.get(key).copied().unwrap_or(0.0))
    }

    /// Upserts the point value for an activity key.
    ///
    /// # Arguments
    /// - `key` - Activity key to set
    /// - `value` - New point value
    ///
    /// # Returns
    /// - `Ok(())` - Value stored and persisted
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn set_value(&self, key: &str, value: f64) -> Result<(), StoreError> {
        self.store
            .update(|document| {
                document.values.insert(key.to_string(), value);
            })
            .await
    }

    /// Returns all configured rank rules keyed by name.
    ///
    /// # Returns
    /// - `Ok(BTreeMap<String, RankRule>)` - The rank collection
    /// - `Err(StoreError)` - Document load failure
    pub async fn get_ranks(&self) -> Result<BTreeMap<String, RankRule>, StoreError> {
        let document = self.store.read().await?;
        Ok(document.ranks)
    }

    /// Creates or replaces a rank rule.
    ///
    /// # Arguments
    /// - `param` - Rank name and rule fields
    ///
    /// # Returns
    /// - `Ok(())` - Rule stored and persisted
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn upsert_rank(&self, param: UpsertRankParam) -> Result<(), StoreError> {
        self.store
            .update(|document| {
                document.ranks.insert(
                    param.name,
                    RankRule {
                        role_id: param.role_id,
                        points_required: param.points_required,
                        requires_roles: param.requires_roles,
                    },
                );
            })
            .await
    }

    /// Removes a rank rule by name.
    ///
    /// # Arguments
    /// - `name` - Name of the rank to remove
    ///
    /// # Returns
    /// - `Ok(true)` - Rank existed, was removed and persisted
    /// - `Ok(false)` - No such rank; nothing written
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn remove_rank(&self, name: &str) -> Result<bool, StoreError> {
        self.store
            .update_if(|document| {
                let removed = document.ranks.remove(name).is_some();
                (removed, removed)
            })
            .await
    }
}
