//! Points ledger repository.
//!
//! This module provides the `PointsRepository` for all reads and writes of
//! the points document. It handles point totals, the membership lifecycle
//! (join marks an entry, leave stamps `left_at`), and the retention sweep
//! that permanently deletes long-departed members. A re-joining member's
//! `left_at` is deliberately left in place; see `mark_joined`.

use chrono::{DateTime, Utc};

use crate::data::document::DocumentStore;
use crate::error::store::StoreError;
use crate::model::points::{PointsDocument, PointsEntry};

/// Repository providing ledger operations over the points document.
pub struct PointsRepository<'a> {
    store: &'a DocumentStore<PointsDocument>,
}

impl<'a> PointsRepository<'a> {
    /// Creates a new PointsRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the opened points document store
    pub fn new(store: &'a DocumentStore<PointsDocument>) -> Self {
        Self { store }
    }

    /// Returns a member's current point total.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member to look up
    ///
    /// # Returns
    /// - `Ok(f64)` - The total, 0 for members with no entry
    /// - `Err(StoreError)` - Document load failure
    pub async fn get_points(&self, user_id: u64) -> Result<f64, StoreError> {
        let document = self.store.read().await?;
        Ok(document
            .get(&user_id.to_string())
            .map(|entry| entry.points)
            .unwrap_or(0.0))
    }

    /// Adds `delta` to a member's total, creating the entry at 0 if absent.
    ///
    /// The delta may be negative and the resulting total may go below zero;
    /// no clamping is applied.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    /// - `delta` - Points to add (or remove, when negative)
    ///
    /// # Returns
    /// - `Ok(f64)` - The new total after the grant
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn add_points(&self, user_id: u64, delta: f64) -> Result<f64, StoreError> {
        self.store
            .update(|document| {
                let entry = document.entry(user_id.to_string()).or_default();
                entry.points += delta;
                entry.points
            })
            .await
    }

    /// Overwrites a member's total, creating the entry if absent.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    /// - `value` - The new point total
    ///
    /// # Returns
    /// - `Ok(f64)` - The stored total
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn set_points(&self, user_id: u64, value: f64) -> Result<f64, StoreError> {
        self.store
            .update(|document| {
                let entry = document.entry(user_id.to_string()).or_default();
                entry.points = value;
                entry.points
            })
            .await
    }

    /// Creates a zero-point entry for a newly observed member.
    ///
    /// Idempotent: an existing entry is left completely untouched, including
    /// its `left_at` stamp, so a member who left and re-joined keeps their
    /// departure mark until the sweep or an explicit grant touches them.
    ///
    /// # Arguments
    /// - `user_id` - Id of the joining member
    ///
    /// # Returns
    /// - `Ok(true)` - A new entry was created and persisted
    /// - `Ok(false)` - The member was already tracked; nothing written
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn mark_joined(&self, user_id: u64) -> Result<bool, StoreError> {
        self.store
            .update_if(|document| {
                let key = user_id.to_string();
                if document.contains_key(&key) {
                    (false, false)
                } else {
                    document.insert(key, PointsEntry::default());
                    (true, true)
                }
            })
            .await
    }

    /// Stamps a member's entry with the time they were observed leaving.
    ///
    /// # Arguments
    /// - `user_id` - Id of the departing member
    /// - `now` - Timestamp to record
    ///
    /// # Returns
    /// - `Ok(true)` - The entry was stamped and persisted
    /// - `Ok(false)` - The member was never tracked; nothing written
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn mark_left(&self, user_id: u64, now: DateTime<Utc>) -> Result<bool, StoreError> {
        self.store
            .update_if(|document| match document.get_mut(&user_id.to_string()) {
                Some(entry) => {
                    entry.left_at = Some(now);
                    (true, true)
                }
                None => (false, false),
            })
            .await
    }

    /// Deletes every entry whose departure stamp is older than `cutoff`.
    ///
    /// Entries with no `left_at` are never deleted regardless of age. The
    /// document is saved only when at least one entry was removed, so
    /// repeated sweeps with nothing eligible are no-ops.
    ///
    /// # Arguments
    /// - `cutoff` - Entries that left strictly before this instant are purged
    ///
    /// # Returns
    /// - `Ok(usize)` - How many entries were removed
    /// - `Err(StoreError)` - Document load or save failure
    pub async fn sweep_departed(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        self.store
            .update_if(|document| {
                let before = document.len();
                document.retain(|_, entry| match entry.left_at {
                    Some(left_at) => left_at >= cutoff,
                    None => true,
                });
                let removed = before - document.len();
                (removed > 0, removed)
            })
            .await
    }

    /// Snapshot of the whole ledger, for leaderboard computation.
    ///
    /// # Returns
    /// - `Ok(PointsDocument)` - All entries keyed by stringified user id
    /// - `Err(StoreError)` - Document load failure
    pub async fn entries(&self) -> Result<PointsDocument, StoreError> {
        self.store.read().await
    }
}
