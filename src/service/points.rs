//! Points service for ledger business logic.
//!
//! This module provides the `PointsService` exposing the ledger operations
//! the command layer calls directly: total lookups, grants, overwrites, the
//! membership lifecycle hooks, and the retention sweep.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::data::document::DocumentStore;
use crate::data::points::PointsRepository;
use crate::error::AppError;
use crate::model::points::PointsDocument;

/// Service providing business logic for the points ledger.
pub struct PointsService<'a> {
    points: &'a DocumentStore<PointsDocument>,
}

impl<'a> PointsService<'a> {
    /// Creates a new PointsService instance.
    ///
    /// # Arguments
    /// - `points` - Reference to the opened points document store
    pub fn new(points: &'a DocumentStore<PointsDocument>) -> Self {
        Self { points }
    }

    /// Returns a member's current point total, 0 when untracked.
    pub async fn get_points(&self, user_id: u64) -> Result<f64, AppError> {
        let repo = PointsRepository::new(self.points);
        Ok(repo.get_points(user_id).await?)
    }

    /// Grants points to a member and returns their new total.
    ///
    /// # Arguments
    /// - `user_id` - Member receiving the points
    /// - `amount` - Points to add; negative amounts are allowed and totals
    ///   may go below zero
    pub async fn add_points(&self, user_id: u64, amount: f64) -> Result<f64, AppError> {
        let repo = PointsRepository::new(self.points);
        Ok(repo.add_points(user_id, amount).await?)
    }

    /// Removes points from a member and returns their new total.
    ///
    /// The amount is applied as a deduction regardless of its sign, mirroring
    /// the subtract command's contract.
    ///
    /// # Arguments
    /// - `user_id` - Member losing the points
    /// - `amount` - Points to remove
    pub async fn subtract_points(&self, user_id: u64, amount: f64) -> Result<f64, AppError> {
        let repo = PointsRepository::new(self.points);
        Ok(repo.add_points(user_id, -amount.abs()).await?)
    }

    /// Overwrites a member's total and returns the stored value.
    pub async fn set_points(&self, user_id: u64, amount: f64) -> Result<f64, AppError> {
        let repo = PointsRepository::new(self.points);
        Ok(repo.set_points(user_id, amount).await?)
    }

    /// Tracks a newly joined member with a zero-point entry.
    ///
    /// Idempotent: re-join of an already-tracked member changes nothing, and
    /// in particular does not clear an existing departure stamp.
    ///
    /// # Returns
    /// - `Ok(true)` - The member is newly tracked
    /// - `Ok(false)` - The member was already tracked
    pub async fn on_member_join(&self, user_id: u64) -> Result<bool, AppError> {
        let repo = PointsRepository::new(self.points);
        let created = repo.mark_joined(user_id).await?;
        if created {
            info!("Added {} to the points ledger", user_id);
        }
        Ok(created)
    }

    /// Stamps a member's entry with their departure time.
    ///
    /// # Returns
    /// - `Ok(true)` - The entry was stamped
    /// - `Ok(false)` - The member was never tracked
    pub async fn on_member_leave(
        &self,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let repo = PointsRepository::new(self.points);
        let marked = repo.mark_left(user_id, now).await?;
        if marked {
            info!("Marked {} as left at {}", user_id, now);
        }
        Ok(marked)
    }

    /// Purges entries for members who left more than `retention_days` ago.
    ///
    /// Validates the window before touching storage; entries that never left
    /// are retained regardless of age. Safe to call repeatedly.
    ///
    /// # Arguments
    /// - `now` - The sweep's reference instant
    /// - `retention_days` - How long departed members' entries are kept
    ///
    /// # Returns
    /// - `Ok(usize)` - How many entries were removed
    /// - `Err(AppError::InvalidInput)` - Negative or out-of-range window
    pub async fn run_retention_sweep(
        &self,
        now: DateTime<Utc>,
        retention_days: i64,
    ) -> Result<usize, AppError> {
        if retention_days < 0 {
            return Err(AppError::InvalidInput(format!(
                "Retention window must be non-negative, got {} days",
                retention_days
            )));
        }

        let window = chrono::Duration::try_days(retention_days).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Retention window of {} days is out of range",
                retention_days
            ))
        })?;
        let cutoff = now.checked_sub_signed(window).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Retention window of {} days is out of range",
                retention_days
            ))
        })?;

        let repo = PointsRepository::new(self.points);
        let removed = repo.sweep_departed(cutoff).await?;
        if removed > 0 {
            info!(
                "Removed {} members inactive for over {} days",
                removed, retention_days
            );
        }
        Ok(removed)
    }
}
