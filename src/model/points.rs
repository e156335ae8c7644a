//! Points ledger domain models.
//!
//! Provides the per-member ledger entry and the persisted document shape.
//! Entries are keyed by stringified user id in the on-disk document, matching
//! the external interface consumed by operators and migration tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted points document: stringified user id to ledger entry.
pub type PointsDocument = BTreeMap<String, PointsEntry>;

/// A member's ledger entry.
///
/// Created on first observed membership or first point grant. `left_at` is
/// set when the member is observed leaving and is never cleared on re-join;
/// the retention sweep deletes the whole entry once `left_at` is older than
/// the retention window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    /// Accumulated reward points. May go negative; no clamping is applied.
    #[serde(default)]
    pub points: f64,
    /// When the member was observed leaving the community, if ever.
    #[serde(default)]
    pub left_at: Option<DateTime<Utc>>,
}

impl Default for PointsEntry {
    fn default() -> Self {
        Self {
            points: 0.0,
            left_at: None,
        }
    }
}

/// One row of the points leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    /// Id of the member.
    pub user_id: u64,
    /// The member's current point total.
    pub points: f64,
}
