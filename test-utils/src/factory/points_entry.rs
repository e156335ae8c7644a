//! Factory for raw points ledger entries.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Builds a ledger entry for a current member.
///
/// # Arguments
/// - `points` - The member's point total
pub fn entry(points: f64) -> Value {
    json!({ "points": points, "left_at": null })
}

/// Builds a ledger entry for a member who left the community.
///
/// # Arguments
/// - `points` - The member's point total
/// - `left_at` - When the member was observed leaving
pub fn departed_entry(points: f64, left_at: DateTime<Utc>) -> Value {
    json!({ "points": points, "left_at": left_at.to_rfc3339() })
}
