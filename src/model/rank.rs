//! Rank rule domain models and parameters.

use serde::{Deserialize, Serialize};

/// A named promotion threshold.
///
/// A member qualifies for the rank once their point total reaches
/// `points_required` and they hold every role in `requires_roles`. The rank
/// collection is stored unordered by name; evaluation sorts by
/// `points_required` descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRule {
    /// Role granted by the promotion.
    pub role_id: u64,
    /// Point total required to qualify.
    pub points_required: f64,
    /// Roles the member must already hold to qualify.
    #[serde(default)]
    pub requires_roles: Vec<u64>,
}

/// Parameters for creating or replacing a rank rule.
#[derive(Debug, Clone)]
pub struct UpsertRankParam {
    /// Unique rank name, the key in the rank collection.
    pub name: String,
    /// Role granted by the promotion.
    pub role_id: u64,
    /// Point total required to qualify.
    pub points_required: f64,
    /// Roles the member must already hold to qualify.
    pub requires_roles: Vec<u64>,
}
