//! Promotion eligibility evaluation.
//!
//! This module determines the single highest rank a member newly qualifies
//! for, given their point total and current roles. Evaluation only reports
//! eligibility; actually assigning the role in the chat platform belongs to
//! the command layer, which calls `PromotionService::check` as an explicit
//! hook after every point-mutating operation.

use crate::data::config::ConfigRepository;
use crate::data::document::DocumentStore;
use crate::data::points::PointsRepository;
use crate::error::AppError;
use crate::model::config::ConfigDocument;
use crate::model::points::PointsDocument;
use crate::model::rank::RankRule;
use std::collections::BTreeMap;

/// Determines the rank a member is due for, if any.
///
/// Ranks are walked in descending `points_required` order. Ranks below the
/// member's current ceiling (the highest requirement among ranks whose role
/// they already hold) are skipped, so a member is never offered a downgrade.
/// The first remaining rank whose point requirement is met, whose
/// prerequisite roles are all held, and whose own role is not yet held wins.
///
/// Pure over its inputs; never mutates the ledger or grants roles.
///
/// # Arguments
/// - `ranks` - The configured rank collection
/// - `user_points` - The member's current point total
/// - `user_role_ids` - Roles the member currently holds
///
/// # Returns
/// - `Some(String)` - Name of the rank the member is due for
/// - `None` - No promotion due
pub fn evaluate(
    ranks: &BTreeMap<String, RankRule>,
    user_points: f64,
    user_role_ids: &[u64],
) -> Option<String> {
    let mut sorted: Vec<(&String, &RankRule)> = ranks.iter().collect();
    sorted.sort_by(|a, b| b.1.points_required.total_cmp(&a.1.points_required));

    let current_ceiling = sorted
        .iter()
        .filter(|(_, rule)| user_role_ids.contains(&rule.role_id))
        .map(|(_, rule)| rule.points_required)
        .fold(0.0, f64::max);

    for (name, rule) in sorted {
        if rule.points_required < current_ceiling {
            continue;
        }

        if user_points >= rule.points_required
            && rule
                .requires_roles
                .iter()
                .all(|role_id| user_role_ids.contains(role_id))
            && !user_role_ids.contains(&rule.role_id)
        {
            return Some(name.clone());
        }
    }

    None
}

/// Service combining the ledger and rank configuration into a promotion
/// check for one member.
pub struct PromotionService<'a> {
    points: &'a DocumentStore<PointsDocument>,
    config: &'a DocumentStore<ConfigDocument>,
}

impl<'a> PromotionService<'a> {
    /// Creates a new PromotionService instance.
    ///
    /// # Arguments
    /// - `points` - Reference to the opened points document store
    /// - `config` - Reference to the opened configuration document store
    pub fn new(
        points: &'a DocumentStore<PointsDocument>,
        config: &'a DocumentStore<ConfigDocument>,
    ) -> Self {
        Self { points, config }
    }

    /// Checks whether a member is due for a promotion.
    ///
    /// # Arguments
    /// - `user_id` - Member to check
    /// - `user_role_ids` - Roles the member currently holds
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Name of the rank the member is due for
    /// - `Ok(None)` - No promotion due
    /// - `Err(AppError)` - Document load failure
    pub async fn check(
        &self,
        user_id: u64,
        user_role_ids: &[u64],
    ) -> Result<Option<String>, AppError> {
        let user_points = PointsRepository::new(self.points).get_points(user_id).await?;
        let ranks = ConfigRepository::new(self.config).get_ranks().await?;
        Ok(evaluate(&ranks, user_points, user_role_ids))
    }
}
