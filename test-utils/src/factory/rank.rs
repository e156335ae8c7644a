//! Factory for raw rank rules.

use serde_json::{json, Value};

/// Builds a rank rule.
///
/// # Arguments
/// - `role_id` - Role granted by the promotion
/// - `points_required` - Point total required to qualify
/// - `requires_roles` - Roles that must already be held
pub fn rule(role_id: u64, points_required: f64, requires_roles: &[u64]) -> Value {
    json!({
        "role_id": role_id,
        "points_required": points_required,
        "requires_roles": requires_roles,
    })
}
