//! Authorization predicate for privileged operations.
//!
//! The command dispatcher evaluates this predicate before invoking any
//! privileged core operation, and again for target members where an action
//! requires the target to hold a group role (for example, crediting a
//! nameplate to someone who is actually a nameplate designer). Plain
//! function composition; the dispatcher decides what to do on refusal.

use std::collections::{BTreeMap, BTreeSet};

/// Role- and user-based privilege policy.
///
/// Members are authorized for a group when they appear in the
/// always-privileged user list, hold an always-privileged role, or hold one
/// of the group's roles. Unknown group names grant only the
/// always-privileged sets.
#[derive(Debug, Clone, Default)]
pub struct PrivilegePolicy {
    /// Roles privileged for every group.
    pub always_privileged_roles: Vec<u64>,
    /// Users privileged for every group regardless of roles.
    pub always_privileged_users: Vec<u64>,
    /// Named privilege groups and the roles that grant them.
    pub groups: BTreeMap<String, Vec<u64>>,
}

impl PrivilegePolicy {
    /// Checks whether a member may perform an operation in `group`.
    ///
    /// # Arguments
    /// - `group` - Privilege group of the operation, or `None` for
    ///   operations gated only on the always-privileged sets
    /// - `user_id` - Id of the acting (or targeted) member
    /// - `user_role_ids` - Roles the member currently holds
    ///
    /// # Returns
    /// - `bool` - Whether the member is authorized
    pub fn is_authorized(&self, group: Option<&str>, user_id: u64, user_role_ids: &[u64]) -> bool {
        if self.always_privileged_users.contains(&user_id) {
            return true;
        }

        let mut allowed: BTreeSet<u64> = self.always_privileged_roles.iter().copied().collect();
        if let Some(group) = group {
            if let Some(roles) = self.groups.get(group) {
                allowed.extend(roles.iter().copied());
            }
        }

        user_role_ids.iter().any(|role_id| allowed.contains(role_id))
    }
}
