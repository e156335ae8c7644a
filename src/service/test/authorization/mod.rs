use std::collections::BTreeMap;

use crate::service::authorization::PrivilegePolicy;


/// Builds the policy used across the authorization tests: role 1 is always
/// privileged, user 900 is always privileged, and two groups exist with
/// partially overlapping roles.
fn policy() -> PrivilegePolicy {
    PrivilegePolicy {
        always_privileged_roles: vec![1],
        always_privileged_users: vec![900],
        groups: BTreeMap::from([
            ("logistics".to_string(), vec![10, 11]),
            ("config".to_string(), vec![11]),
        ]),
    }
}
