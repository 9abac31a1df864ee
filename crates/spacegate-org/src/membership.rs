//! Membership domain model
//!
//! A membership links a registered user to a space with a [`SpaceRole`].
//! Memberships live inside the [`Space`](crate::Space) snapshot, keyed by
//! user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::SpaceRole;

/// Space membership linking a user to a space.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use spacegate_org::{SpaceMembership, SpaceRole};
///
/// let space_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = SpaceMembership::new(space_id, user_id, SpaceRole::Member);
/// assert!(!membership.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceMembership {
    /// Space ID
    pub space_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the space
    pub role: SpaceRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,
}

impl SpaceMembership {
    /// Creates a new membership that starts now.
    pub fn new(space_id: Uuid, user_id: Uuid, role: SpaceRole) -> Self {
        Self {
            space_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }

    /// Check if this membership carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Replace the role, keeping the join date.
    pub fn with_role(mut self, role: SpaceRole) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_role_keeps_join_date() {
        let membership = SpaceMembership::new(Uuid::now_v7(), Uuid::now_v7(), SpaceRole::Member);
        let joined_at = membership.joined_at;

        let promoted = membership.with_role(SpaceRole::Admin);
        assert!(promoted.is_admin());
        assert_eq!(promoted.joined_at, joined_at);
    }

    #[test]
    fn test_serialization() {
        let membership = SpaceMembership::new(Uuid::now_v7(), Uuid::now_v7(), SpaceRole::Admin);
        let json = serde_json::to_value(&membership).unwrap();
        assert_eq!(json["role"], "admin");

        let back: SpaceMembership = serde_json::from_value(json).unwrap();
        assert_eq!(back, membership);
    }
}
