//! Space domain model
//!
//! A space is the container that owns attachments and defines the
//! visibility, lifecycle and membership that access to them depends on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::membership::SpaceMembership;
use crate::roles::SpaceRole;

/// Error returned when a space snapshot contradicts itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// A membership is filed under a different user than it names
    #[error("Membership keyed by {key} belongs to user {user_id}")]
    MemberKeyMismatch {
        /// Map key the membership was stored under.
        key: Uuid,
        /// User the membership record names.
        user_id: Uuid,
    },

    /// A membership names a different space
    #[error("Membership of user {user_id} belongs to space {membership_space}, not {space}")]
    MemberSpaceMismatch {
        /// User the membership record names.
        user_id: Uuid,
        /// Space the membership record names.
        membership_space: Uuid,
        /// Space holding the membership.
        space: Uuid,
    },
}

/// Who can see a space's contents without being a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpaceVisibility {
    /// Visible to everyone, including anonymous visitors
    Public,

    /// Visible to members only
    Private,
}

impl SpaceVisibility {
    /// Get string representation of the visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// A space and its current state.
///
/// `enabled` and `approved` form the quarantine gate: when either is false
/// the space is quarantined. Quarantine never touches `members`, so roles
/// come back unchanged once the space is enabled and approved again.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use spacegate_org::{Space, SpaceRole, SpaceVisibility};
///
/// let admin = Uuid::now_v7();
/// let mut space = Space::new("Physics Lab", "physics-lab")
///     .with_visibility(SpaceVisibility::Public)
///     .with_member(admin, SpaceRole::Admin);
///
/// space.disable();
/// assert!(space.is_quarantined());
/// assert!(space.is_admin(admin));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SpaceRecord")]
pub struct Space {
    /// Unique identifier for the space
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug
    pub slug: String,

    /// Space description
    pub description: Option<String>,

    /// Whether non-members can see the space's contents
    pub public: bool,

    /// Soft-disable flag
    pub enabled: bool,

    /// Moderation flag
    pub approved: bool,

    /// Members keyed by user id
    pub members: HashMap<Uuid, SpaceMembership>,

    /// When the space was created
    pub created_at: DateTime<Utc>,

    /// When the space was last updated
    pub updated_at: DateTime<Utc>,
}

/// Wire form of [`Space`], checked before it becomes one.
#[derive(Deserialize)]
struct SpaceRecord {
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    public: bool,
    enabled: bool,
    approved: bool,
    #[serde(default)]
    members: HashMap<Uuid, SpaceMembership>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SpaceRecord> for Space {
    type Error = SnapshotError;

    fn try_from(record: SpaceRecord) -> Result<Self, Self::Error> {
        let space = Space {
            id: record.id,
            name: record.name,
            slug: record.slug,
            description: record.description,
            public: record.public,
            enabled: record.enabled,
            approved: record.approved,
            members: record.members,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        space.validate()?;
        Ok(space)
    }
}

impl Space {
    /// Creates a new space.
    ///
    /// The space starts private, enabled and approved, with no members.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            public: false,
            enabled: true,
            approved: true,
            members: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: SpaceVisibility) -> Self {
        self.public = visibility == SpaceVisibility::Public;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a member while building the space.
    pub fn with_member(mut self, user_id: Uuid, role: SpaceRole) -> Self {
        self.add_member(user_id, role);
        self
    }

    /// The space's visibility.
    pub fn visibility(&self) -> SpaceVisibility {
        if self.public {
            SpaceVisibility::Public
        } else {
            SpaceVisibility::Private
        }
    }

    /// Check if the space is public.
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Check if the space is both enabled and approved.
    pub fn is_active(&self) -> bool {
        self.enabled && self.approved
    }

    /// Check if the space is disabled or unapproved.
    pub fn is_quarantined(&self) -> bool {
        !self.is_active()
    }

    /// Disable the space. Membership is preserved.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.touch();
    }

    /// Re-enable a disabled space.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.touch();
    }

    /// Mark the space as approved by a moderator.
    pub fn approve(&mut self) {
        self.approved = true;
        self.touch();
    }

    /// Withdraw moderation approval. Membership is preserved.
    pub fn unapprove(&mut self) {
        self.approved = false;
        self.touch();
    }

    /// Add a member or change the role of an existing one.
    ///
    /// An existing member keeps their original join date.
    ///
    /// # Returns
    ///
    /// The previous role, if the user was already a member.
    pub fn add_member(&mut self, user_id: Uuid, role: SpaceRole) -> Option<SpaceRole> {
        let previous = self.role_of(user_id);
        let membership = match self.members.remove(&user_id) {
            Some(existing) => existing.with_role(role),
            None => SpaceMembership::new(self.id, user_id, role),
        };
        self.members.insert(user_id, membership);
        self.touch();
        previous
    }

    /// Remove a member. Any admin role goes with the membership.
    pub fn remove_member(&mut self, user_id: Uuid) -> Option<SpaceMembership> {
        let removed = self.members.remove(&user_id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Get the membership of a user, if any.
    pub fn membership(&self, user_id: Uuid) -> Option<&SpaceMembership> {
        self.members.get(&user_id)
    }

    /// Get the role of a user, or `None` for non-members.
    pub fn role_of(&self, user_id: Uuid) -> Option<SpaceRole> {
        self.members.get(&user_id).map(|m| m.role)
    }

    /// Check if a user is a member with any role.
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains_key(&user_id)
    }

    /// Check if a user is an admin of this space.
    pub fn is_admin(&self, user_id: Uuid) -> bool {
        self.role_of(user_id).map(|r| r.is_admin()).unwrap_or(false)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// User ids of the space admins.
    pub fn admin_ids(&self) -> Vec<Uuid> {
        self.members
            .values()
            .filter(|m| m.is_admin())
            .map(|m| m.user_id)
            .collect()
    }

    /// Check that every membership is filed under its own user and names
    /// this space.
    ///
    /// Role lookups go through the map key, so a record filed under the
    /// wrong key would hand its role to another user.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (key, membership) in &self.members {
            if membership.user_id != *key {
                return Err(SnapshotError::MemberKeyMismatch {
                    key: *key,
                    user_id: membership.user_id,
                });
            }
            if membership.space_id != self.id {
                return Err(SnapshotError::MemberSpaceMismatch {
                    user_id: membership.user_id,
                    membership_space: membership.space_id,
                    space: self.id,
                });
            }
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_space_defaults() {
        let space = Space::new("Lab", "lab");
        assert!(!space.is_public());
        assert_eq!(space.visibility(), SpaceVisibility::Private);
        assert!(space.is_active());
        assert_eq!(space.member_count(), 0);
    }

    #[test]
    fn test_visibility() {
        let space = Space::new("Lab", "lab").with_visibility(SpaceVisibility::Public);
        assert!(space.public);
        assert_eq!(space.visibility().as_str(), "public");

        let space = space.with_visibility(SpaceVisibility::Private);
        assert!(!space.public);
    }

    #[test]
    fn test_quarantine_flags() {
        let mut space = Space::new("Lab", "lab");

        space.disable();
        assert!(space.is_quarantined());
        space.enable();
        assert!(space.is_active());

        space.unapprove();
        assert!(space.is_quarantined());
        space.approve();
        assert!(space.is_active());
    }

    #[test]
    fn test_quarantine_preserves_membership() {
        let user = Uuid::now_v7();
        let mut space = Space::new("Lab", "lab").with_member(user, SpaceRole::Admin);

        space.disable();
        space.unapprove();
        assert_eq!(space.role_of(user), Some(SpaceRole::Admin));

        space.enable();
        space.approve();
        assert!(space.is_admin(user));
    }

    #[test]
    fn test_add_member_changes_role() {
        let user = Uuid::now_v7();
        let mut space = Space::new("Lab", "lab");

        assert_eq!(space.add_member(user, SpaceRole::Member), None);
        let joined_at = space.membership(user).map(|m| m.joined_at);

        assert_eq!(space.add_member(user, SpaceRole::Admin), Some(SpaceRole::Member));
        assert!(space.is_admin(user));
        assert_eq!(space.membership(user).map(|m| m.joined_at), joined_at);
        assert_eq!(space.member_count(), 1);
    }

    #[test]
    fn test_remove_member_drops_admin() {
        let user = Uuid::now_v7();
        let mut space = Space::new("Lab", "lab").with_member(user, SpaceRole::Admin);

        let removed = space.remove_member(user).unwrap();
        assert_eq!(removed.role, SpaceRole::Admin);
        assert!(!space.is_member(user));
        assert!(!space.is_admin(user));
        assert_eq!(space.role_of(user), None);
        assert!(space.remove_member(user).is_none());
    }

    #[test]
    fn test_admin_ids() {
        let admin = Uuid::now_v7();
        let member = Uuid::now_v7();
        let space = Space::new("Lab", "lab")
            .with_member(admin, SpaceRole::Admin)
            .with_member(member, SpaceRole::Member);

        assert_eq!(space.admin_ids(), vec![admin]);
    }

    #[test]
    fn test_membership_records_space_id() {
        let user = Uuid::now_v7();
        let space = Space::new("Lab", "lab").with_member(user, SpaceRole::Member);
        assert_eq!(space.membership(user).unwrap().space_id, space.id);
    }

    #[test]
    fn test_serialization_round_trip() {
        let user = Uuid::now_v7();
        let space = Space::new("Lab", "lab")
            .with_description("Shared lab material")
            .with_member(user, SpaceRole::Member);

        let json = serde_json::to_string(&space).unwrap();
        let back: Space = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, space.id);
        assert_eq!(back.role_of(user), Some(SpaceRole::Member));
        assert_eq!(back.description.as_deref(), Some("Shared lab material"));
    }

    #[test]
    fn test_deserialize_rejects_membership_under_foreign_key() {
        let admin = Uuid::now_v7();
        let impostor = Uuid::now_v7();
        let space = Space::new("Lab", "lab").with_member(admin, SpaceRole::Admin);

        let mut json = serde_json::to_value(&space).unwrap();
        let record = json["members"][admin.to_string()].take();
        let mut members = serde_json::Map::new();
        members.insert(impostor.to_string(), record);
        json["members"] = serde_json::Value::Object(members);

        let err = serde_json::from_value::<Space>(json).unwrap_err();
        assert!(err.to_string().contains("Membership keyed by"));
    }

    #[test]
    fn test_deserialize_rejects_membership_of_other_space() {
        let user = Uuid::now_v7();
        let space = Space::new("Lab", "lab").with_member(user, SpaceRole::Member);

        let mut json = serde_json::to_value(&space).unwrap();
        json["members"][user.to_string()]["space_id"] =
            serde_json::json!(Uuid::now_v7().to_string());

        let err = serde_json::from_value::<Space>(json).unwrap_err();
        assert!(err.to_string().contains("belongs to space"));
    }

    #[test]
    fn test_validate_catches_hand_built_mismatch() {
        let user = Uuid::now_v7();
        let other = Uuid::now_v7();
        let mut space = Space::new("Lab", "lab").with_member(user, SpaceRole::Admin);
        assert!(space.validate().is_ok());

        let membership = space.members.remove(&user).unwrap();
        space.members.insert(other, membership);
        assert_eq!(
            space.validate(),
            Err(SnapshotError::MemberKeyMismatch {
                key: other,
                user_id: user,
            })
        );
    }
}
