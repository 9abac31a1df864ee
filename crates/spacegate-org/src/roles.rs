//! Space roles
//!
//! A registered user's standing within a single space. Absence of a role
//! means the user is not a member.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a space role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown space role: {0}")]
pub struct ParseRoleError(pub String);

/// User role within a space.
///
/// The hierarchy is: Member < Admin
///
/// # Permission Model
///
/// - **Member**: Can browse the space and contribute new resources
/// - **Admin**: Full control over every resource in the space
///
/// # Examples
///
/// ```
/// use spacegate_org::SpaceRole;
///
/// assert!(SpaceRole::Admin > SpaceRole::Member);
/// assert!(SpaceRole::Admin.is_admin());
/// assert!(!SpaceRole::Member.is_admin());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpaceRole {
    /// Regular member of the space
    Member = 1,

    /// Administrator of the space
    Admin = 2,
}

impl SpaceRole {
    /// Check if this role has admin privileges.
    pub fn is_admin(&self) -> bool {
        *self >= SpaceRole::Admin
    }

    /// Parse role from string representation.
    ///
    /// `"user"` is accepted as the legacy name of a plain member.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacegate_org::SpaceRole;
    ///
    /// assert_eq!(SpaceRole::parse("Admin"), Some(SpaceRole::Admin));
    /// assert_eq!(SpaceRole::parse("user"), Some(SpaceRole::Member));
    /// assert_eq!(SpaceRole::parse("owner"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "member" | "user" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
        }
    }
}

impl Default for SpaceRole {
    fn default() -> Self {
        Self::Member
    }
}

impl fmt::Display for SpaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpaceRole::parse(s).ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_role_hierarchy() {
        assert!(SpaceRole::Admin > SpaceRole::Member);
        assert_eq!(SpaceRole::default(), SpaceRole::Member);
    }

    #[test]
    fn test_space_role_parse() {
        assert_eq!(SpaceRole::parse("admin"), Some(SpaceRole::Admin));
        assert_eq!(SpaceRole::parse("MEMBER"), Some(SpaceRole::Member));
        assert_eq!(SpaceRole::parse("User"), Some(SpaceRole::Member));
        assert_eq!(SpaceRole::parse("invalid"), None);
    }

    #[test]
    fn test_space_role_from_str() {
        assert_eq!("admin".parse::<SpaceRole>(), Ok(SpaceRole::Admin));
        let err = "guest".parse::<SpaceRole>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown space role: guest");
    }

    #[test]
    fn test_space_role_strings() {
        assert_eq!(SpaceRole::Admin.as_str(), "admin");
        assert_eq!(SpaceRole::Member.display_name(), "Member");
        assert_eq!(SpaceRole::Member.to_string(), "member");
    }
}
