//! # Actions
//!
//! Defines the actions that can be performed on a space-owned resource.
//! The set is fixed business policy: seven RESTful operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0}")]
pub struct ParseActionError(pub String);

/// Actions that can be performed on a resource owned by a space.
///
/// - **Index**: See that the resource exists in its collection
/// - **Show**: View the resource contents
/// - **New**: Open the form for a new resource
/// - **Create**: Create a new resource
/// - **Edit**: Open the form for modifying the resource
/// - **Update**: Modify the resource
/// - **Destroy**: Remove the resource
///
/// `Index` is a list-membership check. It says "the collection is visible",
/// not "this item's contents are visible".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// List the resources of a collection.
    Index,

    /// View a single resource.
    Show,

    /// Request the form for a new resource.
    New,

    /// Create a new resource.
    Create,

    /// Request the form for editing a resource.
    Edit,

    /// Modify an existing resource.
    Update,

    /// Permanently remove a resource.
    Destroy,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 7;

    /// Get the string representation of the action.
    ///
    /// # Returns
    ///
    /// A static string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Show => "show",
            Action::New => "new",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use spacegate_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("show"), Some(Action::Show));
    /// assert_eq!(Action::parse("view"), Some(Action::Show)); // Alias
    /// assert_eq!(Action::parse("DELETE"), Some(Action::Destroy)); // Alias
    /// assert_eq!(Action::parse("manage"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "index" | "list" => Some(Action::Index),
            "show" | "view" | "read" => Some(Action::Show),
            "new" => Some(Action::New),
            "create" | "add" => Some(Action::Create),
            "edit" => Some(Action::Edit),
            "update" | "modify" | "patch" => Some(Action::Update),
            "destroy" | "delete" | "remove" => Some(Action::Destroy),
            _ => None,
        }
    }

    /// Get all actions, in declaration order.
    pub fn all() -> [Self; Self::COUNT] {
        [
            Action::Index,
            Action::Show,
            Action::New,
            Action::Create,
            Action::Edit,
            Action::Update,
            Action::Destroy,
        ]
    }

    /// Bit position of this action inside an [`ActionSet`](crate::ActionSet).
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Destroy)
    }

    /// Check if this is a read-only action.
    ///
    /// `New` and `Edit` only render forms, but they exist to lead into a
    /// write and are therefore not read-only.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::Index | Action::Show)
    }

    /// Check if this action modifies a resource.
    pub fn is_write(&self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Destroy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s).ok_or_else(|| ParseActionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::parse("index"), Some(Action::Index));
        assert_eq!(Action::parse("list"), Some(Action::Index));

        assert_eq!(Action::parse("show"), Some(Action::Show));
        assert_eq!(Action::parse("read"), Some(Action::Show));

        assert_eq!(Action::parse("new"), Some(Action::New));
        assert_eq!(Action::parse("create"), Some(Action::Create));
        assert_eq!(Action::parse("add"), Some(Action::Create));

        assert_eq!(Action::parse("edit"), Some(Action::Edit));
        assert_eq!(Action::parse("patch"), Some(Action::Update));

        assert_eq!(Action::parse("Destroy"), Some(Action::Destroy));
        assert_eq!(Action::parse("remove"), Some(Action::Destroy));

        assert_eq!(Action::parse("invalid"), None);
    }

    #[test]
    fn test_action_as_str_round_trips_through_parse() {
        for action in Action::all() {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_from_str_error() {
        let err = "manage".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("manage".to_string()));
        assert_eq!(err.to_string(), "Unknown action: manage");
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Destroy.to_string(), "destroy");
        assert_eq!(format!("{}", Action::New), "new");
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u8;
        for action in Action::all() {
            assert_eq!(seen & action.bit(), 0);
            seen |= action.bit();
        }
        assert_eq!(seen.count_ones() as usize, Action::COUNT);
    }

    #[test]
    fn test_classification() {
        assert!(Action::Index.is_read_only());
        assert!(Action::Show.is_read_only());
        assert!(!Action::New.is_read_only());
        assert!(!Action::Edit.is_read_only());

        assert!(Action::Create.is_write());
        assert!(Action::Update.is_write());
        assert!(Action::Destroy.is_write());
        assert!(!Action::Show.is_write());

        assert!(Action::Destroy.is_destructive());
        assert!(!Action::Update.is_destructive());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Action::Destroy).unwrap();
        assert_eq!(json, "\"destroy\"");
        let action: Action = serde_json::from_str("\"index\"").unwrap();
        assert_eq!(action, Action::Index);
    }
}
