//! Actors
//!
//! The identity performing an action. Actors are passed explicitly to every
//! decision; nothing reads a "current user" from ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The identity performing an action.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use spacegate_org::Actor;
///
/// // A session without a persisted user is anonymous
/// assert_eq!(Actor::classify(None, false), Actor::Anonymous);
///
/// let id = Uuid::now_v7();
/// assert_eq!(Actor::classify(Some(id), false), Actor::registered(id));
/// assert_eq!(Actor::classify(Some(id), true), Actor::Superuser);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// A visitor without an account
    Anonymous,

    /// A registered user
    Registered {
        /// The user's id
        user_id: Uuid,
    },

    /// A global administrator, independent of any space
    Superuser,
}

impl Actor {
    /// Shorthand for [`Actor::Registered`].
    pub fn registered(user_id: Uuid) -> Self {
        Actor::Registered { user_id }
    }

    /// Map an authenticated identity to an actor.
    ///
    /// An identity without a persisted id is anonymous, even when it carries
    /// the superuser flag.
    pub fn classify(user_id: Option<Uuid>, superuser: bool) -> Self {
        match (user_id, superuser) {
            (None, _) => Actor::Anonymous,
            (Some(_), true) => Actor::Superuser,
            (Some(user_id), false) => Actor::Registered { user_id },
        }
    }

    /// The user id of a registered actor.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Actor::Registered { user_id } => Some(*user_id),
            Actor::Anonymous | Actor::Superuser => None,
        }
    }

    /// Check if this is the superuser.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Actor::Superuser)
    }

    /// Check if this is an anonymous visitor.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }

    /// Short name of the actor variant, for logs.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Actor::Anonymous => "anonymous",
            Actor::Registered { .. } => "registered",
            Actor::Superuser => "superuser",
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Actor::Anonymous
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Registered { user_id } => write!(f, "registered:{}", user_id),
            other => f.write_str(other.kind_str()),
        }
    }
}
