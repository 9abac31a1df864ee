//! # Spacegate RBAC
//!
//! The vocabulary of authorization decisions for space-owned resources.
//!
//! ## Overview
//!
//! The spacegate-rbac crate handles:
//! - **Actions**: The fixed set of operations on a resource
//!   (`index`, `show`, `new`, `create`, `edit`, `update`, `destroy`)
//! - **Action Sets**: Unordered sets of actions with union/except helpers
//!
//! ## Usage
//!
//! ```rust
//! use spacegate_rbac::{Action, ActionSet};
//!
//! let visitor = ActionSet::only([Action::Index, Action::Show]);
//! assert!(visitor.contains(Action::Show));
//! assert!(!visitor.contains(Action::Destroy));
//!
//! // Everything but editing
//! let author = ActionSet::except([Action::Edit, Action::Update]);
//! assert!(visitor.is_subset(&author));
//! assert_eq!(author.len(), 5);
//! ```
//!
//! ## Integration with spacegate-policy
//!
//! The policy engine returns an [`ActionSet`] for every decision. An empty
//! set is the only form of denial the engine produces.

pub mod action_set;
pub mod actions;

// Re-export main types for convenience
pub use action_set::ActionSet;
pub use actions::{Action, ParseActionError};
