//! # Spacegate Policy
//!
//! Decides which actions an actor may perform on a resource owned by a
//! space.
//!
//! ## Overview
//!
//! - [`engine`]: the pure decision function, [`resolve`]
//! - [`authorizer`]: an async front end that loads the live owning space
//!   from a [`SpaceStore`] and turns denials into errors
//! - [`config`]: environment-driven settings for the authorizer
//! - [`error`]: the validation-layer error taxonomy
//!
//! ## Evaluation Order
//!
//! ```text
//! 1. Superuser              → every action, even on quarantined spaces
//! 2. Disabled or unapproved → nothing
//! 3. Role / visibility matrix
//!      admin                      → every action
//!      author + member            → index, show, new, create, destroy
//!      member                     → index, show, new, create
//!      author, not a member       → index
//!      anyone else, public space  → index, show
//!      anyone else, private space → index
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacegate_org::{Actor, Attachment, Space, SpaceRole, SpaceVisibility};
//! use spacegate_policy::resolve;
//! use spacegate_rbac::{Action, ActionSet};
//! use uuid::Uuid;
//!
//! let member = Uuid::now_v7();
//! let space = Space::new("Lab", "lab")
//!     .with_visibility(SpaceVisibility::Public)
//!     .with_member(member, SpaceRole::Member);
//! let attachment = Attachment::new(space.id, Uuid::now_v7(), "report.pdf");
//!
//! assert_eq!(
//!     resolve(&Actor::Anonymous, &attachment, &space),
//!     ActionSet::only([Action::Index, Action::Show]),
//! );
//! assert_eq!(
//!     resolve(&Actor::registered(member), &attachment, &space),
//!     ActionSet::only([Action::Index, Action::Show, Action::New, Action::Create]),
//! );
//! ```

pub mod authorizer;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;

// Re-export main types for convenience
pub use authorizer::Authorizer;
pub use config::{ConfigError, PolicyConfig};
pub use engine::{evaluate, permits, resolve, Decision, DecisionTier};
pub use error::{PolicyError, PolicyResult};
pub use store::{MemorySpaceStore, SpaceStore};
