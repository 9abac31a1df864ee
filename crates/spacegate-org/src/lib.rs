//! # Spacegate Organization Model
//!
//! The state snapshot the policy engine decides over.
//!
//! ## Overview
//!
//! The spacegate-org crate handles:
//! - **Actors**: Anonymous visitors, registered users and superusers
//! - **Spaces**: Containers with visibility, lifecycle flags and members
//! - **Memberships**: User-space relationships carrying a [`SpaceRole`]
//! - **Resources**: Space-owned resources such as [`Attachment`]s
//!
//! ## Architecture
//!
//! ```text
//! Actor ──(user_id)──┐
//!                    ▼
//! Space ── members: user_id → SpaceMembership { role }
//!   ▲
//!   └── space_id ── Attachment { author_id }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacegate_org::{Actor, Attachment, Space, SpaceRole};
//! use uuid::Uuid;
//!
//! let author = Uuid::now_v7();
//! let space = Space::new("Physics Lab", "physics-lab")
//!     .with_member(author, SpaceRole::Member);
//! let attachment = Attachment::new(space.id, author, "slides.pdf");
//!
//! assert!(space.is_member(author));
//! assert_eq!(Actor::registered(author).user_id(), Some(author));
//! assert_eq!(attachment.space_id, space.id);
//! ```
//!
//! All types here are plain data. Nothing in this crate decides access;
//! that is the job of `spacegate-policy`.

pub mod actor;
pub mod attachment;
pub mod membership;
pub mod roles;
pub mod space;

// Re-export main types for convenience
pub use actor::Actor;
pub use attachment::{Attachment, OwnedResource, ResourceKind};
pub use membership::SpaceMembership;
pub use roles::{ParseRoleError, SpaceRole};
pub use space::{SnapshotError, Space, SpaceVisibility};
