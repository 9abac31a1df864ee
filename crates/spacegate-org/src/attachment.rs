//! Space-owned resources
//!
//! Every resource the policy engine decides over belongs to exactly one
//! space and may have an author. [`OwnedResource`] is the accessor the
//! engine reads those two facts through; [`Attachment`] is the resource
//! this crate ships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of space-owned resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A file uploaded to a space repository
    Attachment,
}

impl ResourceKind {
    /// Get string representation of the resource kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
        }
    }
}

/// Accessor for a resource owned by a space.
///
/// The owning space is fixed at creation. Implementors must always report
/// the same `space_id` for the same resource.
pub trait OwnedResource {
    /// Id of the resource itself.
    fn resource_id(&self) -> Uuid;

    /// Id of the owning space.
    fn space_id(&self) -> Uuid;

    /// Id of the user who created the resource, if known.
    fn author_id(&self) -> Option<Uuid>;

    /// Kind of resource, for logs and error messages.
    fn kind(&self) -> ResourceKind;

    /// Check if the given user authored this resource.
    fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id() == Some(user_id)
    }
}

/// A file attached to a space.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use spacegate_org::{Attachment, OwnedResource};
///
/// let space_id = Uuid::now_v7();
/// let author = Uuid::now_v7();
/// let attachment = Attachment::new(space_id, author, "minutes.pdf");
///
/// assert!(attachment.is_authored_by(author));
/// assert_eq!(attachment.space_id(), space_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier for the attachment
    pub id: Uuid,

    /// The owning space
    pub space_id: Uuid,

    /// The uploader
    pub author_id: Uuid,

    /// File title as shown in listings
    pub title: String,

    /// When the attachment was uploaded
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Creates a new attachment in a space.
    pub fn new(space_id: Uuid, author_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            space_id,
            author_id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

impl OwnedResource for Attachment {
    fn resource_id(&self) -> Uuid {
        self.id
    }

    fn space_id(&self) -> Uuid {
        self.space_id
    }

    fn author_id(&self) -> Option<Uuid> {
        Some(self.author_id)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::Attachment
    }
}
