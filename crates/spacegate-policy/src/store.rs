//! Space lookup
//!
//! The authorizer reads the live owning space through [`SpaceStore`] on
//! every decision. Hosts back it with their database; [`MemorySpaceStore`]
//! serves single-process deployments and tests.

use async_trait::async_trait;
use spacegate_org::Space;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::PolicyResult;

/// Accessor for the current state of a space.
#[async_trait]
pub trait SpaceStore: Send + Sync {
    /// Find a space by id.
    ///
    /// Returns `Ok(None)` when the space does not exist.
    async fn find_space(&self, space_id: Uuid) -> PolicyResult<Option<Space>>;
}

/// In-memory space store.
#[derive(Debug, Clone, Default)]
pub struct MemorySpaceStore {
    spaces: Arc<RwLock<HashMap<Uuid, Space>>>,
}

impl MemorySpaceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a space.
    pub async fn upsert(&self, space: Space) -> Option<Space> {
        self.spaces.write().await.insert(space.id, space)
    }

    /// Remove a space.
    pub async fn remove(&self, space_id: Uuid) -> Option<Space> {
        self.spaces.write().await.remove(&space_id)
    }

    /// Apply a change to a stored space.
    ///
    /// # Returns
    ///
    /// `true` if the space existed.
    pub async fn update<F>(&self, space_id: Uuid, change: F) -> bool
    where
        F: FnOnce(&mut Space) + Send,
    {
        match self.spaces.write().await.get_mut(&space_id) {
            Some(space) => {
                change(space);
                true
            }
            None => false,
        }
    }

    /// Number of stored spaces.
    pub async fn len(&self) -> usize {
        self.spaces.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.spaces.read().await.is_empty()
    }
}

#[async_trait]
impl SpaceStore for MemorySpaceStore {
    async fn find_space(&self, space_id: Uuid) -> PolicyResult<Option<Space>> {
        Ok(self.spaces.read().await.get(&space_id).cloned())
    }
}
