//! Async authorization front end.
//!
//! [`Authorizer`] wraps the pure engine for request handlers. Per decision
//! it loads the resource's owning space from a [`SpaceStore`] (no caching),
//! checks that the space really owns the resource, and evaluates. Denials
//! become [`PolicyError::Forbidden`]; how that maps onto a response is up to
//! the host.

use spacegate_org::{Actor, OwnedResource, Space};
use spacegate_rbac::{Action, ActionSet};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::engine::{evaluate, Decision};
use crate::error::{PolicyError, PolicyResult};
use crate::store::SpaceStore;

/// Authorizes actors against space-owned resources.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use spacegate_org::{Actor, Attachment, Space, SpaceVisibility};
/// use spacegate_policy::{Authorizer, MemorySpaceStore, PolicyError};
/// use spacegate_rbac::Action;
/// use uuid::Uuid;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Arc::new(MemorySpaceStore::new());
/// let space = Space::new("Lab", "lab").with_visibility(SpaceVisibility::Public);
/// let attachment = Attachment::new(space.id, Uuid::now_v7(), "slides.pdf");
/// store.upsert(space).await;
///
/// let authorizer = Authorizer::new(store);
/// assert!(authorizer.authorize(&Actor::Anonymous, Action::Show, &attachment).await.is_ok());
/// assert!(matches!(
///     authorizer.authorize(&Actor::Anonymous, Action::Destroy, &attachment).await,
///     Err(PolicyError::Forbidden { .. })
/// ));
/// # }
/// ```
pub struct Authorizer<S: SpaceStore + ?Sized> {
    store: Arc<S>,
    config: PolicyConfig,
}

impl<S: SpaceStore + ?Sized> std::fmt::Debug for Authorizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("config", &self.config)
            .finish()
    }
}

impl<S: SpaceStore + ?Sized> Clone for Authorizer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: SpaceStore + ?Sized> Authorizer<S> {
    /// Create an authorizer with the default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: PolicyConfig::default(),
        }
    }

    /// Create an authorizer with a validated configuration.
    pub fn with_config(store: Arc<S>, config: PolicyConfig) -> PolicyResult<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Evaluate against a caller-supplied snapshot of the owning space.
    ///
    /// Rejects a space that does not own the resource instead of producing
    /// a decision for it.
    pub fn check_snapshot<R>(
        &self,
        actor: &Actor,
        resource: &R,
        space: &Space,
    ) -> PolicyResult<ActionSet>
    where
        R: OwnedResource + ?Sized,
    {
        self.decide(actor, resource, space).map(|d| d.actions)
    }

    /// Load the live owning space and resolve the actor's actions.
    pub async fn actions_for<R>(&self, actor: &Actor, resource: &R) -> PolicyResult<ActionSet>
    where
        R: OwnedResource + Sync + ?Sized,
    {
        let space = self.load_space(resource.space_id()).await?;
        self.check_snapshot(actor, resource, &space)
    }

    /// Require a single action.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Forbidden`] when the action is not granted, plus any
    /// lookup error from [`load_space`](Self::load_space).
    pub async fn authorize<R>(&self, actor: &Actor, action: Action, resource: &R) -> PolicyResult<()>
    where
        R: OwnedResource + Sync + ?Sized,
    {
        let space = self.load_space(resource.space_id()).await?;
        let decision = self.decide(actor, resource, &space)?;

        if decision.allows(action) {
            debug!(actor = %actor, action = %action, tier = %decision.tier, "access granted");
            return Ok(());
        }

        if self.config.audit_decisions {
            info!(
                actor = %actor,
                action = %action,
                tier = %decision.tier,
                space_id = %space.id,
                resource_id = %resource.resource_id(),
                "access denied"
            );
        } else {
            debug!(actor = %actor, action = %action, tier = %decision.tier, "access denied");
        }
        Err(PolicyError::Forbidden { action })
    }

    /// Fetch the current state of a space, bounded by the lookup timeout.
    pub async fn load_space(&self, space_id: Uuid) -> PolicyResult<Space> {
        let timeout = self.config.lookup_timeout();
        match tokio::time::timeout(timeout, self.store.find_space(space_id)).await {
            Ok(Ok(Some(space))) => {
                debug!(space_id = %space_id, "loaded space");
                Ok(space)
            }
            Ok(Ok(None)) => Err(PolicyError::SpaceNotFound(space_id)),
            Ok(Err(e)) => {
                warn!(space_id = %space_id, error = %e, "space lookup failed");
                Err(e)
            }
            Err(_) => {
                warn!(space_id = %space_id, timeout_ms = self.config.lookup_timeout_ms, "space lookup timed out");
                Err(PolicyError::LookupTimeout(timeout))
            }
        }
    }

    fn decide<R>(&self, actor: &Actor, resource: &R, space: &Space) -> PolicyResult<Decision>
    where
        R: OwnedResource + ?Sized,
    {
        if resource.space_id() != space.id {
            warn!(
                resource_id = %resource.resource_id(),
                resource_space = %resource.space_id(),
                space_id = %space.id,
                "resource checked against a space that does not own it"
            );
            return Err(PolicyError::SpaceMismatch {
                resource_space: resource.space_id(),
                space: space.id,
            });
        }
        Ok(evaluate(actor, resource, space))
    }
}
