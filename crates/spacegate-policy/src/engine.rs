//! Policy evaluation engine.
//!
//! [`evaluate`] is a pure function of its three inputs: the actor, the
//! resource, and the resource's owning space. It never fails and never
//! reads ambient state. Evaluation is an ordered match:
//!
//! 1. **Superuser**: every action, regardless of space state
//! 2. **Quarantine**: a disabled or unapproved space yields nothing
//! 3. **Role / visibility matrix**: see [`DecisionTier`]
//!
//! Callers must pass the resource's true owning space. Use
//! [`Authorizer::check_snapshot`](crate::Authorizer::check_snapshot) when
//! that is not already guaranteed.

use serde::Serialize;
use spacegate_org::{Actor, OwnedResource, Space, SpaceRole, SpaceVisibility};
use spacegate_rbac::{Action, ActionSet};
use std::fmt;
use tracing::{debug, instrument};

/// The row of the rule table that produced a decision.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DecisionTier {
    /// Global override
    Superuser,

    /// Space is disabled or unapproved
    Quarantined,

    /// Space admin
    Admin,

    /// Member who authored the resource
    Author,

    /// Author who is not a member of the owning space
    DetachedAuthor,

    /// Member who did not author the resource
    Member,

    /// Non-member or anonymous visitor of a public space
    PublicVisitor,

    /// Non-member or anonymous visitor of a private space
    PrivateVisitor,
}

impl DecisionTier {
    /// The actions granted by this tier.
    ///
    /// Authors get `destroy` but never `edit` or `update`.
    pub fn actions(&self) -> ActionSet {
        match self {
            DecisionTier::Superuser | DecisionTier::Admin => ActionSet::full(),
            DecisionTier::Quarantined => ActionSet::none(),
            DecisionTier::Author => ActionSet::only([
                Action::Index,
                Action::Show,
                Action::New,
                Action::Create,
                Action::Destroy,
            ]),
            DecisionTier::Member => {
                ActionSet::only([Action::Index, Action::Show, Action::New, Action::Create])
            }
            DecisionTier::PublicVisitor => ActionSet::only([Action::Index, Action::Show]),
            DecisionTier::DetachedAuthor | DecisionTier::PrivateVisitor => {
                ActionSet::from(Action::Index)
            }
        }
    }

    /// Get string representation of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTier::Superuser => "superuser",
            DecisionTier::Quarantined => "quarantined",
            DecisionTier::Admin => "admin",
            DecisionTier::Author => "author",
            DecisionTier::DetachedAuthor => "detached_author",
            DecisionTier::Member => "member",
            DecisionTier::PublicVisitor => "public_visitor",
            DecisionTier::PrivateVisitor => "private_visitor",
        }
    }

    fn visitor(visibility: SpaceVisibility) -> Self {
        match visibility {
            SpaceVisibility::Public => DecisionTier::PublicVisitor,
            SpaceVisibility::Private => DecisionTier::PrivateVisitor,
        }
    }
}

impl fmt::Display for DecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one evaluation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Decision {
    /// Which rule matched
    pub tier: DecisionTier,

    /// What the actor may do
    pub actions: ActionSet,
}

impl Decision {
    fn from_tier(tier: DecisionTier) -> Self {
        Self {
            tier,
            actions: tier.actions(),
        }
    }

    /// Check if the decision grants an action.
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(action)
    }
}

/// Evaluates which rule applies and what it grants.
///
/// # Tracing
///
/// Instrumented at debug level with the actor, space and resource ids; the
/// chosen tier is logged as a debug event.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        actor = %actor,
        space_id = %space.id,
        resource = resource.kind().as_str(),
        resource_id = %resource.resource_id(),
    )
)]
pub fn evaluate<R>(actor: &Actor, resource: &R, space: &Space) -> Decision
where
    R: OwnedResource + ?Sized,
{
    let tier = select_tier(actor, resource, space);
    let decision = Decision::from_tier(tier);
    debug!(tier = tier.as_str(), actions = %decision.actions, "policy decision");
    decision
}

/// Resolves the set of actions an actor may perform on a resource.
///
/// Total over well-formed input; an empty set is the only form of denial.
pub fn resolve<R>(actor: &Actor, resource: &R, space: &Space) -> ActionSet
where
    R: OwnedResource + ?Sized,
{
    evaluate(actor, resource, space).actions
}

/// Checks a single action.
pub fn permits<R>(actor: &Actor, action: Action, resource: &R, space: &Space) -> bool
where
    R: OwnedResource + ?Sized,
{
    evaluate(actor, resource, space).allows(action)
}

fn select_tier<R>(actor: &Actor, resource: &R, space: &Space) -> DecisionTier
where
    R: OwnedResource + ?Sized,
{
    // Superuser is checked before quarantine; arm order is the rule order.
    let user_id = match actor {
        Actor::Superuser => return DecisionTier::Superuser,
        _ if space.is_quarantined() => return DecisionTier::Quarantined,
        Actor::Anonymous => return DecisionTier::visitor(space.visibility()),
        Actor::Registered { user_id } => *user_id,
    };

    let is_author = resource.is_authored_by(user_id);
    // Removal from the member map drops an admin role with it.
    match (space.role_of(user_id), is_author) {
        (Some(SpaceRole::Admin), _) => DecisionTier::Admin,
        (Some(SpaceRole::Member), true) => DecisionTier::Author,
        (Some(SpaceRole::Member), false) => DecisionTier::Member,
        (None, true) => DecisionTier::DetachedAuthor,
        (None, false) => DecisionTier::visitor(space.visibility()),
    }
}
