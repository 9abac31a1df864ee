//! # Action Sets
//!
//! Unordered sets of [`Action`]s. A set is a seven-bit mask, so every
//! operation is constant time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

use crate::actions::Action;

const ALL_BITS: u8 = (1 << Action::COUNT) - 1;

/// A set of actions an actor may perform on a resource.
///
/// Serializes as a list of action names in declaration order.
///
/// # Example
///
/// ```
/// use spacegate_rbac::{Action, ActionSet};
///
/// let mut set = ActionSet::none();
/// set.insert(Action::Index);
/// set.insert(Action::Show);
///
/// assert_eq!(set, ActionSet::only([Action::Index, Action::Show]));
/// assert_eq!(set.to_string(), "{index, show}");
/// assert!(set.is_subset(&ActionSet::full()));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Action>", from = "Vec<Action>")]
pub struct ActionSet {
    bits: u8,
}

impl ActionSet {
    /// The set of every action.
    pub const fn full() -> Self {
        Self { bits: ALL_BITS }
    }

    /// The empty set.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// A set containing exactly the given actions.
    pub fn only<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().collect()
    }

    /// Every action except the given ones.
    ///
    /// # Example
    ///
    /// ```
    /// use spacegate_rbac::{Action, ActionSet};
    ///
    /// let set = ActionSet::except([Action::Index]);
    /// assert!(!set.contains(Action::Index));
    /// assert_eq!(set.len(), 6);
    /// ```
    pub fn except<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        Self::full().without(Self::only(actions))
    }

    /// This set with the actions of `other` removed.
    pub fn without(self, other: ActionSet) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Add an action. Returns `true` if it was not already present.
    pub fn insert(&mut self, action: Action) -> bool {
        let absent = !self.contains(action);
        self.bits |= action.bit();
        absent
    }

    /// Remove an action. Returns `true` if it was present.
    pub fn remove(&mut self, action: Action) -> bool {
        let present = self.contains(action);
        self.bits &= !action.bit();
        present
    }

    /// Check if the set contains an action.
    pub fn contains(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    /// Actions in either set.
    pub fn union(self, other: ActionSet) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Actions in both sets.
    pub fn intersection(self, other: ActionSet) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Actions in this set but not in `other`. Same as [`without`](Self::without).
    pub fn difference(self, other: ActionSet) -> Self {
        self.without(other)
    }

    /// Check if every action of this set is also in `other`.
    pub fn is_subset(&self, other: &ActionSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Check if this set contains every action of `other`.
    pub fn is_superset(&self, other: &ActionSet) -> bool {
        other.is_subset(self)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if the set contains every action.
    pub fn is_full(&self) -> bool {
        self.bits == ALL_BITS
    }

    /// Number of actions in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the actions in declaration order.
    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            next: 0,
        }
    }
}

/// Iterator over the actions of an [`ActionSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    set: ActionSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let all = Action::all();
        while self.next < all.len() {
            let action = all[self.next];
            self.next += 1;
            if self.set.contains(action) {
                return Some(action);
            }
        }
        None
    }
}

impl IntoIterator for ActionSet {
    type Item = Action;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &ActionSet {
    type Item = Action;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::none();
        set.extend(iter);
        set
    }
}

impl Extend<Action> for ActionSet {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        for action in iter {
            self.insert(action);
        }
    }
}

impl From<Action> for ActionSet {
    fn from(action: Action) -> Self {
        Self { bits: action.bit() }
    }
}

impl From<Vec<Action>> for ActionSet {
    fn from(actions: Vec<Action>) -> Self {
        actions.into_iter().collect()
    }
}

impl From<ActionSet> for Vec<Action> {
    fn from(set: ActionSet) -> Self {
        set.iter().collect()
    }
}

impl BitOr for ActionSet {
    type Output = ActionSet;

    fn bitor(self, rhs: ActionSet) -> ActionSet {
        self.union(rhs)
    }
}

impl BitAnd for ActionSet {
    type Output = ActionSet;

    fn bitand(self, rhs: ActionSet) -> ActionSet {
        self.intersection(rhs)
    }
}

impl Sub for ActionSet {
    type Output = ActionSet;

    fn sub(self, rhs: ActionSet) -> ActionSet {
        self.without(rhs)
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(action.as_str())?;
        }
        f.write_str("}")
    }
}
