//! Operator store: the set of live delegation grants.

use crate::keys::OperatorKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// All operator grants of one ledger.
///
/// A grant is pure presence: it exists or it does not. Adding an existing
/// grant and removing an absent one are both no-ops. Grant keys are not
/// checked against the registry; a grant naming an undefined token is inert
/// until such a token is defined. Grants are independent of balances and
/// never revoked by a balance reaching zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorStore {
    grants: BTreeSet<OperatorKey>,
}

impl OperatorStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the grant is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &OperatorKey) -> bool {
        self.grants.contains(key)
    }

    /// Adds a grant. Returns `false` if it was already present.
    pub fn add(&mut self, key: OperatorKey) -> bool {
        self.grants.insert(key)
    }

    /// Removes a grant. Returns `false` if it was absent.
    pub fn remove(&mut self, key: &OperatorKey) -> bool {
        self.grants.remove(key)
    }

    /// Iterates over all grants in key order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorKey> {
        self.grants.iter()
    }

    /// Number of live grants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether no grants exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
