//! Pending balance writes for one in-flight transfer batch.

use crate::balance::BalanceStore;
use crate::keys::BalanceKey;
use fa2_primitives::Amount;
use std::collections::BTreeMap;

/// Overlay of uncommitted balance writes.
///
/// Reads hit the overlay first and fall through to the base store, so later
/// legs of a batch observe the effects of earlier legs before anything is
/// committed. The base store is never touched while a batch is validated:
/// on success the whole overlay is committed in one step, on failure it is
/// simply dropped.
#[derive(Debug, Clone, Default)]
pub struct BalanceDelta {
    pending: BTreeMap<BalanceKey, Amount>,
}

impl BalanceDelta {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Running balance for a key: the pending write if one exists, the base
    /// store's entry otherwise.
    #[must_use]
    pub fn balance(&self, base: &BalanceStore, key: &BalanceKey) -> Amount {
        match self.pending.get(key) {
            Some(amount) => *amount,
            None => base.balance(key),
        }
    }

    /// Records a pending write, replacing any earlier write for the key.
    pub fn set(&mut self, key: BalanceKey, amount: Amount) {
        self.pending.insert(key, amount);
    }

    /// Number of keys with pending writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Consumes the overlay, yielding the final write per key in key order.
    #[must_use]
    pub fn into_pending(self) -> BTreeMap<BalanceKey, Amount> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fa2_primitives::{Address, TokenId};

    fn key(owner: u8) -> BalanceKey {
        BalanceKey::new(Address::from([owner; 20]), TokenId::new(0))
    }

    #[test]
    fn test_reads_fall_through_to_base() {
        let mut base = BalanceStore::new();
        base.set(key(1), 1000);

        let delta = BalanceDelta::new();
        assert_eq!(delta.balance(&base, &key(1)), 1000);
        assert_eq!(delta.balance(&base, &key(2)), 0);
    }

    #[test]
    fn test_pending_write_shadows_base() {
        let mut base = BalanceStore::new();
        base.set(key(1), 1000);

        let mut delta = BalanceDelta::new();
        delta.set(key(1), 934);

        assert_eq!(delta.balance(&base, &key(1)), 934);
        // Base is untouched until commit.
        assert_eq!(base.balance(&key(1)), 1000);
    }

    #[test]
    fn test_later_write_replaces_earlier() {
        let base = BalanceStore::new();
        let mut delta = BalanceDelta::new();

        delta.set(key(1), 66);
        delta.set(key(1), 110);

        assert_eq!(delta.balance(&base, &key(1)), 110);
        assert_eq!(delta.len(), 1);
    }

    #[test]
    fn test_dropping_delta_discards_writes() {
        let mut base = BalanceStore::new();
        base.set(key(1), 1000);

        {
            let mut delta = BalanceDelta::new();
            delta.set(key(1), 0);
        }

        assert_eq!(base.balance(&key(1)), 1000);
    }

    #[test]
    fn test_into_pending_yields_final_writes() {
        let mut delta = BalanceDelta::new();
        delta.set(key(2), 5);
        delta.set(key(1), 7);

        let pending: Vec<_> = delta.into_pending().into_iter().collect();
        assert_eq!(pending, vec![(key(1), 7), (key(2), 5)]);
    }
}
