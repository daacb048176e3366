//! Balance store: (owner, token) → quantity.

use crate::keys::BalanceKey;
use fa2_primitives::{Amount, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All recorded balances of one ledger.
///
/// Entries are created implicitly and never deleted: a zero balance is a
/// valid, persistent entry, distinct from "no history". Reads of a key with
/// no entry yield zero either way; `contains` tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "Vec<(BalanceKey, Amount)>",
    from = "Vec<(BalanceKey, Amount)>"
)]
pub struct BalanceStore {
    balances: BTreeMap<BalanceKey, Amount>,
}

impl BalanceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance for a key; zero if the key has no entry.
    #[inline]
    #[must_use]
    pub fn balance(&self, key: &BalanceKey) -> Amount {
        self.balances.get(key).copied().unwrap_or(0)
    }

    /// Whether the key has a recorded entry (possibly zero).
    #[must_use]
    pub fn contains(&self, key: &BalanceKey) -> bool {
        self.balances.contains_key(key)
    }

    /// Writes the balance for a key. Writing zero keeps the entry.
    pub fn set(&mut self, key: BalanceKey, amount: Amount) {
        self.balances.insert(key, amount);
    }

    /// Iterates over all entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&BalanceKey, &Amount)> {
        self.balances.iter()
    }

    /// Sum of all balances recorded for a token, or `None` if the sum
    /// overflows [`Amount`].
    #[must_use]
    pub fn token_total(&self, token_id: TokenId) -> Option<Amount> {
        self.balances
            .iter()
            .filter(|(key, _)| key.token_id == token_id)
            .try_fold(0, |total: Amount, (_, amount)| total.checked_add(*amount))
    }

    /// Number of recorded entries, including zero entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Whether the store has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

// BTreeMap keyed by a struct does not survive JSON map encoding, so the
// serde form is a sequence of entries.
impl From<BalanceStore> for Vec<(BalanceKey, Amount)> {
    fn from(store: BalanceStore) -> Self {
        store.balances.into_iter().collect()
    }
}

impl From<Vec<(BalanceKey, Amount)>> for BalanceStore {
    fn from(entries: Vec<(BalanceKey, Amount)>) -> Self {
        Self {
            balances: entries.into_iter().collect(),
        }
    }
}
