//! The composite ledger state and its construction-time invariants.

use crate::balance::BalanceStore;
use crate::delta::BalanceDelta;
use crate::error::{StateError, StateResult};
use crate::keys::{BalanceKey, OperatorKey};
use crate::operator::OperatorStore;
use crate::registry::{TokenInfo, TokenRegistry};
use fa2_primitives::{Address, Amount, LedgerVariant, TokenId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The whole ledger content: registry, balances, and operator grants, bound
/// to the variant they were validated against.
///
/// The fields are private; mutation goes through [`LedgerState::commit_balances`],
/// [`LedgerState::set_operator`], and [`LedgerState::reset`] so that every
/// reachable state has passed [`LedgerState::check_invariants`] at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    variant: LedgerVariant,
    tokens: TokenRegistry,
    balances: BalanceStore,
    operators: OperatorStore,
}

impl LedgerState {
    /// Starts building a state for the given variant.
    #[must_use]
    pub fn builder(variant: LedgerVariant) -> LedgerStateBuilder {
        LedgerStateBuilder {
            variant,
            tokens: Vec::new(),
            balances: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// The variant this state was validated against.
    #[inline]
    #[must_use]
    pub fn variant(&self) -> LedgerVariant {
        self.variant
    }

    /// The token registry.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// The balance store.
    #[inline]
    #[must_use]
    pub fn balances(&self) -> &BalanceStore {
        &self.balances
    }

    /// The operator store.
    #[inline]
    #[must_use]
    pub fn operators(&self) -> &OperatorStore {
        &self.operators
    }

    /// Applies every pending write of a validated transfer batch.
    ///
    /// The caller is responsible for having validated the delta against this
    /// state; the store applies it verbatim.
    pub fn commit_balances(&mut self, delta: BalanceDelta) {
        for (key, amount) in delta.into_pending() {
            self.balances.set(key, amount);
        }
    }

    /// Installs or removes one operator grant. Returns whether the store
    /// changed.
    pub fn set_operator(&mut self, key: OperatorKey, present: bool) -> bool {
        if present {
            self.operators.add(key)
        } else {
            self.operators.remove(&key)
        }
    }

    /// Verifies the structural invariants of this state.
    ///
    /// Checks, in order: registry arity for the variant, per-token supply
    /// bounds, that every balance entry names a defined token, and the
    /// conservation law (per-token balance sums equal the declared supply).
    /// For unit-supply variants the conservation check also pins exclusive
    /// ownership.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a `StateError`.
    pub fn check_invariants(&self) -> StateResult<()> {
        let rules = self.variant.rules();

        if rules.single_token && self.tokens.len() != 1 {
            return Err(StateError::invalid_state(format!(
                "variant {} requires exactly one token, registry holds {}",
                self.variant,
                self.tokens.len()
            )));
        }

        for info in self.tokens.iter() {
            if !rules.allows_supply(info.total_supply) {
                return Err(StateError::invalid_state(format!(
                    "variant {} requires unit supply, token {} declares {}",
                    self.variant, info.token_id, info.total_supply
                )));
            }
        }

        for (key, _) in self.balances.entries() {
            if !self.tokens.exists(key.token_id) {
                return Err(StateError::unknown_token(key.token_id));
            }
        }

        for info in self.tokens.iter() {
            let actual = self.balances.token_total(info.token_id).ok_or_else(|| {
                StateError::invalid_state(format!(
                    "balances for token {} exceed the amount range",
                    info.token_id
                ))
            })?;
            if actual != info.total_supply {
                return Err(StateError::supply_mismatch(
                    info.token_id,
                    info.total_supply,
                    actual,
                ));
            }
        }

        Ok(())
    }

    /// Replaces the entire ledger content with a validated target state.
    ///
    /// Idempotent: resetting twice to the same target yields the same state.
    /// The target must have been built for the same variant; the variant
    /// itself is immutable at runtime.
    ///
    /// # Errors
    ///
    /// Returns `StateError::VariantMismatch` for a cross-variant target and
    /// any invariant violation the target carries.
    pub fn reset(&mut self, target: LedgerState) -> StateResult<()> {
        if target.variant != self.variant {
            return Err(StateError::variant_mismatch(self.variant, target.variant));
        }
        target.check_invariants()?;

        debug!(
            variant = %self.variant,
            tokens = target.tokens.len(),
            entries = target.balances.len(),
            grants = target.operators.len(),
            "resetting ledger state"
        );
        *self = target;
        Ok(())
    }
}

/// Accumulates genesis content and validates it into a [`LedgerState`].
#[derive(Debug)]
pub struct LedgerStateBuilder {
    variant: LedgerVariant,
    tokens: Vec<TokenInfo>,
    balances: Vec<(BalanceKey, Amount)>,
    operators: Vec<OperatorKey>,
}

impl LedgerStateBuilder {
    /// Declares a token with its fixed total supply.
    #[must_use]
    pub fn token(mut self, token_id: TokenId, total_supply: Amount) -> Self {
        self.tokens.push(TokenInfo::new(token_id, total_supply));
        self
    }

    /// Declares the starting balance of one (owner, token) pair.
    #[must_use]
    pub fn balance(mut self, owner: Address, token_id: TokenId, amount: Amount) -> Self {
        self.balances
            .push((BalanceKey::new(owner, token_id), amount));
        self
    }

    /// Declares a pre-existing operator grant.
    #[must_use]
    pub fn operator(mut self, owner: Address, operator: Address, token_id: TokenId) -> Self {
        self.operators
            .push(OperatorKey::new(owner, operator, token_id));
        self
    }

    /// Validates the accumulated content into a ledger state.
    ///
    /// # Errors
    ///
    /// Returns `StateError::DuplicateToken` for repeated token declarations,
    /// `StateError::InvalidState` for a balance key declared twice, and every
    /// error of [`LedgerState::check_invariants`].
    pub fn build(self) -> StateResult<LedgerState> {
        let mut tokens = TokenRegistry::new();
        for info in self.tokens {
            tokens.register(info)?;
        }

        let mut balances = BalanceStore::new();
        for (key, amount) in self.balances {
            if balances.contains(&key) {
                return Err(StateError::invalid_state(format!(
                    "balance for owner {} token {} declared twice",
                    key.owner, key.token_id
                )));
            }
            balances.set(key, amount);
        }

        let mut operators = OperatorStore::new();
        for key in self.operators {
            operators.add(key);
        }

        let state = LedgerState {
            variant: self.variant,
            tokens,
            balances,
            operators,
        };
        state.check_invariants()?;
        Ok(state)
    }
}
