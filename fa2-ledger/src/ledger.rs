//! The shared ledger facade.
//!
//! [`TokenLedger`] owns the state behind a single mutex and funnels every
//! entrypoint through it, so concurrent batches execute one at a time in
//! lock-acquisition order. A batch observes a quiescent state, and its
//! writes become visible all at once; read paths take the same lock, so a
//! query never sees a half-applied batch.

use fa2_config::{BalanceQueryPolicy, LedgerConfig};
use fa2_primitives::{Address, Amount, LedgerVariant, TokenId};
use fa2_state::{LedgerState, OperatorKey, StateResult};
use parking_lot::Mutex;
use tracing::debug;

use crate::batch::{BalanceRequest, BalanceResponse, OperatorUpdate, Transfer};
use crate::error::{LedgerError, LedgerResult};
use crate::{operator, query, transfer};

/// A ledger instance: fixed variant and query policy, mutex-guarded state.
#[derive(Debug)]
pub struct TokenLedger {
    variant: LedgerVariant,
    query_policy: BalanceQueryPolicy,
    inner: Mutex<LedgerState>,
}

impl TokenLedger {
    /// Wraps a ledger state for shared use.
    ///
    /// The initial state is re-validated here because states can arrive
    /// from deserialized snapshots, not only from the builder.
    ///
    /// # Errors
    ///
    /// Returns any invariant violation the initial state carries.
    pub fn new(initial: LedgerState, query_policy: BalanceQueryPolicy) -> StateResult<Self> {
        initial.check_invariants()?;
        Ok(Self {
            variant: initial.variant(),
            query_policy,
            inner: Mutex::new(initial),
        })
    }

    /// Builds a ledger from a validated configuration: every genesis token
    /// is registered with its declared supply, fully held by its owner.
    ///
    /// # Errors
    ///
    /// Returns the state error if the genesis set violates the variant's
    /// invariants.
    pub fn from_config(config: &LedgerConfig) -> StateResult<Self> {
        let mut builder = LedgerState::builder(config.variant);
        for token in &config.tokens {
            builder = builder
                .token(token.id, token.amount())
                .balance(token.owner, token.id, token.amount());
        }
        Self::new(builder.build()?, config.query_policy)
    }

    /// The variant this ledger was built for.
    #[inline]
    #[must_use]
    pub fn variant(&self) -> LedgerVariant {
        self.variant
    }

    /// The undefined-token behavior of [`TokenLedger::balance_of`].
    #[inline]
    #[must_use]
    pub fn query_policy(&self) -> BalanceQueryPolicy {
        self.query_policy
    }

    /// Executes a transfer batch.
    ///
    /// All-or-nothing: either every leg of every group commits, or the
    /// first failing leg's error is returned and no balance changes.
    ///
    /// # Errors
    ///
    /// Returns the first per-leg failure in batch order.
    pub fn transfer(&self, signer: Address, groups: &[Transfer]) -> LedgerResult<()> {
        let mut state = self.inner.lock();
        match transfer::apply_batch(&state, signer, groups) {
            Ok(delta) => {
                debug!(
                    signer = %signer,
                    groups = groups.len(),
                    writes = delta.len(),
                    "transfer batch committed"
                );
                state.commit_balances(delta);
                Ok(())
            }
            Err(err) => {
                debug!(signer = %signer, error = %err, "transfer batch rejected");
                Err(err)
            }
        }
    }

    /// Executes an operator batch signed by `signer`.
    ///
    /// # Errors
    ///
    /// Returns `NotOwner` if any instruction names an owner other than the
    /// signer; no instruction applies in that case.
    pub fn update_operators(
        &self,
        signer: Address,
        updates: &[OperatorUpdate],
    ) -> LedgerResult<()> {
        let mut state = self.inner.lock();
        match operator::apply_batch(&mut state, signer, updates) {
            Ok(()) => {
                debug!(signer = %signer, updates = updates.len(), "operator batch applied");
                Ok(())
            }
            Err(err) => {
                debug!(signer = %signer, error = %err, "operator batch rejected");
                Err(err)
            }
        }
    }

    /// Resolves a balance query batch under this ledger's query policy.
    ///
    /// # Errors
    ///
    /// Under the strict policy, returns `TokenUndefined` if any request
    /// names an unregistered token.
    pub fn balance_of(&self, requests: &[BalanceRequest]) -> LedgerResult<Vec<BalanceResponse>> {
        let state = self.inner.lock();
        query::resolve(&state, self.query_policy, requests)
    }

    /// Whether a token id is registered.
    #[must_use]
    pub fn token_exists(&self, token_id: TokenId) -> bool {
        self.inner.lock().tokens().exists(token_id)
    }

    /// The fixed total supply of a registered token.
    ///
    /// # Errors
    ///
    /// Returns `TokenUndefined` for an unregistered id.
    pub fn total_supply(&self, token_id: TokenId) -> LedgerResult<Amount> {
        self.inner
            .lock()
            .tokens()
            .total_supply(token_id)
            .ok_or_else(|| LedgerError::token_undefined(token_id))
    }

    /// Whether `operator` currently holds a grant for `owner`'s `token_id`.
    ///
    /// Owners are implicitly authorized for their own balances; this only
    /// reports explicit grants.
    #[must_use]
    pub fn is_operator(&self, owner: Address, operator: Address, token_id: TokenId) -> bool {
        self.inner
            .lock()
            .operators()
            .contains(&OperatorKey::new(owner, operator, token_id))
    }

    /// A detached copy of the current state, suitable as a later reset
    /// target or for persistence.
    #[must_use]
    pub fn snapshot(&self) -> LedgerState {
        self.inner.lock().clone()
    }

    /// Replaces the entire ledger content with `target`.
    ///
    /// # Errors
    ///
    /// Returns `VariantMismatch` for a cross-variant target and any
    /// invariant violation the target carries; the current state survives
    /// a failed reset unchanged.
    pub fn reset(&self, target: LedgerState) -> StateResult<()> {
        self.inner.lock().reset(target)
    }
}
