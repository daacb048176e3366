//! Transfer batch validation.
//!
//! A batch is an ordered list of transfer groups, each an ordered list of
//! legs. Validation walks the legs in a single left-to-right pass, staging
//! every debit and credit in a [`BalanceDelta`] overlay so later legs see
//! the running balances produced by earlier ones. The first failing leg
//! aborts the batch; the caller commits the overlay only on success, so a
//! rejected batch leaves the ledger untouched.
//!
//! Per-leg checks run in a fixed order: the token must be registered, the
//! signer must be the owner or hold an operator grant for the (owner, token)
//! pair, and the debit must fit the owner's running balance. Zero-amount
//! legs move nothing but still pass through every check.

use fa2_primitives::Address;
use fa2_state::{BalanceDelta, BalanceKey, LedgerState, OperatorKey};
use tracing::trace;

use crate::batch::Transfer;
use crate::error::{LedgerError, LedgerResult};

/// Validates a transfer batch against `state` and returns the staged
/// balance writes.
///
/// The returned overlay holds every debit and credit of the batch; the
/// caller applies it with [`LedgerState::commit_balances`]. On error the
/// overlay is discarded and `state` is unchanged.
pub fn apply_batch(
    state: &LedgerState,
    signer: Address,
    groups: &[Transfer],
) -> LedgerResult<BalanceDelta> {
    let rules = state.variant().rules();
    let mut delta = BalanceDelta::new();

    for group in groups {
        for leg in &group.legs {
            if !state.tokens().exists(leg.token_id) {
                return Err(LedgerError::token_undefined(leg.token_id));
            }

            if signer != group.from {
                let grant = OperatorKey::new(group.from, signer, leg.token_id);
                if !state.operators().contains(&grant) {
                    return Err(LedgerError::not_operator(group.from, signer, leg.token_id));
                }
            }

            let source = BalanceKey::new(group.from, leg.token_id);
            let available = delta.balance(state.balances(), &source);
            if !rules.allows_leg_amount(leg.amount) || leg.amount > available {
                return Err(LedgerError::insufficient_balance(
                    group.from,
                    leg.token_id,
                    leg.amount,
                    available,
                ));
            }

            delta.set(source, available - leg.amount);

            // Reading the destination through the overlay makes self-transfers
            // net out instead of double-counting the debit.
            let dest = BalanceKey::new(leg.to, leg.token_id);
            // Credit cannot overflow: per-token balances sum to the fixed
            // total supply.
            let credited = delta.balance(state.balances(), &dest) + leg.amount;
            delta.set(dest, credited);

            trace!(
                from = %group.from,
                to = %leg.to,
                token_id = %leg.token_id,
                amount = leg.amount,
                "transfer leg staged"
            );
        }
    }

    Ok(delta)
}
