//! Operator batch validation.
//!
//! Every instruction in an operator batch must name the signer as owner;
//! nobody grants or revokes on someone else's behalf. Instructions apply
//! in order and are idempotent: re-adding an existing grant or removing a
//! missing one succeeds without effect, so the last instruction for a
//! given (owner, operator, token) triple wins.
//!
//! Grants are keyed triples only. The token is not required to be
//! registered, and a grant is never consumed or revoked by transfers.

use fa2_primitives::Address;
use fa2_state::LedgerState;
use tracing::trace;

use crate::batch::OperatorUpdate;
use crate::error::{LedgerError, LedgerResult};

/// Applies an operator batch to `state`.
///
/// Authorization depends only on each instruction and the signer, never on
/// store contents, so the batch is checked in full before any grant is
/// touched. A failed batch therefore leaves the store unchanged even when
/// earlier instructions were individually valid.
pub fn apply_batch(
    state: &mut LedgerState,
    signer: Address,
    updates: &[OperatorUpdate],
) -> LedgerResult<()> {
    for update in updates {
        let param = update.param();
        if param.owner != signer {
            return Err(LedgerError::not_owner(param.owner, signer));
        }
    }

    for update in updates {
        let param = update.param();
        let changed = state.set_operator(param.key(), update.is_add());
        trace!(
            owner = %param.owner,
            operator = %param.operator,
            token_id = %param.token_id,
            add = update.is_add(),
            changed,
            "operator instruction applied"
        );
    }

    Ok(())
}
