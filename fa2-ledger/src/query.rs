//! Balance query resolution.
//!
//! Queries are read-only and batched: each request is resolved against the
//! same state snapshot and answered in request order, with the request
//! echoed back alongside its balance. Pairs with no recorded history
//! resolve to zero.

use fa2_config::BalanceQueryPolicy;
use fa2_state::{BalanceKey, LedgerState};

use crate::batch::{BalanceRequest, BalanceResponse};
use crate::error::{LedgerError, LedgerResult};

/// Resolves a balance query batch against `state`.
///
/// Under [`BalanceQueryPolicy::Strict`] a request naming an unregistered
/// token fails the whole batch; under [`BalanceQueryPolicy::Permissive`]
/// it resolves to zero like any other unseen pair.
pub fn resolve(
    state: &LedgerState,
    policy: BalanceQueryPolicy,
    requests: &[BalanceRequest],
) -> LedgerResult<Vec<BalanceResponse>> {
    let mut responses = Vec::with_capacity(requests.len());

    for request in requests {
        let balance = if state.tokens().exists(request.token_id) {
            state
                .balances()
                .balance(&BalanceKey::new(request.owner, request.token_id))
        } else {
            match policy {
                BalanceQueryPolicy::Strict => {
                    return Err(LedgerError::token_undefined(request.token_id));
                }
                BalanceQueryPolicy::Permissive => 0,
            }
        };

        responses.push(BalanceResponse::new(*request, balance));
    }

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fa2_primitives::{Address, LedgerVariant, TokenId};
    use fa2_state::LedgerState;

    use crate::error::ErrorKind;

    fn addr(n: u8) -> Address {
        Address::from([n; 20])
    }

    fn state_with_split_balances() -> LedgerState {
        LedgerState::builder(LedgerVariant::Single)
            .token(TokenId::new(0), 1000)
            .balance(addr(1), TokenId::new(0), 999)
            .balance(addr(3), TokenId::new(0), 1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_responses_follow_request_order() {
        let state = state_with_split_balances();
        let requests = [
            BalanceRequest::new(addr(1), TokenId::new(0)),
            BalanceRequest::new(addr(2), TokenId::new(0)),
            BalanceRequest::new(addr(3), TokenId::new(0)),
        ];

        let responses = resolve(&state, BalanceQueryPolicy::Strict, &requests).unwrap();

        let balances: Vec<u128> = responses.iter().map(|r| r.balance).collect();
        assert_eq!(balances, vec![999, 0, 1]);
        for (response, request) in responses.iter().zip(&requests) {
            assert_eq!(response.request, *request);
        }
    }

    #[test]
    fn test_duplicate_requests_each_answered() {
        let state = state_with_split_balances();
        let request = BalanceRequest::new(addr(1), TokenId::new(0));

        let responses =
            resolve(&state, BalanceQueryPolicy::Strict, &[request, request]).unwrap();

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0], responses[1]);
    }

    #[test]
    fn test_strict_rejects_undefined_token_mid_batch() {
        let state = state_with_split_balances();
        let requests = [
            BalanceRequest::new(addr(1), TokenId::new(0)),
            BalanceRequest::new(addr(1), TokenId::new(10)),
        ];

        let err = resolve(&state, BalanceQueryPolicy::Strict, &requests).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenUndefined);
    }

    #[test]
    fn test_permissive_resolves_undefined_token_to_zero() {
        let state = state_with_split_balances();
        let requests = [
            BalanceRequest::new(addr(1), TokenId::new(10)),
            BalanceRequest::new(addr(1), TokenId::new(0)),
        ];

        let responses = resolve(&state, BalanceQueryPolicy::Permissive, &requests).unwrap();
        assert_eq!(responses[0].balance, 0);
        assert_eq!(responses[1].balance, 999);
    }

    #[test]
    fn test_empty_batch_yields_empty_response() {
        let state = state_with_split_balances();
        let responses = resolve(&state, BalanceQueryPolicy::Strict, &[]).unwrap();
        assert!(responses.is_empty());
    }
}
