//! Composite keys for the balance and operator stores.

use fa2_primitives::{Address, TokenId};
use serde::{Deserialize, Serialize};

/// Key of one balance entry: an (owner, token) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BalanceKey {
    /// The account holding the balance.
    pub owner: Address,
    /// The token the balance is denominated in.
    pub token_id: TokenId,
}

impl BalanceKey {
    /// Creates a new balance key.
    #[must_use]
    pub const fn new(owner: Address, token_id: TokenId) -> Self {
        Self { owner, token_id }
    }
}

/// Key of one operator grant: owner, operator, and the token the delegation
/// covers.
///
/// Grants are per token id; authority over one token never extends to
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperatorKey {
    /// The account whose balances are delegated.
    pub owner: Address,
    /// The account receiving authority.
    pub operator: Address,
    /// The token the grant covers.
    pub token_id: TokenId,
}

impl OperatorKey {
    /// Creates a new operator key.
    #[must_use]
    pub const fn new(owner: Address, operator: Address, token_id: TokenId) -> Self {
        Self {
            owner,
            operator,
            token_id,
        }
    }
}
