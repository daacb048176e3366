//! Batch instruction and query types.
//!
//! Field and tag names follow the standard's parameter naming where it has
//! one (`txs`, `add_operator`, `remove_operator`), so hosts that speak the
//! wire vocabulary can serialize these directly.

use fa2_primitives::{Address, Amount, TokenId};
use fa2_state::OperatorKey;
use serde::{Deserialize, Serialize};

/// One leg of a transfer group: destination, token, and amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLeg {
    /// Destination account.
    pub to: Address,
    /// Token being moved.
    pub token_id: TokenId,
    /// Quantity to move. Zero is a valid no-op that is still authorized.
    pub amount: Amount,
}

impl TransferLeg {
    /// Creates a transfer leg.
    #[must_use]
    pub const fn new(to: Address, token_id: TokenId, amount: Amount) -> Self {
        Self {
            to,
            token_id,
            amount,
        }
    }
}

/// One transfer group: a source owner and its ordered legs.
///
/// Groups and the legs within them execute strictly in the order given;
/// the engine never reorders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The account every leg of this group debits.
    pub from: Address,
    /// Ordered legs.
    #[serde(rename = "txs")]
    pub legs: Vec<TransferLeg>,
}

impl Transfer {
    /// Creates a transfer group.
    #[must_use]
    pub fn new(from: Address, legs: Vec<TransferLeg>) -> Self {
        Self { from, legs }
    }

    /// Creates a one-leg group.
    #[must_use]
    pub fn single(from: Address, to: Address, token_id: TokenId, amount: Amount) -> Self {
        Self::new(from, vec![TransferLeg::new(to, token_id, amount)])
    }
}

/// The (owner, operator, token) triple named by an operator instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorParam {
    /// Owner whose balances are delegated.
    pub owner: Address,
    /// Operator receiving or losing authority.
    pub operator: Address,
    /// Token the grant covers.
    pub token_id: TokenId,
}

impl OperatorParam {
    /// Creates an operator parameter.
    #[must_use]
    pub const fn new(owner: Address, operator: Address, token_id: TokenId) -> Self {
        Self {
            owner,
            operator,
            token_id,
        }
    }

    /// The store key this parameter addresses.
    #[must_use]
    pub const fn key(&self) -> OperatorKey {
        OperatorKey::new(self.owner, self.operator, self.token_id)
    }
}

/// One operator instruction.
///
/// Serializes externally tagged, so the wire form is
/// `{"add_operator": {...}}` or `{"remove_operator": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorUpdate {
    /// Install a grant.
    AddOperator(OperatorParam),
    /// Remove a grant.
    RemoveOperator(OperatorParam),
}

impl OperatorUpdate {
    /// Creates an add instruction.
    #[must_use]
    pub const fn add(owner: Address, operator: Address, token_id: TokenId) -> Self {
        Self::AddOperator(OperatorParam::new(owner, operator, token_id))
    }

    /// Creates a remove instruction.
    #[must_use]
    pub const fn remove(owner: Address, operator: Address, token_id: TokenId) -> Self {
        Self::RemoveOperator(OperatorParam::new(owner, operator, token_id))
    }

    /// The parameter triple of this instruction.
    #[must_use]
    pub const fn param(&self) -> &OperatorParam {
        match self {
            Self::AddOperator(param) | Self::RemoveOperator(param) => param,
        }
    }

    /// Whether this instruction installs (rather than removes) a grant.
    #[must_use]
    pub const fn is_add(&self) -> bool {
        matches!(self, Self::AddOperator(_))
    }
}

/// One balance query: the (owner, token) pair to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Account being queried.
    pub owner: Address,
    /// Token being queried.
    pub token_id: TokenId,
}

impl BalanceRequest {
    /// Creates a balance request.
    #[must_use]
    pub const fn new(owner: Address, token_id: TokenId) -> Self {
        Self { owner, token_id }
    }
}

/// One query result: the echoed request and the balance at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// The request this response answers, echoed verbatim.
    pub request: BalanceRequest,
    /// The balance; zero when the pair has no recorded history.
    pub balance: Amount,
}

impl BalanceResponse {
    /// Creates a balance response.
    #[must_use]
    pub const fn new(request: BalanceRequest, balance: Amount) -> Self {
        Self { request, balance }
    }
}
