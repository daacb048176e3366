//! The closed failure taxonomy of batch processing.

use fa2_primitives::{Address, Amount, TokenId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four failure kinds a batch can surface.
///
/// The kind name is the supported test contract: `Display` yields exactly
/// `TokenUndefined`, `NotOperator`, `InsufficientBalance`, or `NotOwner`,
/// and callers may compare on those strings. No further structure is part
/// of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Referenced token id is not in the registry.
    TokenUndefined,
    /// Signer lacks authorization over the balance being moved.
    NotOperator,
    /// A debit would drive a balance negative.
    InsufficientBalance,
    /// Signer tried to update a grant for an owner other than themselves.
    NotOwner,
}

impl ErrorKind {
    /// The on-chain FA2 failwith mnemonic for this kind.
    #[must_use]
    pub const fn fa2_code(self) -> &'static str {
        match self {
            Self::TokenUndefined => "FA2_TOKEN_UNDEFINED",
            Self::NotOperator => "FA2_NOT_OPERATOR",
            Self::InsufficientBalance => "FA2_INSUFFICIENT_BALANCE",
            Self::NotOwner => "FA2_NOT_OWNER",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenUndefined => write!(f, "TokenUndefined"),
            Self::NotOperator => write!(f, "NotOperator"),
            Self::InsufficientBalance => write!(f, "InsufficientBalance"),
            Self::NotOwner => write!(f, "NotOwner"),
        }
    }
}

/// Errors that abort a batch.
///
/// Every kind is terminal for the batch it occurs in: the first failure in
/// scan order is surfaced and nothing the batch did persists. Variants carry
/// diagnostic fields for messages and logs; [`LedgerError::kind`] projects
/// onto the closed [`ErrorKind`] contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The referenced token id is not in the registry.
    #[error("Token {token_id} is not defined")]
    TokenUndefined {
        /// The undefined token id.
        token_id: TokenId,
    },

    /// The signer is neither the source owner nor a granted operator for
    /// this (owner, token) pair.
    #[error("Signer {signer} is not an operator of owner {owner} for token {token_id}")]
    NotOperator {
        /// Owner of the balance being moved.
        owner: Address,
        /// The unauthorized signer.
        signer: Address,
        /// The token the leg touches.
        token_id: TokenId,
    },

    /// A debit exceeds the source's running balance.
    #[error(
        "Insufficient balance of owner {owner} for token {token_id}: required {required}, available {available}"
    )]
    InsufficientBalance {
        /// Owner being debited.
        owner: Address,
        /// The token being moved.
        token_id: TokenId,
        /// Amount the leg requested.
        required: Amount,
        /// Running balance at the time of the leg.
        available: Amount,
    },

    /// The signer tried to add or remove a grant belonging to another owner.
    #[error("Signer {signer} cannot update operators of owner {owner}")]
    NotOwner {
        /// Owner named by the instruction.
        owner: Address,
        /// The signer who is not that owner.
        signer: Address,
    },
}

impl LedgerError {
    /// Create a token undefined error.
    pub const fn token_undefined(token_id: TokenId) -> Self {
        Self::TokenUndefined { token_id }
    }

    /// Create a not operator error.
    pub const fn not_operator(owner: Address, signer: Address, token_id: TokenId) -> Self {
        Self::NotOperator {
            owner,
            signer,
            token_id,
        }
    }

    /// Create an insufficient balance error.
    pub const fn insufficient_balance(
        owner: Address,
        token_id: TokenId,
        required: Amount,
        available: Amount,
    ) -> Self {
        Self::InsufficientBalance {
            owner,
            token_id,
            required,
            available,
        }
    }

    /// Create a not owner error.
    pub const fn not_owner(owner: Address, signer: Address) -> Self {
        Self::NotOwner { owner, signer }
    }

    /// The kind of this error, the only structure callers should rely on.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TokenUndefined { .. } => ErrorKind::TokenUndefined,
            Self::NotOperator { .. } => ErrorKind::NotOperator,
            Self::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            Self::NotOwner { .. } => ErrorKind::NotOwner,
        }
    }
}

/// Result type for batch processing.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
