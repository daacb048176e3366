//! Error types for ledger state construction and validation.

use fa2_primitives::{Amount, LedgerVariant, TokenId};
use thiserror::Error;

/// Errors raised while building, validating, or replacing ledger state.
///
/// These are construction-family failures; batch processing surfaces its own
/// taxonomy in `fa2-ledger`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A balance or registry operation referenced a token the registry does
    /// not define.
    #[error("Token {token_id} is not defined in the registry")]
    UnknownToken {
        /// The undefined token id.
        token_id: TokenId,
    },

    /// A token id was registered twice.
    #[error("Token {token_id} is already registered")]
    DuplicateToken {
        /// The repeated token id.
        token_id: TokenId,
    },

    /// The balances of a token do not add up to its declared total supply.
    #[error("Token {token_id} supply mismatch: balances sum to {actual}, registry declares {declared}")]
    SupplyMismatch {
        /// The token whose conservation check failed.
        token_id: TokenId,
        /// Supply declared by the registry.
        declared: Amount,
        /// Sum of all balances for the token.
        actual: Amount,
    },

    /// A reset target was built for a different ledger variant.
    #[error("Variant mismatch: ledger is {expected}, target state is {actual}")]
    VariantMismatch {
        /// Variant the ledger was constructed with.
        expected: LedgerVariant,
        /// Variant of the offered target state.
        actual: LedgerVariant,
    },

    /// Any other invariant violation.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl StateError {
    /// Create an unknown token error.
    pub fn unknown_token(token_id: TokenId) -> Self {
        Self::UnknownToken { token_id }
    }

    /// Create a duplicate token error.
    pub fn duplicate_token(token_id: TokenId) -> Self {
        Self::DuplicateToken { token_id }
    }

    /// Create a supply mismatch error.
    pub fn supply_mismatch(token_id: TokenId, declared: Amount, actual: Amount) -> Self {
        Self::SupplyMismatch {
            token_id,
            declared,
            actual,
        }
    }

    /// Create a variant mismatch error.
    pub fn variant_mismatch(expected: LedgerVariant, actual: LedgerVariant) -> Self {
        Self::VariantMismatch { expected, actual }
    }

    /// Create a general invalid state error.
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Result type for state operations.
pub type StateResult<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_error() {
        let err = StateError::unknown_token(TokenId::new(10));
        assert!(matches!(err, StateError::UnknownToken { .. }));
        assert!(err.to_string().contains("Token 10"));
        assert!(err.to_string().contains("not defined"));
    }

    #[test]
    fn test_supply_mismatch_error() {
        let err = StateError::supply_mismatch(TokenId::new(0), 1000, 999);
        assert!(err.to_string().contains("sum to 999"));
        assert!(err.to_string().contains("declares 1000"));
    }

    #[test]
    fn test_variant_mismatch_error() {
        let err = StateError::variant_mismatch(LedgerVariant::Single, LedgerVariant::Multi);
        assert!(err.to_string().contains("ledger is single"));
        assert!(err.to_string().contains("target state is multi"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = StateError::duplicate_token(TokenId::new(1));
        let err2 = StateError::duplicate_token(TokenId::new(1));
        let err3 = StateError::duplicate_token(TokenId::new(2));

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
