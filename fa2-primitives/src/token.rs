//! Token identifiers and quantities.

use crate::error::PrimitiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quantity of a token.
///
/// Balances and transfer amounts are non-negative; debits are validated by
/// comparison before subtraction, never by wrapping.
pub type Amount = u128;

/// Numeric handle identifying a token class within one ledger.
///
/// A token id carries no meaning of its own; it is *defined* only once the
/// registry holds an entry for it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl TokenId {
    /// Creates a token id from its numeric value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this token id.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TokenId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| PrimitiveError::invalid_format(format!("invalid token id: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_value_roundtrip() {
        let id = TokenId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(TokenId::from(7u64), id);
    }

    #[test]
    fn test_token_id_display_and_parse() {
        let id: TokenId = "42".parse().unwrap();
        assert_eq!(id, TokenId::new(42));
        assert_eq!(id.to_string(), "42");

        assert!("x42".parse::<TokenId>().is_err());
        assert!("-1".parse::<TokenId>().is_err());
    }

    #[test]
    fn test_token_id_serde_transparent() {
        let json = serde_json::to_string(&TokenId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: TokenId = serde_json::from_str("3").unwrap();
        assert_eq!(back, TokenId::new(3));
    }

    #[test]
    fn test_token_id_ordering() {
        assert!(TokenId::new(1) < TokenId::new(2));
    }
}
