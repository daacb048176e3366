//! Token registry: which token ids exist and their fixed total supply.

use crate::error::{StateError, StateResult};
use fa2_primitives::{Amount, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry record for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The token's identifier.
    pub token_id: TokenId,
    /// The token's fixed total supply. Transfers move this quantity around;
    /// nothing mints or burns it.
    pub total_supply: Amount,
}

impl TokenInfo {
    /// Creates a new token record.
    #[must_use]
    pub const fn new(token_id: TokenId, total_supply: Amount) -> Self {
        Self {
            token_id,
            total_supply,
        }
    }
}

/// The set of defined tokens.
///
/// Every other component consults `exists` as its guard; the registry itself
/// never decides which error a missing token turns into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRegistry {
    tokens: BTreeMap<TokenId, TokenInfo>,
}

impl TokenRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token.
    ///
    /// # Errors
    ///
    /// Returns `StateError::DuplicateToken` if the id is already present.
    pub fn register(&mut self, info: TokenInfo) -> StateResult<()> {
        if self.tokens.contains_key(&info.token_id) {
            return Err(StateError::duplicate_token(info.token_id));
        }
        self.tokens.insert(info.token_id, info);
        Ok(())
    }

    /// Whether the token id is defined.
    #[inline]
    #[must_use]
    pub fn exists(&self, token_id: TokenId) -> bool {
        self.tokens.contains_key(&token_id)
    }

    /// Returns the record for a token, if defined.
    #[must_use]
    pub fn get(&self, token_id: TokenId) -> Option<&TokenInfo> {
        self.tokens.get(&token_id)
    }

    /// Returns the fixed total supply of a token, if defined.
    #[must_use]
    pub fn total_supply(&self, token_id: TokenId) -> Option<Amount> {
        self.tokens.get(&token_id).map(|info| info.total_supply)
    }

    /// Iterates over all registered tokens in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenInfo> {
        self.tokens.values()
    }

    /// Number of defined tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
