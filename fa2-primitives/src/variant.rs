//! Ledger variant and the per-variant behavior table.

use crate::token::Amount;
use serde::{Deserialize, Serialize};

/// Shape of the ledger, fixed at construction time.
///
/// The variant is never mutable at runtime; all variant-specific behavior is
/// dispatched through the [`VariantRules`] table rather than through separate
/// ledger types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerVariant {
    /// Exactly one token id; accounting is owner → quantity.
    #[default]
    Single,
    /// Many token ids; accounting is owner × token → quantity.
    Multi,
    /// Many token ids, each with unit supply and one exclusive owner.
    NonFungible,
}

impl LedgerVariant {
    /// Returns the behavior table for this variant.
    #[must_use]
    pub const fn rules(self) -> VariantRules {
        match self {
            Self::Single => VariantRules {
                max_leg_amount: None,
                unit_supply: false,
                single_token: true,
            },
            Self::Multi => VariantRules {
                max_leg_amount: None,
                unit_supply: false,
                single_token: false,
            },
            Self::NonFungible => VariantRules {
                max_leg_amount: Some(1),
                unit_supply: true,
                single_token: false,
            },
        }
    }

    /// Whether this is the non-fungible variant.
    #[inline]
    #[must_use]
    pub const fn is_non_fungible(self) -> bool {
        matches!(self, Self::NonFungible)
    }
}

impl std::str::FromStr for LedgerVariant {
    type Err = crate::error::PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            "non-fungible" | "nonfungible" | "non_fungible" | "nft" => Ok(Self::NonFungible),
            _ => Err(crate::error::PrimitiveError::invalid_format(format!(
                "unknown ledger variant: {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for LedgerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
            Self::NonFungible => write!(f, "non-fungible"),
        }
    }
}

/// Variant-specific predicates consulted by validation.
///
/// One engine serves all three variants; the differences live entirely in
/// this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRules {
    /// Upper bound on the amount of a single transfer leg, if any.
    pub max_leg_amount: Option<Amount>,
    /// Every registered token must declare a total supply of exactly one.
    pub unit_supply: bool,
    /// The registry must hold exactly one token id.
    pub single_token: bool,
}

impl VariantRules {
    /// Whether a transfer leg of `amount` units satisfies the per-leg bound.
    #[inline]
    #[must_use]
    pub fn allows_leg_amount(&self, amount: Amount) -> bool {
        match self.max_leg_amount {
            Some(max) => amount <= max,
            None => true,
        }
    }

    /// Whether a declared total supply is acceptable for this variant.
    #[inline]
    #[must_use]
    pub fn allows_supply(&self, supply: Amount) -> bool {
        !self.unit_supply || supply == 1
    }
}
