//! FA2 Ledger Configuration Module
//!
//! Construction-time configuration for a ledger instance: the variant, the
//! balance-query policy, and the genesis token set. Loadable from TOML:
//!
//! ```toml
//! variant = "multi"
//! query_policy = "strict"
//!
//! [[tokens]]
//! id = 0
//! supply = 1000
//! owner = "0x00000000000000000000000000000000000000aa"
//!
//! [[tokens]]
//! id = 1
//! supply = 1000
//! owner = "0x00000000000000000000000000000000000000aa"
//! ```

use fa2_primitives::{Address, Amount, LedgerVariant, TokenId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default total supply for fungible genesis tokens.
pub const DEFAULT_FUNGIBLE_SUPPLY: u64 = 1000;

/// Number of tokens minted by the non-fungible genesis preset.
pub const DEFAULT_NFT_COUNT: u64 = 4;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed configuration violates a shape rule.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the violated rule.
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid configuration error.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// How balance queries treat token ids missing from the registry.
///
/// The standard leaves this unspecified; the choice is fixed per ledger at
/// construction and never silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BalanceQueryPolicy {
    /// Any request naming an undefined token fails the whole query batch,
    /// mirroring the transfer path.
    #[default]
    Strict,
    /// Undefined tokens resolve to balance zero.
    Permissive,
}

impl fmt::Display for BalanceQueryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Permissive => write!(f, "permissive"),
        }
    }
}

impl FromStr for BalanceQueryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" | "lenient" => Ok(Self::Permissive),
            _ => Err(ConfigError::invalid(format!(
                "unknown balance query policy: {s:?}"
            ))),
        }
    }
}

/// One genesis token: its id, fixed total supply, and the account that
/// starts out holding the entire supply.
///
/// Supplies are `u64` here because TOML integers are 64-bit; they widen to
/// [`Amount`] when the ledger state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGenesis {
    /// Token identifier.
    pub id: TokenId,
    /// Fixed total supply.
    pub supply: u64,
    /// Initial holder of the full supply.
    pub owner: Address,
}

impl TokenGenesis {
    /// Creates a genesis entry.
    #[must_use]
    pub const fn new(id: TokenId, supply: u64, owner: Address) -> Self {
        Self { id, supply, owner }
    }

    /// The supply widened to the engine's amount type.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.supply as Amount
    }
}

/// Ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Ledger shape, immutable after construction.
    pub variant: LedgerVariant,
    /// Undefined-token behavior of balance queries.
    #[serde(default)]
    pub query_policy: BalanceQueryPolicy,
    /// Genesis token set.
    #[serde(default)]
    pub tokens: Vec<TokenGenesis>,
}

impl LedgerConfig {
    /// Single-asset preset: one token id `0` with the default fungible
    /// supply, fully held by `owner`.
    #[must_use]
    pub fn single_asset(owner: Address) -> Self {
        Self {
            variant: LedgerVariant::Single,
            query_policy: BalanceQueryPolicy::default(),
            tokens: vec![TokenGenesis::new(
                TokenId::new(0),
                DEFAULT_FUNGIBLE_SUPPLY,
                owner,
            )],
        }
    }

    /// Multi-asset preset: token ids `0` and `1`, each with the default
    /// fungible supply, fully held by `owner`.
    #[must_use]
    pub fn multi_asset(owner: Address) -> Self {
        Self {
            variant: LedgerVariant::Multi,
            query_policy: BalanceQueryPolicy::default(),
            tokens: (0..2)
                .map(|id| TokenGenesis::new(TokenId::new(id), DEFAULT_FUNGIBLE_SUPPLY, owner))
                .collect(),
        }
    }

    /// Non-fungible preset: token ids `0..4`, unit supply each, all owned
    /// by `owner`.
    #[must_use]
    pub fn non_fungible(owner: Address) -> Self {
        Self {
            variant: LedgerVariant::NonFungible,
            query_policy: BalanceQueryPolicy::default(),
            tokens: (0..DEFAULT_NFT_COUNT)
                .map(|id| TokenGenesis::new(TokenId::new(id), 1, owner))
                .collect(),
        }
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for shape violations.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, plus the
    /// errors of [`LedgerConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks the shape rules the variant imposes on the genesis set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the violated rule.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tokens.is_empty() {
            return Err(ConfigError::invalid("at least one genesis token required"));
        }

        let rules = self.variant.rules();
        if rules.single_token && self.tokens.len() != 1 {
            return Err(ConfigError::invalid(format!(
                "variant {} requires exactly one token, got {}",
                self.variant,
                self.tokens.len()
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for token in &self.tokens {
            if !seen.insert(token.id) {
                return Err(ConfigError::invalid(format!(
                    "duplicate genesis token id {}",
                    token.id
                )));
            }
            if !rules.allows_supply(token.amount()) {
                return Err(ConfigError::invalid(format!(
                    "variant {} requires unit supply, token {} declares {}",
                    self.variant, token.id, token.supply
                )));
            }
        }

        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::single_asset(Address::zero())
    }
}
