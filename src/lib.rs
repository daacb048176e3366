//! # FA2: Embeddable Multi-Asset Token Ledger
//!
//! An in-process implementation of the FA2 token standard's ledger
//! semantics: batched transfers, operator grants, and balance queries over
//! single-asset, multi-asset, and non-fungible ledgers.
//!
//! This library provides a complete ledger engine including:
//! - Atomic, order-sensitive transfer batches with running balances
//! - Owner-managed operator grants scoped to (owner, operator, token)
//! - Batched balance queries with configurable undefined-token policy
//! - A closed four-kind rejection taxonomy with stable names
//! - Snapshot and reset for deterministic test harnesses
//!
//! ## Quick Start
//!
//! ```rust
//! use fa2::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let alice = Address::parse("0x00000000000000000000000000000000000000aa")?;
//!     let bob = Address::parse("0x00000000000000000000000000000000000000bb")?;
//!
//!     // One token, id 0, supply 1000, fully held by alice.
//!     let ledger = TokenLedger::from_config(&LedgerConfig::single_asset(alice))?;
//!
//!     ledger.transfer(alice, &[Transfer::single(alice, bob, TokenId::new(0), 66)])?;
//!
//!     let responses = ledger.balance_of(&[
//!         BalanceRequest::new(alice, TokenId::new(0)),
//!         BalanceRequest::new(bob, TokenId::new(0)),
//!     ])?;
//!     assert_eq!(responses[0].balance, 934);
//!     assert_eq!(responses[1].balance, 66);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The engine is organized into four crates:
//!
//! - [`fa2_primitives`] - Addresses, token ids, amounts, ledger variants
//! - [`fa2_config`] - Construction-time configuration and genesis presets
//! - [`fa2_state`] - Registry, balance, and operator stores with invariants
//! - [`fa2_ledger`] - The batch engines and the serialized facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export all public APIs from the member crates
pub use fa2_config as config;
pub use fa2_ledger as ledger;
pub use fa2_primitives as primitives;
pub use fa2_state as state;

/// Common imports for working against the ledger facade.
pub mod prelude {
    pub use crate::config::{BalanceQueryPolicy, LedgerConfig, TokenGenesis};
    pub use crate::ledger::{
        BalanceRequest, BalanceResponse, ErrorKind, LedgerError, LedgerResult, OperatorUpdate,
        TokenLedger, Transfer, TransferLeg,
    };
    pub use crate::primitives::{Address, Amount, LedgerVariant, TokenId};
    pub use crate::state::{LedgerState, LedgerStateBuilder};
}
