//! # FA2 Ledger
//!
//! The transaction engine of the FA2 ledger: batch types, the per-leg
//! validation rules, and the mutex-guarded [`TokenLedger`] facade.
//!
//! - `batch`: transfer, operator, and query instruction types
//! - `transfer`: the single-pass transfer validator with staged writes
//! - `operator`: owner-signed grant maintenance
//! - `query`: batched balance resolution
//! - `ledger`: the serialized facade tying the engines together
//!
//! ## Design Principles
//!
//! - **All-or-nothing batches**: a batch either commits every write or
//!   leaves the ledger exactly as it found it
//! - **Closed error taxonomy**: every rejection maps onto one of the four
//!   [`ErrorKind`] values, whose display names are stable API
//! - **One lock**: all entrypoints serialize on a single mutex; there is
//!   no partial visibility between batches
//!
//! ## Example
//!
//! ```rust
//! use fa2_config::LedgerConfig;
//! use fa2_ledger::{BalanceRequest, TokenLedger, Transfer};
//! use fa2_primitives::{Address, TokenId};
//!
//! let alice = Address::parse("0x00000000000000000000000000000000000000aa").unwrap();
//! let bob = Address::parse("0x00000000000000000000000000000000000000bb").unwrap();
//!
//! let ledger = TokenLedger::from_config(&LedgerConfig::single_asset(alice)).unwrap();
//! ledger
//!     .transfer(alice, &[Transfer::single(alice, bob, TokenId::new(0), 66)])
//!     .unwrap();
//!
//! let responses = ledger
//!     .balance_of(&[BalanceRequest::new(bob, TokenId::new(0))])
//!     .unwrap();
//! assert_eq!(responses[0].balance, 66);
//! ```

pub mod batch;
pub mod error;
pub mod ledger;
pub mod operator;
pub mod query;
pub mod transfer;

// Re-exports
pub use batch::{
    BalanceRequest, BalanceResponse, OperatorParam, OperatorUpdate, Transfer, TransferLeg,
};
pub use error::{ErrorKind, LedgerError, LedgerResult};
pub use ledger::TokenLedger;
