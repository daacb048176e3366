//! # FA2 State
//!
//! Ledger state for the FA2 engine: the three stores and their composite.
//!
//! - `TokenRegistry`: which token ids exist and their fixed total supply
//! - `BalanceStore`: (owner, token) → quantity; zero entries persist
//! - `OperatorStore`: live delegation grants, idempotent add/remove
//! - `BalanceDelta`: read-through overlay of one batch's pending writes
//! - `LedgerState`: the validated composite, with builder, invariant
//!   checks, and an idempotent `reset`
//!
//! The stores hold data and enforce structural invariants; the decision
//! logic (authorization, sufficiency, error kinds) lives in `fa2-ledger`.

pub mod balance;
pub mod delta;
pub mod error;
pub mod keys;
pub mod operator;
pub mod registry;
pub mod state;

// Re-exports
pub use balance::BalanceStore;
pub use delta::BalanceDelta;
pub use error::{StateError, StateResult};
pub use keys::{BalanceKey, OperatorKey};
pub use operator::OperatorStore;
pub use registry::{TokenInfo, TokenRegistry};
pub use state::{LedgerState, LedgerStateBuilder};
