//! # FA2 Primitives
//!
//! Fundamental types shared by every crate of the FA2 ledger engine:
//! - `Address`: 20-byte account identifier with hex parse/display
//! - `TokenId` / `Amount`: token handles and non-negative quantities
//! - `LedgerVariant`: the single / multi / non-fungible ledger shape,
//!   with its per-variant rule table
//!
//! ## Design Principles
//!
//! - **Zero dependencies on other fa2-* crates**: this is the foundation
//!   layer everything else builds on
//! - **Equality-first addresses**: the ledger never interprets an address,
//!   it only compares one against another
//!
//! ## Example
//!
//! ```rust
//! use fa2_primitives::{Address, LedgerVariant, TokenId};
//!
//! let owner = Address::parse("0x00000000000000000000000000000000000000aa").unwrap();
//! assert!(!owner.is_zero());
//!
//! let token = TokenId::new(0);
//! assert_eq!(token.to_string(), "0");
//!
//! let rules = LedgerVariant::NonFungible.rules();
//! assert!(!rules.allows_leg_amount(2));
//! ```

pub mod address;
pub mod error;
pub mod token;
pub mod variant;

// Re-exports
pub use address::{Address, ADDRESS_SIZE};
pub use error::{PrimitiveError, PrimitiveResult};
pub use token::{Amount, TokenId};
pub use variant::{LedgerVariant, VariantRules};
