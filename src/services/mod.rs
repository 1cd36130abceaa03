//! Business logic for saldo-cli
//!
//! The pure core of the crate: balance reconstruction over raw rows and
//! filtering of reconciled ledgers. Every function here takes immutable
//! input and returns a new derived value.

pub mod filter;
pub mod reconcile;

pub use filter::{filter, parse_keywords};
pub use reconcile::reconstruct;
