//! Terminal display formatting for saldo-cli
//!
//! Table rendering for transactions and snapshots. Summary blocks are
//! formatted by the report types themselves.

pub mod snapshot;
pub mod transaction;

pub use snapshot::format_snapshot_table;
pub use transaction::format_transaction_table;
