//! Reports module for saldo-cli
//!
//! Aggregations derived from a filtered transaction set: scalar financial
//! summaries, monthly income/expense buckets, and the per-transaction
//! balance series handed to charting collaborators.

pub mod monthly;
pub mod series;
pub mod summary;

pub use monthly::{MonthlyBucket, MonthlySummary};
pub use series::{BalanceSeries, SeriesPoint};
pub use summary::FinancialSummary;
