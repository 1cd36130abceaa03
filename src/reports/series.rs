//! Per-transaction chart series
//!
//! Supplies the raw numeric series behind the income/expense bar and balance
//! line chart: one point per transaction with the signed amount split into
//! income and expense magnitudes. Axis labels, colors, and chart type are a
//! renderer's concern; this module only shapes the data.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, TransactionRecord};

/// One chart point: a transaction's date, its amount split by sign, and the
/// running balance after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    /// Transaction date
    pub date: NaiveDate,
    /// Amount if positive, else zero
    pub income: Money,
    /// Magnitude of the amount if negative, else zero
    pub expense: Money,
    /// Running balance after this transaction
    pub balance: Money,
}

/// The per-transaction series for charting collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSeries {
    /// Points in ledger (chronological) order
    pub points: Vec<SeriesPoint>,
}

impl BalanceSeries {
    /// Build the series from the included transaction set
    ///
    /// Rows without a valid date have no position on a time axis and are
    /// skipped; the filter stage quarantines them before this runs.
    pub fn generate(included: &[TransactionRecord]) -> Self {
        let points = included
            .iter()
            .filter_map(|txn| {
                let date = txn.date?;
                let (income, expense) = if txn.amount.is_positive() {
                    (txn.amount, Money::zero())
                } else {
                    (Money::zero(), txn.amount.abs())
                };
                Some(SeriesPoint {
                    date,
                    income,
                    expense,
                    balance: txn.balance,
                })
            })
            .collect();

        Self { points }
    }

    /// Check if the series holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Export the series to CSV format for external charting tools
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SaldoResult<()> {
        writeln!(writer, "Date,Income,Expense,Balance")
            .map_err(|e| SaldoError::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                point.date,
                point.income.cents() as f64 / 100.0,
                point.expense.cents() as f64 / 100.0,
                point.balance.cents() as f64 / 100.0,
            )
            .map_err(|e| SaldoError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
