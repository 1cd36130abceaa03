//! Monthly income/expense buckets
//!
//! Groups a filtered transaction set by calendar month, producing one bucket
//! per month present in the set. Buckets feed the monthly bar chart, so
//! expenses are reported as a positive magnitude.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, TransactionRecord};

/// Income and expense sums for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// First day of the month
    pub month: NaiveDate,
    /// Sum of positive amounts in the month
    pub income: Money,
    /// Sum of negative amounts in the month, negated to a positive magnitude
    pub expenses: Money,
}

/// Monthly income/expense table over a filtered transaction set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    /// One bucket per month, in chronological order
    pub buckets: Vec<MonthlyBucket>,
}

impl MonthlySummary {
    /// Generate monthly buckets from the included transaction set
    ///
    /// Rows without a valid date are skipped; the filter stage quarantines
    /// them before this runs, so skipping here only matters for callers
    /// aggregating unfiltered data.
    pub fn generate(included: &[TransactionRecord]) -> Self {
        let mut by_month: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

        for txn in included {
            let Some(date) = txn.date else { continue };
            let entry = by_month
                .entry((date.year(), date.month()))
                .or_insert((Money::zero(), Money::zero()));
            if txn.amount.is_positive() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        let buckets = by_month
            .into_iter()
            .map(|((year, month), (income, expenses))| MonthlyBucket {
                // (year, month) came from a valid NaiveDate, so day 1 exists
                month: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default(),
                income,
                expenses: -expenses,
            })
            .collect();

        Self { buckets }
    }

    /// Check if no bucket was produced
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Format the monthly table for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.buckets.is_empty() {
            return "No transactions in the selected period.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            "Month", "Income", "Expenses"
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14}\n",
                bucket.month.format("%Y-%m"),
                bucket.income.format_with_symbol(currency_symbol),
                bucket.expenses.format_with_symbol(currency_symbol)
            ));
        }

        output
    }

    /// Export the monthly table to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SaldoResult<()> {
        writeln!(writer, "Month,Income,Expenses")
            .map_err(|e| SaldoError::Export(e.to_string()))?;

        for bucket in &self.buckets {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                bucket.month.format("%Y-%m"),
                bucket.income.cents() as f64 / 100.0,
                bucket.expenses.cents() as f64 / 100.0
            )
            .map_err(|e| SaldoError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(d: NaiveDate, cents: i64) -> TransactionRecord {
        TransactionRecord {
            date: Some(d),
            date_raw: d.to_string(),
            description: "test".into(),
            amount: Money::from_cents(cents),
            balance: Money::zero(),
        }
    }

    #[test]
    fn test_two_months_produce_two_ordered_buckets() {
        // February rows listed first: ordering must still be Jan, Feb
        let included = vec![
            txn(date(2024, 2, 10), -2_000),
            txn(date(2024, 1, 1), 100_000),
            txn(date(2024, 2, 1), 50_000),
            txn(date(2024, 1, 15), -40_000),
        ];
        let summary = MonthlySummary::generate(&included);

        assert_eq!(summary.buckets.len(), 2);
        assert_eq!(summary.buckets[0].month, date(2024, 1, 1));
        assert_eq!(summary.buckets[0].income.cents(), 100_000);
        assert_eq!(summary.buckets[0].expenses.cents(), 40_000);
        assert_eq!(summary.buckets[1].month, date(2024, 2, 1));
        assert_eq!(summary.buckets[1].income.cents(), 50_000);
        assert_eq!(summary.buckets[1].expenses.cents(), 2_000);
    }

    #[test]
    fn test_expenses_reported_as_positive_magnitude() {
        let included = vec![txn(date(2024, 3, 5), -7_500)];
        let summary = MonthlySummary::generate(&included);

        assert_eq!(summary.buckets[0].expenses.cents(), 7_500);
        assert!(summary.buckets[0].income.is_zero());
    }

    #[test]
    fn test_year_boundary_orders_chronologically() {
        let included = vec![
            txn(date(2024, 1, 1), 100),
            txn(date(2023, 12, 31), 200),
        ];
        let summary = MonthlySummary::generate(&included);

        assert_eq!(summary.buckets[0].month, date(2023, 12, 1));
        assert_eq!(summary.buckets[1].month, date(2024, 1, 1));
    }

    #[test]
    fn test_empty_set_produces_no_buckets() {
        let summary = MonthlySummary::generate(&[]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_undated_rows_are_skipped() {
        let undated = TransactionRecord {
            date: None,
            date_raw: "??".into(),
            description: "Mystery".into(),
            amount: Money::from_cents(1_000),
            balance: Money::zero(),
        };
        let summary = MonthlySummary::generate(&[undated]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_export_csv() {
        let included = vec![
            txn(date(2024, 1, 1), 100_000),
            txn(date(2024, 1, 15), -40_000),
        ];
        let mut out = Vec::new();
        MonthlySummary::generate(&included).export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "Month,Income,Expenses\n2024-01,1000.00,400.00\n");
    }
}
