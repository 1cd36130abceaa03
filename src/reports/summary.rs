//! Financial summary report
//!
//! Computes total income, total expenses, net balance, and per-day averages
//! over a filtered transaction set. Recomputed from scratch on every filter
//! invocation; an empty set yields a zero-valued summary, never an error.

use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, TransactionRecord};

/// Scalar financial summary over a filtered transaction set
///
/// Sign convention: `total_income >= 0` and `total_expenses <= 0` (expenses
/// are stored signed, as they appear in the ledger), so
/// `net_balance == total_income + total_expenses`. Per-day averages divide
/// by the number of distinct calendar dates, truncating toward zero on the
/// cent; both are zero when no dated rows are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialSummary {
    /// Period start
    pub start_date: NaiveDate,
    /// Period end
    pub end_date: NaiveDate,
    /// Sum of positive amounts
    pub total_income: Money,
    /// Sum of negative amounts (signed, <= 0)
    pub total_expenses: Money,
    /// total_income + total_expenses
    pub net_balance: Money,
    /// Number of distinct calendar dates in the set
    pub unique_days: usize,
    /// total_income / unique_days, 0 when unique_days is 0
    pub avg_income_per_day: Money,
    /// total_expenses / unique_days, 0 when unique_days is 0
    pub avg_expense_per_day: Money,
}

impl FinancialSummary {
    /// Generate a summary over the included transaction set
    pub fn generate(
        included: &[TransactionRecord],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut days: HashSet<NaiveDate> = HashSet::new();

        for txn in included {
            if txn.amount.is_positive() {
                total_income += txn.amount;
            } else {
                total_expenses += txn.amount;
            }
            if let Some(date) = txn.date {
                days.insert(date);
            }
        }

        let unique_days = days.len();

        Self {
            start_date,
            end_date,
            total_income,
            total_expenses,
            net_balance: total_income + total_expenses,
            unique_days,
            avg_income_per_day: total_income.div_or_zero(unique_days as i64),
            avg_expense_per_day: total_expenses.div_or_zero(unique_days as i64),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Summary: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Total Income:",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Total Expenses:",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Net Balance:",
            self.net_balance.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Avg. Income / Day:",
            self.avg_income_per_day.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Avg. Expense / Day:",
            self.avg_expense_per_day.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("{:<22} {:>14}\n", "Days Covered:", self.unique_days));

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SaldoResult<()> {
        writeln!(
            writer,
            "Start Date,End Date,Total Income,Total Expenses,Net Balance,Avg Income/Day,Avg Expense/Day,Unique Days"
        )
        .map_err(|e| SaldoError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            self.start_date,
            self.end_date,
            self.total_income.cents() as f64 / 100.0,
            self.total_expenses.cents() as f64 / 100.0,
            self.net_balance.cents() as f64 / 100.0,
            self.avg_income_per_day.cents() as f64 / 100.0,
            self.avg_expense_per_day.cents() as f64 / 100.0,
            self.unique_days
        )
        .map_err(|e| SaldoError::Export(e.to_string()))?;

        Ok(())
    }
}
