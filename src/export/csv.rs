//! CSV export functionality
//!
//! Re-serializes filtered transactions to CSV. The human-readable date
//! format (day.month.year by default) is applied here, at export time only —
//! the core always operates on calendar-date values.

use std::io::Write;

use crate::error::{SaldoError, SaldoResult};
use crate::models::TransactionRecord;

/// Export filtered transactions to CSV
///
/// `date_format` is a strftime pattern applied to valid dates; rows without
/// a valid date fall back to their original date text.
pub fn export_transactions_csv<W: Write>(
    transactions: &[TransactionRecord],
    writer: &mut W,
    date_format: &str,
) -> SaldoResult<()> {
    writeln!(writer, "Date,Description,Amount,Balance")
        .map_err(|e| SaldoError::Export(e.to_string()))?;

    for txn in transactions {
        let date = match txn.date {
            Some(d) => d.format(date_format).to_string(),
            None => txn.date_raw.clone(),
        };

        writeln!(
            writer,
            "{},{},{:.2},{:.2}",
            escape_csv(&date),
            escape_csv(&txn.description),
            txn.amount.cents() as f64 / 100.0,
            txn.balance.cents() as f64 / 100.0
        )
        .map_err(|e| SaldoError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field (quote if it contains comma, quote, or newline)
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(date: Option<NaiveDate>, desc: &str, amount: i64, balance: i64) -> TransactionRecord {
        TransactionRecord {
            date,
            date_raw: date.map(|d| d.to_string()).unwrap_or_else(|| "??".into()),
            description: desc.into(),
            amount: Money::from_cents(amount),
            balance: Money::from_cents(balance),
        }
    }

    #[test]
    fn test_export_uses_display_date_format() {
        let transactions = vec![txn(
            NaiveDate::from_ymd_opt(2024, 1, 15),
            "Miete",
            -85_000,
            15_000,
        )];

        let mut out = Vec::new();
        export_transactions_csv(&transactions, &mut out, "%d.%m.%Y").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Date,Description,Amount,Balance\n15.01.2024,Miete,-850.00,150.00\n"
        );
    }

    #[test]
    fn test_export_escapes_descriptions() {
        let transactions = vec![txn(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            "Amazon, Order \"42\"",
            -100,
            900,
        )];

        let mut out = Vec::new();
        export_transactions_csv(&transactions, &mut out, "%d.%m.%Y").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"Amazon, Order \"\"42\"\"\""));
    }

    #[test]
    fn test_undated_rows_export_raw_date_text() {
        let transactions = vec![txn(None, "Mystery", 100, 100)];

        let mut out = Vec::new();
        export_transactions_csv(&transactions, &mut out, "%d.%m.%Y").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("??,Mystery"));
    }
}
