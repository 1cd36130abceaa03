//! Transaction display formatting
//!
//! Renders filtered transactions as a terminal table. The human-readable
//! date format is applied here, never inside the core representation.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::TransactionRecord;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format transactions as a table
pub fn format_transaction_table(
    transactions: &[TransactionRecord],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            date: match txn.date {
                Some(d) => d.format(date_format).to_string(),
                None => format!("({})", txn.date_raw),
            },
            description: truncate(&txn.description, 40),
            amount: txn.amount.format_with_symbol(currency_symbol),
            balance: txn.balance.format_with_symbol(currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Truncate a string, appending an ellipsis when it was cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], "€", "%d.%m.%Y"),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_table_contains_formatted_values() {
        let txn = TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
            date_raw: "2024-01-15".into(),
            description: "Miete".into(),
            amount: Money::from_cents(-85_000),
            balance: Money::from_cents(15_000),
        };
        let table = format_transaction_table(&[txn], "€", "%d.%m.%Y");

        assert!(table.contains("15.01.2024"));
        assert!(table.contains("Miete"));
        assert!(table.contains("-€850.00"));
        assert!(table.contains("€150.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very lo…");
    }
}
