//! Transaction List View Model

use crate::api::dto::Transaction;
use crate::viewmodel::currency::format_inr;

/// One rendered transaction row. Transactions are debits, so the
/// component always styles the amount as negative.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub merchant: String,
    pub category: String,
    pub amount: String,
    /// Short date label (`Jul 21`) when the wire carried a date
    pub date: Option<String>,
}

impl TransactionRow {
    pub fn rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
        transactions.iter().map(Self::from_transaction).collect()
    }

    fn from_transaction(tx: &Transaction) -> Self {
        Self {
            merchant: tx.merchant.clone(),
            category: tx.category.clone(),
            amount: format_inr(tx.amount),
            date: tx.transaction_date.as_deref().and_then(short_date),
        }
    }
}

/// `2025-07-21` becomes `Jul 21`; unparseable dates are dropped.
fn short_date(raw: &str) -> Option<String> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%b %d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(merchant: &str, category: &str, amount: f64, date: Option<&str>) -> Transaction {
        Transaction {
            merchant: merchant.to_string(),
            category: category.to_string(),
            amount,
            transaction_date: date.map(str::to_string),
        }
    }

    #[test]
    fn rows_carry_merchant_category_and_amount() {
        let rows = TransactionRow::rows(&[tx(
            "Swiggy",
            "Food & Dining",
            150.0,
            Some("2025-07-21"),
        )]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].merchant, "Swiggy");
        assert_eq!(rows[0].category, "Food & Dining");
        assert_eq!(rows[0].amount, "₹150");
        assert_eq!(rows[0].date.as_deref(), Some("Jul 21"));
    }

    #[test]
    fn empty_input_yields_empty_rows() {
        assert!(TransactionRow::rows(&[]).is_empty());
    }

    #[test]
    fn missing_or_garbled_dates_are_dropped() {
        let rows = TransactionRow::rows(&[
            tx("Uber", "Transport", 240.0, None),
            tx("Zomato", "Food & Dining", 320.0, Some("yesterday")),
        ]);

        assert!(rows[0].date.is_none());
        assert!(rows[1].date.is_none());
    }

    #[test]
    fn short_date_formats_iso_input() {
        assert_eq!(short_date("2025-12-05").as_deref(), Some("Dec 05"));
        assert_eq!(short_date(""), None);
    }
}
