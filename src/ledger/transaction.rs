use chrono::{DateTime, Local};
use uuid::Uuid;

/// Display pattern for transaction timestamps (`dd-MM-yyyy HH:mm`).
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

pub type TransactionId = Uuid;

/// A single recorded expense.
///
/// Fields are private so a transaction cannot change after it is created; the
/// ledger identifies entries by `id`, never by comparing amounts or categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    amount: f64,
    category: String,
    created_at: DateTime<Local>,
}

impl Transaction {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Creation instant rendered with [`TIMESTAMP_FORMAT`].
    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn new_transactions_get_distinct_ids() {
        let first = Transaction::new(12.5, "food");
        let second = Transaction::new(12.5, "food");
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn timestamp_parses_back_with_fixed_pattern() {
        let txn = Transaction::new(3.0, "bills");
        let parsed = NaiveDateTime::parse_from_str(&txn.timestamp(), TIMESTAMP_FORMAT)
            .expect("timestamp should follow the fixed pattern");
        let created = txn.created_at().naive_local();
        assert_eq!(parsed.format("%d-%m-%Y %H:%M").to_string(), txn.timestamp());
        assert!((created - parsed).num_seconds() < 60);
    }
}
