//! The boundary between the controller and whatever renders the ledger.

use crate::errors::ViewError;
use crate::ledger::Transaction;

/// One display-ready table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position as shown to the user.
    pub serial: usize,
    pub amount: f64,
    pub category: String,
    pub timestamp: String,
}

impl TableRow {
    pub fn from_transaction(serial: usize, transaction: &Transaction) -> Self {
        Self {
            serial,
            amount: transaction.amount(),
            category: transaction.category().to_string(),
            timestamp: transaction.timestamp(),
        }
    }
}

/// Everything a view needs to redraw the table, total included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSnapshot {
    pub rows: Vec<TableRow>,
    pub total: f64,
}

impl TableSnapshot {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let rows = transactions
            .iter()
            .enumerate()
            .map(|(idx, txn)| TableRow::from_transaction(idx + 1, txn))
            .collect();
        let total = transactions.iter().map(Transaction::amount).sum();
        Self { rows, total }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A display surface driven by the controller.
///
/// Row indices passed across this boundary are 0-based positions in the
/// ledger's current sequence.
pub trait TransactionView {
    /// Redraws every row plus the total, dropping any highlight.
    fn refresh_table(&mut self, snapshot: &TableSnapshot);

    /// Shows a freshly added row ahead of the full refresh.
    fn append_row(&mut self, row: &TableRow);

    /// Marks exactly `rows` and clears the mark on every other row.
    fn highlight_rows(&mut self, rows: &[usize]);

    fn select_rows(&mut self, rows: Vec<usize>);

    fn selected_rows(&self) -> Vec<usize>;

    /// Asks the user whether `transaction` should be removed.
    fn confirm_removal(&mut self, transaction: &Transaction) -> Result<bool, ViewError>;

    fn show_notice(&mut self, message: &str);
}
