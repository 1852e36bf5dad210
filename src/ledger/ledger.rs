use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transaction::{Transaction, TransactionId};
use crate::errors::LedgerError;

/// How [`Ledger::undo`] treats the entry it pops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UndoMode {
    /// Reverse the recorded operation: drop an addition, restore a removal.
    #[default]
    Reverse,
    /// Always remove the popped transaction. Undoing a removal leaves it removed.
    RemoveOnly,
}

impl fmt::Display for UndoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UndoMode::Reverse => "reverse",
            UndoMode::RemoveOnly => "remove-only",
        };
        f.write_str(label)
    }
}

impl FromStr for UndoMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reverse" => Ok(UndoMode::Reverse),
            "remove-only" | "remove_only" | "legacy" => Ok(UndoMode::RemoveOnly),
            other => Err(format!("unknown undo mode `{other}`")),
        }
    }
}

/// One mutating operation recorded in the undo history.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoEntry {
    Added(Transaction),
    /// `position` is `None` when the transaction was not in the ledger.
    Removed {
        position: Option<usize>,
        transaction: Transaction,
    },
}

impl UndoEntry {
    pub fn transaction(&self) -> &Transaction {
        match self {
            UndoEntry::Added(transaction) => transaction,
            UndoEntry::Removed { transaction, .. } => transaction,
        }
    }
}

/// In-memory transaction list with a last-in-first-out undo history.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    history: Vec<UndoEntry>,
    undo_mode: UndoMode,
}

impl Ledger {
    pub fn new(undo_mode: UndoMode) -> Self {
        Self {
            transactions: Vec::new(),
            history: Vec::new(),
            undo_mode,
        }
    }

    /// Appends `transaction` and records the addition.
    ///
    /// Rejects transactions the ledger must never hold: a duplicate id or an
    /// amount that is not a positive finite number.
    pub fn add_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<TransactionId, LedgerError> {
        let id = transaction.id();
        if self.position_of(id).is_some() {
            return Err(LedgerError::InvalidArgument(format!(
                "transaction {id} is already in the ledger"
            )));
        }
        if !transaction.amount().is_finite() || transaction.amount() <= 0.0 {
            return Err(LedgerError::InvalidArgument(format!(
                "transaction amount must be positive, got {}",
                transaction.amount()
            )));
        }
        debug!(
            %id,
            amount = transaction.amount(),
            category = transaction.category(),
            "transaction added"
        );
        self.transactions.push(transaction.clone());
        self.history.push(UndoEntry::Added(transaction));
        Ok(id)
    }

    /// Removes `transaction` if present. The removal is recorded either way.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        let position = self.take(transaction.id()).map(|(index, _)| index);
        debug!(id = %transaction.id(), ?position, "transaction removal recorded");
        self.history.push(UndoEntry::Removed {
            position,
            transaction: transaction.clone(),
        });
        position.is_some()
    }

    /// Owned copy of the current sequence in display order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Pops and reverses the most recent history entry, returning it.
    pub fn undo(&mut self) -> Option<UndoEntry> {
        let entry = self.history.pop()?;
        match (&entry, self.undo_mode) {
            (UndoEntry::Added(transaction), _)
            | (UndoEntry::Removed { transaction, .. }, UndoMode::RemoveOnly) => {
                self.take(transaction.id());
            }
            (
                UndoEntry::Removed {
                    position: Some(position),
                    transaction,
                },
                UndoMode::Reverse,
            ) => {
                if self.position_of(transaction.id()).is_none() {
                    let index = (*position).min(self.transactions.len());
                    self.transactions.insert(index, transaction.clone());
                }
            }
            (UndoEntry::Removed { position: None, .. }, UndoMode::Reverse) => {}
        }
        debug!(mode = %self.undo_mode, remaining = self.history.len(), "undo applied");
        Some(entry)
    }

    pub fn is_undo_stack_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn undo_mode(&self) -> UndoMode {
        self.undo_mode
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Transaction> {
        self.transactions.get(index).cloned()
    }

    pub fn position_of(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id() == id)
    }

    /// Sum of all amounts, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    fn take(&mut self, id: TransactionId) -> Option<(usize, Transaction)> {
        let index = self.position_of(id)?;
        Some((index, self.transactions.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(amounts: &[(f64, &str)]) -> (Ledger, Vec<Transaction>) {
        let mut ledger = Ledger::default();
        let mut added = Vec::new();
        for (amount, category) in amounts {
            let txn = Transaction::new(*amount, *category);
            ledger.add_transaction(txn.clone()).unwrap();
            added.push(txn);
        }
        (ledger, added)
    }

    #[test]
    fn add_appends_and_records_history() {
        let (ledger, added) = ledger_with(&[(50.0, "food"), (20.0, "transport")]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions(), added);
        assert_eq!(ledger.undo_depth(), 2);
        assert!(!ledger.is_undo_stack_empty());
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let (mut ledger, added) = ledger_with(&[(50.0, "food")]);
        let err = ledger
            .add_transaction(added[0].clone())
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err, LedgerError::InvalidArgument(ref msg) if msg.contains("already")));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.undo_depth(), 1);
    }

    #[test]
    fn add_rejects_non_positive_amounts() {
        let mut ledger = Ledger::default();
        assert!(ledger.add_transaction(Transaction::new(0.0, "food")).is_err());
        assert!(ledger.add_transaction(Transaction::new(-4.0, "food")).is_err());
        assert!(ledger.add_transaction(Transaction::new(f64::NAN, "food")).is_err());
        assert!(ledger.is_empty());
        assert!(ledger.is_undo_stack_empty());
    }

    #[test]
    fn snapshot_is_isolated_from_ledger() {
        let (ledger, _) = ledger_with(&[(50.0, "food")]);
        let mut snapshot = ledger.transactions();
        snapshot.clear();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_absent_transaction_still_records_history() {
        let (mut ledger, _) = ledger_with(&[(50.0, "food")]);
        let stranger = Transaction::new(5.0, "other");
        assert!(!ledger.remove_transaction(&stranger));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.undo_depth(), 2);
    }

    #[test]
    fn remove_targets_exact_entry_among_lookalikes() {
        let (mut ledger, added) = ledger_with(&[(10.0, "food"), (10.0, "food")]);
        assert!(ledger.remove_transaction(&added[1]));
        assert_eq!(ledger.transactions(), vec![added[0].clone()]);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut ledger = Ledger::default();
        assert!(ledger.undo().is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn undo_after_add_drops_that_transaction() {
        let (mut ledger, added) = ledger_with(&[(50.0, "food"), (20.0, "transport")]);
        let entry = ledger.undo().expect("history entry");
        assert_eq!(entry, UndoEntry::Added(added[1].clone()));
        assert_eq!(ledger.transactions(), vec![added[0].clone()]);
    }

    #[test]
    fn reverse_mode_restores_removed_transaction_in_place() {
        let (mut ledger, added) =
            ledger_with(&[(1.0, "food"), (2.0, "bills"), (3.0, "travel")]);
        ledger.remove_transaction(&added[1]);
        assert_eq!(ledger.len(), 2);

        ledger.undo();
        assert_eq!(ledger.transactions(), added);
    }

    #[test]
    fn reverse_mode_ignores_undo_of_absent_removal() {
        let (mut ledger, added) = ledger_with(&[(1.0, "food")]);
        ledger.remove_transaction(&Transaction::new(9.0, "other"));
        ledger.undo();
        assert_eq!(ledger.transactions(), added);
    }

    #[test]
    fn remove_only_mode_keeps_removed_transaction_gone() {
        let mut ledger = Ledger::new(UndoMode::RemoveOnly);
        let first = Transaction::new(1.0, "food");
        let second = Transaction::new(2.0, "bills");
        ledger.add_transaction(first.clone()).unwrap();
        ledger.add_transaction(second.clone()).unwrap();
        ledger.remove_transaction(&first);

        ledger.undo();
        assert_eq!(ledger.transactions(), vec![second.clone()]);

        // The addition of `second` is next; the addition of `first` is idempotent.
        ledger.undo();
        ledger.undo();
        assert!(ledger.is_empty());
        assert!(ledger.is_undo_stack_empty());
    }

    #[test]
    fn total_tracks_current_contents() {
        let (mut ledger, added) = ledger_with(&[(50.0, "food"), (20.5, "transport")]);
        assert!((ledger.total() - 70.5).abs() < f64::EPSILON);
        ledger.remove_transaction(&added[0]);
        assert!((ledger.total() - 20.5).abs() < f64::EPSILON);
    }

    #[test]
    fn undo_mode_parses_aliases() {
        assert_eq!("reverse".parse::<UndoMode>(), Ok(UndoMode::Reverse));
        assert_eq!("Remove-Only".parse::<UndoMode>(), Ok(UndoMode::RemoveOnly));
        assert_eq!("legacy".parse::<UndoMode>(), Ok(UndoMode::RemoveOnly));
        assert!("sideways".parse::<UndoMode>().is_err());
    }
}
