//! Orchestrates validation, ledger mutation, filtering, and view updates.

use tracing::{info, warn};

use crate::core::validation::{parse_amount_input, validate_amount, validate_category};
use crate::core::view::{TableRow, TableSnapshot, TransactionView};
use crate::errors::ControllerError;
use crate::filter::{FilterSelection, TransactionFilter};
use crate::ledger::{CategoryPolicy, Ledger, Transaction, TransactionId, UndoEntry};

pub const NO_FILTER_NOTICE: &str = "No filter applied";

pub struct ExpenseController<V: TransactionView> {
    ledger: Ledger,
    view: V,
    policy: CategoryPolicy,
    filter: Option<Box<dyn TransactionFilter>>,
}

impl<V: TransactionView> ExpenseController<V> {
    pub fn new(ledger: Ledger, view: V, policy: CategoryPolicy) -> Self {
        Self {
            ledger,
            view,
            policy,
            filter: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn policy(&self) -> &CategoryPolicy {
        &self.policy
    }

    pub fn filter(&self) -> Option<&dyn TransactionFilter> {
        self.filter.as_deref()
    }

    /// Validates and records a new transaction. Returns `false` when the input
    /// is rejected; the ledger is untouched in that case.
    pub fn add_transaction(&mut self, amount: f64, category: &str) -> bool {
        self.try_add_transaction(amount, category).is_ok()
    }

    pub fn try_add_transaction(
        &mut self,
        amount: f64,
        category: &str,
    ) -> Result<TransactionId, ControllerError> {
        let checked = validate_amount(amount)
            .and_then(|_| validate_category(&self.policy, category));
        if let Err(err) = checked {
            warn!(amount, category, %err, "transaction rejected");
            return Err(err.into());
        }

        let transaction = Transaction::new(amount, category);
        let row = TableRow::from_transaction(self.ledger.len() + 1, &transaction);
        let id = self.ledger.add_transaction(transaction)?;
        self.view.append_row(&row);
        self.refresh();
        info!(%id, amount, category, "transaction recorded");
        Ok(id)
    }

    /// Reverts the most recent ledger operation and redraws the table.
    pub fn undo_transaction(&mut self) -> Option<UndoEntry> {
        let undone = self.ledger.undo();
        match &undone {
            Some(entry) => info!(id = %entry.transaction().id(), "undo applied"),
            None => info!("undo requested with empty history"),
        }
        self.refresh();
        undone
    }

    pub fn set_filter(&mut self, filter: Option<Box<dyn TransactionFilter>>) {
        info!(filter = ?filter, "filter changed");
        self.filter = filter;
    }

    /// Highlights the rows matched by the active filter and returns their
    /// indices. Without a filter the view gets a notice and nothing is marked.
    pub fn apply_filter(&mut self) -> Vec<usize> {
        let Some(filter) = self.filter.as_ref() else {
            self.view.show_notice(NO_FILTER_NOTICE);
            return Vec::new();
        };

        let transactions = self.ledger.transactions();
        let rows: Vec<usize> = filter
            .filter(&transactions)
            .iter()
            .filter_map(|matched| {
                transactions
                    .iter()
                    .position(|txn| txn.id() == matched.id())
            })
            .collect();
        info!(matches = rows.len(), "filter applied");
        self.view.highlight_rows(&rows);
        rows
    }

    /// Removes the view's selected rows, each after its own confirmation, and
    /// returns how many were removed.
    ///
    /// Selected indices are resolved against a single snapshot before any
    /// removal, so a removal never shifts which transaction a later index names.
    pub fn handle_selected_rows(&mut self) -> Result<usize, ControllerError> {
        let selected = self.view.selected_rows();
        if selected.is_empty() {
            return Ok(0);
        }

        let snapshot = self.ledger.transactions();
        let mut targets: Vec<Transaction> = Vec::with_capacity(selected.len());
        for index in selected {
            match snapshot.get(index) {
                Some(txn) if !targets.iter().any(|t| t.id() == txn.id()) => {
                    targets.push(txn.clone())
                }
                Some(_) => {}
                None => warn!(index, rows = snapshot.len(), "selected row out of range"),
            }
        }

        let mut removed = 0;
        let mut prompt_failure = None;
        for transaction in &targets {
            match self.view.confirm_removal(transaction) {
                Ok(true) => {
                    self.ledger.remove_transaction(transaction);
                    removed += 1;
                }
                Ok(false) => {}
                Err(err) => {
                    prompt_failure = Some(err);
                    break;
                }
            }
        }
        // Redraw even when a prompt failed part-way; earlier removals stand.
        self.view.select_rows(Vec::new());
        self.refresh();
        if let Some(err) = prompt_failure {
            return Err(err.into());
        }
        info!(removed, considered = targets.len(), "selected rows handled");
        Ok(removed)
    }

    /// Pushes the full current ledger to the view.
    pub fn refresh(&mut self) {
        let snapshot = TableSnapshot::from_transactions(&self.ledger.transactions());
        self.view.refresh_table(&snapshot);
    }

    pub fn on_add_transaction_requested(&mut self, amount: &str, category: &str) -> bool {
        self.add_transaction(parse_amount_input(amount), category.trim())
    }

    pub fn on_apply_filter_requested(
        &mut self,
        selection: FilterSelection,
        parameter: &str,
    ) -> Vec<usize> {
        self.set_filter(Some(selection.build(parameter)));
        self.apply_filter()
    }

    pub fn on_undo_requested(&mut self) -> Option<UndoEntry> {
        self.undo_transaction()
    }

    pub fn on_rows_selected_for_removal(
        &mut self,
        rows: Vec<usize>,
    ) -> Result<usize, ControllerError> {
        self.view.select_rows(rows);
        self.handle_selected_rows()
    }
}
