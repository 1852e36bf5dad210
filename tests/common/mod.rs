#![allow(dead_code)]

use std::collections::VecDeque;

use expense_tracker::{
    core::{ExpenseController, TableRow, TableSnapshot, TransactionView},
    errors::ViewError,
    ledger::{CategoryPolicy, Ledger, Transaction, UndoMode},
};

/// A view that records every call so tests can assert on what the controller
/// asked it to display.
#[derive(Default)]
pub struct RecordingView {
    pub refreshes: Vec<TableSnapshot>,
    pub appended: Vec<TableRow>,
    pub highlights: Vec<Vec<usize>>,
    pub notices: Vec<String>,
    pub prompts: Vec<Transaction>,
    /// Scripted answers for `confirm_removal`; an empty queue answers "no".
    pub answers: VecDeque<Result<bool, String>>,
    selected: Vec<usize>,
}

impl RecordingView {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().map(|answer| Ok(*answer)).collect(),
            ..Self::default()
        }
    }

    pub fn last_refresh(&self) -> &TableSnapshot {
        self.refreshes.last().expect("view was never refreshed")
    }
}

impl TransactionView for RecordingView {
    fn refresh_table(&mut self, snapshot: &TableSnapshot) {
        self.refreshes.push(snapshot.clone());
    }

    fn append_row(&mut self, row: &TableRow) {
        self.appended.push(row.clone());
    }

    fn highlight_rows(&mut self, rows: &[usize]) {
        self.highlights.push(rows.to_vec());
    }

    fn select_rows(&mut self, rows: Vec<usize>) {
        self.selected = rows;
    }

    fn selected_rows(&self) -> Vec<usize> {
        self.selected.clone()
    }

    fn confirm_removal(&mut self, transaction: &Transaction) -> Result<bool, ViewError> {
        self.prompts.push(transaction.clone());
        match self.answers.pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(ViewError::Prompt(message)),
            None => Ok(false),
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub fn controller() -> ExpenseController<RecordingView> {
    controller_with(RecordingView::default(), UndoMode::Reverse)
}

pub fn controller_with(view: RecordingView, mode: UndoMode) -> ExpenseController<RecordingView> {
    ExpenseController::new(Ledger::new(mode), view, CategoryPolicy::default())
}

pub fn total_cost(controller: &ExpenseController<RecordingView>) -> f64 {
    controller
        .ledger()
        .transactions()
        .iter()
        .map(Transaction::amount)
        .sum()
}
