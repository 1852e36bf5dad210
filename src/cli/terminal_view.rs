use dialoguer::theme::ColorfulTheme;
use tracing::info;

use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::shell_context::CliMode;
use crate::cli::table::Table;
use crate::core::{TableRow, TableSnapshot, TransactionView};
use crate::errors::ViewError;
use crate::ledger::Transaction;

/// Renders the ledger as a text table on stdout.
pub struct TerminalView {
    mode: CliMode,
    theme: ColorfulTheme,
    snapshot: TableSnapshot,
    highlighted: Vec<usize>,
    selected: Vec<usize>,
}

impl TerminalView {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
            snapshot: TableSnapshot::default(),
            highlighted: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &TableSnapshot {
        &self.snapshot
    }

    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn render(&self) -> String {
        Table::from_snapshot(&self.snapshot, &self.highlighted).render()
    }

    fn draw(&self) {
        println!("{}", self.render());
    }
}

impl TransactionView for TerminalView {
    fn refresh_table(&mut self, snapshot: &TableSnapshot) {
        self.snapshot = snapshot.clone();
        self.highlighted.clear();
        self.draw();
    }

    fn append_row(&mut self, row: &TableRow) {
        output::success(format!(
            "Added #{}: {:.2} {} ({})",
            row.serial, row.amount, row.category, row.timestamp
        ));
    }

    fn highlight_rows(&mut self, rows: &[usize]) {
        self.highlighted = rows.to_vec();
        if rows.is_empty() {
            output::info("No rows match the filter.");
        } else {
            output::info(format!("{} row(s) match the filter.", rows.len()));
        }
        self.draw();
    }

    fn select_rows(&mut self, rows: Vec<usize>) {
        self.selected = rows;
    }

    fn selected_rows(&self) -> Vec<usize> {
        self.selected.clone()
    }

    fn confirm_removal(&mut self, transaction: &Transaction) -> Result<bool, ViewError> {
        if self.mode == CliMode::Script {
            info!(id = %transaction.id(), "script mode confirms removal");
            return Ok(true);
        }
        let prompt = format!(
            "Remove {:.2} {} ({})?",
            transaction.amount(),
            transaction.category(),
            transaction.timestamp()
        );
        cli_io::confirm_action(&self.theme, &prompt, false)
    }

    fn show_notice(&mut self, message: &str) {
        cli_io::print_warning(message);
    }
}
