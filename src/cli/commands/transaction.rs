use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::validation::parse_amount_input;
use crate::ledger::UndoEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a new expense",
            "add <amount> <category>",
            cmd_add,
        ),
        CommandEntry::new("list", "Show all transactions", "list", cmd_list),
        CommandEntry::new(
            "undo",
            "Undo the most recent addition or removal",
            "undo",
            cmd_undo,
        ),
        CommandEntry::new(
            "remove",
            "Remove rows after confirming each one",
            "remove <row> [row...]",
            cmd_remove,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, category] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> <category>".into(),
        ));
    };
    context
        .controller
        .try_add_transaction(parse_amount_input(amount), category.trim())?;
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller.refresh();
    Ok(())
}

fn cmd_undo(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.controller.on_undo_requested() {
        Some(UndoEntry::Added(txn)) => io::print_info(format!(
            "Undid addition of {:.2} {}.",
            txn.amount(),
            txn.category()
        )),
        Some(UndoEntry::Removed { transaction, .. }) => io::print_info(format!(
            "Undid removal of {:.2} {} ({} mode).",
            transaction.amount(),
            transaction.category(),
            context.controller.ledger().undo_mode()
        )),
        None => io::print_info("Nothing to undo."),
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: remove <row> [row...]".into(),
        ));
    }
    let rows = parse_rows(args)?;
    let removed = context.controller.on_rows_selected_for_removal(rows)?;
    io::print_success(format!("Removed {removed} transaction(s)."));
    Ok(())
}

/// Converts 1-based row numbers, as displayed, into ledger indices.
fn parse_rows(args: &[&str]) -> Result<Vec<usize>, CommandError> {
    args.iter()
        .map(|raw| match raw.parse::<usize>() {
            Ok(row) if row > 0 => Ok(row - 1),
            _ => Err(CommandError::InvalidArguments(format!(
                "`{raw}` is not a row number (rows start at 1)"
            ))),
        })
        .collect()
}
