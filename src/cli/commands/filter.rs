use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::filter::FilterSelection;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "filter",
            "Set a filter and highlight matching rows",
            "filter <amount <value>|category <name>|clear>",
            cmd_filter,
        ),
        CommandEntry::new(
            "apply",
            "Highlight rows matching the current filter",
            "apply",
            cmd_apply,
        ),
    ]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            context.controller.apply_filter();
            Ok(())
        }
        [clear] if clear.eq_ignore_ascii_case("clear") => {
            context.controller.set_filter(None);
            context.controller.refresh();
            io::print_info("Filter cleared.");
            Ok(())
        }
        [kind, parameter @ ..] if !parameter.is_empty() => {
            let selection: FilterSelection =
                kind.parse().map_err(CommandError::InvalidArguments)?;
            context
                .controller
                .on_apply_filter_requested(selection, &parameter.join(" "));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: filter <amount <value>|category <name>|clear>".into(),
        )),
    }
}

fn cmd_apply(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller.apply_filter();
    Ok(())
}
