use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::UndoMode;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "List the allowed categories",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "config",
            "Show or update the configuration file",
            "config [save|undo-mode <reverse|remove-only>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for name in context.controller.policy().names() {
        println!("  {name}");
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Configuration");
            println!("  file        {}", context.config_manager.path().display());
            println!("  categories  {}", context.config.categories.join(", "));
            println!("  undo mode   {}", context.config.undo_mode);
            println!("  plain mode  {}", context.config.output.plain_mode);
            println!("  quiet mode  {}", context.config.output.quiet_mode);
            Ok(())
        }
        ["save"] => {
            context.config_manager.save(&context.config)?;
            io::print_success(format!(
                "Configuration written to {}.",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["undo-mode", mode] => {
            let mode: UndoMode = mode.parse().map_err(CommandError::InvalidArguments)?;
            context.config.undo_mode = mode;
            context.config_manager.save(&context.config)?;
            io::print_success(format!(
                "Undo mode set to {mode}; it takes effect in the next session."
            ));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [save|undo-mode <reverse|remove-only>]".into(),
        )),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Expense Tracker {}", meta.version));
    println!("  build hash  {} ({})", meta.git_hash, meta.git_status);
    println!("  built at    {}", meta.timestamp);
    println!("  profile     {}", meta.profile);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                println!("  {}", entry.description);
                println!("  usage: {}", entry.usage);
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    for entry in context.registry.list() {
        println!("  {:<12} {}", entry.name, entry.description);
    }
    println!("\nUse `help <command>` for details.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
