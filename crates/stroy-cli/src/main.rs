//! `stroycrm` entry point.

use clap::Parser;
use stroy_cli::config_handlers::handle_config_command;
use stroy_cli::{Cli, Command, ConfigManager, Shell, StroyConfig, commands};
use stroy_crm::Workspace;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose > 0 { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Command::Shell) {
        Command::Config { action } => Ok(handle_config_command(config_path, action)?),
        Command::List { kind, query } => commands::cmd_list(kind, query.as_deref()),
        Command::Dashboard => commands::cmd_dashboard(),
        Command::Shell => {
            let config = StroyConfig::load(config_path)?;
            tracing::info!(view = %config.shell.initial_view, "Starting shell");
            let workspace = Workspace::new(config.shell.initial_view, config.settings);
            let mut shell = Shell::new(workspace, config.shell.prompt);
            let stdin = std::io::stdin();
            shell.run(stdin.lock(), &mut std::io::stdout())?;
            Ok(())
        }
    }
}
