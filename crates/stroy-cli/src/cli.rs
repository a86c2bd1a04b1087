//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// СтройCRM: in-memory construction CRM.
#[derive(Parser, Debug)]
#[command(name = "stroycrm", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Raise log verbosity from info to debug
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run; defaults to `shell`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect or edit the configuration file
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print a seeded list, optionally filtered
    List {
        /// Which list
        kind: ListKind,
        /// Case-insensitive search query
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the dashboard summary
    Dashboard,
    /// Interactive shell over stdin
    Shell,
}

/// Lists printable by `stroycrm list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Clients
    Clients,
    /// Projects
    Projects,
    /// System users
    Users,
    /// Chat contacts
    Contacts,
}

/// `stroycrm config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `company.name`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Write here instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
