//! # stroy-cli
//!
//! The `stroycrm` binary: an interactive shell over the CRM workspace plus
//! a few one-shot commands.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: the config file and its defaults
//! - [`config_handlers`]: `stroycrm config ...`
//! - [`commands`]: `stroycrm list` and `stroycrm dashboard`
//! - [`shell`]: the interactive shell
//! - [`render`]: text rendering of screens

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod render;
pub mod shell;

pub use cli::{Cli, Command, ConfigAction, ListKind};
pub use config::{ConfigManager, StroyConfig};
pub use shell::Shell;
