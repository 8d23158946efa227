//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: report message ids missing from locale files
//! - `init`: write a default `.intlidrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that analyze a project.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Base directory for locale files (overrides config file)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Locale JSON file; repeat for several locales (overrides config file)
    #[arg(long = "locale-file", value_name = "FILE")]
    pub locale_files: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every message id used in code exists in every locale file
    Check(CheckCommand),
    /// Initialize a new .intlidrc.json configuration file
    Init,
}
