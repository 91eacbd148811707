use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklist v", env!("CARGO_PKG_VERSION"), " - a to-do list with undo and an urgent queue"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script of task actions against a fresh list
    Run(RunArgs),
    /// Show or edit the config file
    Config(ConfigCmd),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,
    /// Print one JSON object per action
    #[arg(long)]
    pub json: bool,
    /// Stop at the first failing line with a non-zero exit status
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Set a value, e.g. `defaults.priority High`
    Set {
        /// Dotted key (section.key)
        key: String,
        value: String,
    },
}
