//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minimal hierarchical test runner
#[derive(Parser, Debug)]
#[command(name = "pico-spec")]
#[command(version = "0.1.0")]
#[command(about = "Declare, run and report nested test suites")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a bundled demonstration suite
    Run(RunArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Suite to run (showcase, passing)
    #[arg(short, long, default_value = "showcase")]
    pub suite: String,

    /// Output format (tree, flat, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Do not report results as they settle
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Save the report to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "pico-spec.yaml")]
        path: PathBuf,
    },
}
