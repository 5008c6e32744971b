//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Crawl the source tree and print the component usage report
//! - `init`: Initialize a compscan configuration file

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Component name to report (overrides config file)
    /// Can be specified multiple times: --component Header --component Text
    #[arg(long = "component")]
    pub components: Vec<String>,

    /// Also report sub-component usages like <Header.Logo>
    #[arg(long)]
    pub include_sub_components: bool,

    /// Only report components imported from this module (or /regex/)
    #[arg(long)]
    pub imported_from: Option<String>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the source tree for component usages and print a JSON report
    Scan(ScanCommand),
    /// Initialize a new .compscanrc.json configuration file
    Init,
}
