//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Traincheck - Safety training compliance checking.
#[derive(Debug, Parser)]
#[command(name = "traincheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output (summary and missing list only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a pasted report against the required trainings
    Check(CheckArgs),

    /// List the required trainings in display order
    List(ListArgs),

    /// Open the tab-based interactive checker (default if no command specified)
    Interactive(InteractiveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Report file to check; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the built-in required list (one training name per line)
    #[arg(long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the built-in required list (one training name per line)
    #[arg(long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

/// Arguments for the `interactive` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InteractiveArgs {
    /// Override the built-in required list (one training name per line)
    #[arg(long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
