// ABOUTME: CLI argument parsing and command routing for fabrica-onboard
//
// Provides:
// - Launching the wizard TUI (default)
// - Inspecting the saved draft (status)
// - Discarding the saved draft (reset)

pub mod reset;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};

/// Fabrica merchant onboarding wizard
#[derive(Parser)]
#[command(name = "fabrica-onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the wizard TUI (default if no command given)
    Wizard,

    /// Show the saved onboarding draft
    Status,

    /// Discard the saved onboarding draft
    Reset,
}
