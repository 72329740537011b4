//! CLI argument parsing for promptgen.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; implementations live in the `commands`
//! module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Promptgen: requirement-driven system prompt generator for AI agents.
///
/// Reads a structured requirement (title, description, constraints, goals,
/// optional context) from a JSON or YAML file, validates it, and assembles a
/// system prompt plus derived capability labels for the consuming agent.
#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a system prompt from a requirement file.
    ///
    /// Parses and validates the requirement, assembles the prompt, and
    /// prints it. Optionally rewrites the prompt text through a hosted
    /// model and/or persists the result as a JSON document.
    Generate(GenerateArgs),

    /// Validate a requirement or prompt mapping without generating.
    ///
    /// Reports whether the file would construct cleanly, naming the first
    /// offending field when it would not.
    Validate(ValidateArgs),
}

/// Output format for the generate command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Print only the assembled system prompt text.
    Text,
    /// Print the whole prompt object as JSON.
    Json,
}

/// Which schema to validate against.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateKind {
    /// Validate as a requirement mapping.
    Requirement,
    /// Validate as a prompt mapping.
    Prompt,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Requirement file. `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub file: PathBuf,

    /// Config file path (default: `promptgen.yaml` when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rewrite the system prompt through the configured hosted model.
    #[arg(long)]
    pub enhance: bool,

    /// Persist the prompt as a JSON document and log the operation.
    #[arg(long)]
    pub save: bool,

    /// Store directory for `--save` (default: `.promptgen`).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to validate. `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub file: PathBuf,

    /// Schema to validate against.
    #[arg(long, value_enum, default_value = "requirement")]
    pub kind: ValidateKind,
}
