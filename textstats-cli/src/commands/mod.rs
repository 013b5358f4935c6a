//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate_config;
pub mod process;
pub mod validate;

/// English readability statistics for text files
#[derive(Debug, Parser)]
#[command(name = "textstats", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files and report readability statistics
    Process(process::ProcessArgs),

    /// Validate a syllable rule table file
    Validate(validate::ValidateArgs),

    /// Write a rule table template to start a custom configuration
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List policies for syllable counts no rule resolves
    Fallbacks,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    pub fn execute(self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - Aligned statistics, one block per input");
                println!("  json      - JSON array with one record per input");
                println!("  markdown  - One Markdown table per input");
            }
            ListCommands::Fallbacks => {
                println!("Fallbacks for unresolved syllable counts:");
                println!("  zero         - Count the word as zero syllables (default)");
                println!("  alternative  - Use the vowel-pair estimate");
            }
        }
    }
}
