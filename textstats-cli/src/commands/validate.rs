//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textstats_core::RuleTables;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule table file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule tables: {}", self.rules.display());

        match RuleTables::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule tables are valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                println!(
                    "  Patterns: {} prefix/suffix, {} subtract, {} add",
                    rules.prefix_suffix_patterns().len(),
                    rules.subtract_patterns().len(),
                    rules.add_patterns().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule tables are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
