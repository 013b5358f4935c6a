//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use textstats_core::rules::ENGLISH_RULES_TOML;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code identifying the new rule tables
    #[arg(short = 'l', long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rule table template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the patterns and exception words");
        println!("2. Validate the file:");
        println!("   textstats validate --rules {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   textstats process -i input.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// The built-in English tables relabelled with the requested code
    pub fn generate_template(&self) -> String {
        let body = ENGLISH_RULES_TOML
            .replacen("code = \"en\"", &format!("code = \"{}\"", self.code), 1)
            .replacen(
                "name = \"English\"",
                &format!("name = \"Custom rules ({})\"", self.code),
                1,
            );

        format!(
            "# Rule tables generated by textstats from the built-in English rules.\n\
             # Validate with: textstats validate --rules <FILE>\n\n{body}"
        )
    }
}
