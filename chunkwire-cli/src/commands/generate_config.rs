//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the chunk size and encoding for your transport");
        println!("2. Use it for splitting:");
        println!(
            "   chunkwire split -i message.json --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_template() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("chunkwire.toml");

        GenerateConfigArgs {
            output: output.clone(),
            force: false,
        }
        .execute()
        .unwrap();

        assert_eq!(CliConfig::load(&output).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("chunkwire.toml");
        fs::write(&output, "# mine").unwrap();

        let err = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        }
        .execute()
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "# mine");

        GenerateConfigArgs {
            output: output.clone(),
            force: true,
        }
        .execute()
        .unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("[chunking]"));
    }
}
