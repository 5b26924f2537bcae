//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod generate_config;
pub mod join;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a message file into size-bounded chunks
    Split(split::SplitArgs),

    /// Reassemble a message from a chunk file
    Join(join::JoinArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Join(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Encoding strategies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodingArg {
    /// Base64 over the configured character encoding
    Base64,
    /// ASCII-escaped JSON string literal
    EscapedJson,
}

impl EncodingArg {
    /// Strategy name understood by the core configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingArg::Base64 => "base64",
            EncodingArg::EscapedJson => "escaped-json",
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Open the output file, or stdout when none is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkwire_core::EncodingKind;
    use std::str::FromStr;

    #[test]
    fn test_encoding_arg_names_match_core() {
        for arg in [EncodingArg::Base64, EncodingArg::EscapedJson] {
            let kind = EncodingKind::from_str(arg.as_str()).unwrap();
            assert_eq!(kind.as_str(), arg.as_str());
        }
    }

    #[test]
    fn test_encoding_arg_value_names() {
        use clap::ValueEnum;
        assert_eq!(
            EncodingArg::from_str("escaped-json", true).unwrap(),
            EncodingArg::EscapedJson
        );
        assert_eq!(EncodingArg::from_str("BASE64", true).unwrap(), EncodingArg::Base64);
    }

    #[test]
    fn test_open_output_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        {
            let mut writer = open_output(Some(&path)).unwrap();
            writer.write_all(b"chunk").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "chunk");
    }

    #[test]
    fn test_open_output_bad_directory() {
        let Err(err) = open_output(Some(Path::new("/nonexistent/dir/out.txt"))) else {
            panic!("expected an error for a missing directory");
        };
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
