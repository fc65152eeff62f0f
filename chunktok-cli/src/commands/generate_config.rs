//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration written to {}", path.display());
                eprintln!("Use it with: chunktok tokenize -i input.txt -c {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# chunktok configuration\n\
             #\n\
             # [reader] chunk_size_threshold: a chunk is dispatched once the\n\
             # pending text exceeds this many bytes (0 = after every read).\n\
             # [reader] encoding: any WHATWG encoding label.\n\
             # [output] default_format: \"text\" or \"json\".\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_back_to_defaults() {
        let args = GenerateConfigArgs { output: None };
        let template = args.generate_template().unwrap();

        let parsed: CliConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }
}
