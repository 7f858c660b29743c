//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use termtag_engine::{source, Annotator, DictionaryFormat};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dictionary file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,

    /// Dictionary format, detected from the extension by default
    #[arg(long, value_name = "FORMAT")]
    pub dictionary_format: Option<String>,

    /// Configuration file supplying matching options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        match self.load() {
            Ok(annotator) => {
                let stats = annotator.stats();
                println!("✓ Dictionary is valid!");
                println!("  Concepts: {}", stats.concepts);
                println!("  Labels: {}", stats.labels);
                println!("  Synonyms: {}", stats.synonyms);
                println!("  Keys: {}", stats.keys);
                if let Some(stemmed) = stats.stemmed_keys {
                    println!("  Stemmed keys: {stemmed}");
                }
                println!("  Automaton states: {}", stats.states);
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn load(&self) -> Result<Annotator> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self
            .dictionary_format
            .as_deref()
            .map(DictionaryFormat::from_str)
            .transpose()?;
        let entries = source::load_path(&self.dictionary, format)?;
        Ok(Annotator::new(entries, config.annotator_config()?)?)
    }
}
