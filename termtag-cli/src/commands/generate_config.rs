//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Dictionary file to reference in the template
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [dictionary] path at your dictionary and adjust [matching]");
        println!("2. Check the dictionary loads:");
        println!(
            "   termtag validate -d terms.tsv -c {}",
            self.output.display()
        );
        println!("3. Use it for annotation:");
        println!(
            "   termtag annotate -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let dictionary = match &self.dictionary {
            Some(path) => format!("path = {:?}", path.display().to_string()),
            None => "# path = \"terms.tsv\"".to_string(),
        };

        format!(
            r#"# termtag configuration

[matching]
# Treat case as significant
case_sensitive = false

# With case_sensitive, only tokens up to this many chars keep their case
# (0 keeps the case of every token)
case_sensitive_length = 0

# Drop matches that partially overlap an earlier one
eliminate_overlapping = false

# Stemming language (run `termtag list languages`), or "None"
stemming_language = "None"

# Type reported for entries without one
# default_type = "Entity"

[dictionary]
# JSON array of {{"label", "kind", "uri", "type"}} objects, or TSV lines
# label<TAB>label|synonym<TAB>uri[<TAB>type]
{dictionary}
# format = "tsv"

[output]
# text, json, markdown or conll
default_format = "text"
pretty_json = true

[performance]
# 0 uses every core
worker_threads = 0
"#
        )
    }
}
