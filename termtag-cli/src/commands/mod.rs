//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use termtag_engine::{DictionaryFormat, Language};

pub mod annotate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate text files with dictionary terms
    Annotate(annotate::AnnotateArgs),

    /// Load a dictionary and report its size
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List stemming languages
    Languages,

    /// List output and dictionary formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => {
                let mut lines = vec!["Stemming languages:".to_string()];
                lines.extend(
                    Language::ALL
                        .iter()
                        .map(|language| format!("  {:<12} {}", language.name(), language.code())),
                );
                lines.push("  None         (stemming disabled)".to_string());
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Output formats:".to_string()];
                lines.extend(annotate::OutputFormat::ALL.iter().map(|format| {
                    format!("  {:<12} {}", format.name(), format.description())
                }));
                lines.push(String::new());
                lines.push("Dictionary formats:".to_string());
                lines.extend(DictionaryFormat::ALL.iter().map(|format| {
                    format!("  {:<12} .{}", format.name(), format.extensions().join(", ."))
                }));
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_languages() {
        let lines = ListCommands::Languages.lines();
        assert_eq!(lines.len(), Language::ALL.len() + 2);
        assert!(lines.iter().any(|line| line.contains("English") && line.contains("en")));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        for expected in ["text", "json", "markdown", "conll", "tsv"] {
            assert!(
                lines.iter().any(|line| line.trim_start().starts_with(expected)),
                "missing {expected}"
            );
        }
    }
}
