//! Annotate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, AnnotatedDocument};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use termtag_engine::{source, Annotator, DictionaryFormat};

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Dictionary file (JSON or TSV)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Dictionary format, detected from the extension by default
    #[arg(long, value_name = "FORMAT")]
    pub dictionary_format: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat case as significant
    #[arg(long)]
    pub case_sensitive: bool,

    /// With --case-sensitive, only tokens up to this length keep their case
    #[arg(long, value_name = "N")]
    pub case_sensitive_length: Option<usize>,

    /// Drop matches that partially overlap an earlier one
    #[arg(short, long)]
    pub eliminate_overlapping: bool,

    /// Stemming language name or code ("None" disables stemming)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub stemming: Option<String>,

    /// Type reported for entries without one
    #[arg(long, value_name = "TYPE")]
    pub default_type: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TERMTAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per annotation
    Text,
    /// JSON array of documents with their annotations
    Json,
    /// Markdown table per document
    Markdown,
    /// One token per line with its tag
    Conll,
}

impl OutputFormat {
    /// Every output format
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Conll,
    ];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Conll => "conll",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one annotation per line",
            OutputFormat::Json => "JSON array of documents",
            OutputFormat::Markdown => "markdown table per document",
            OutputFormat::Conll => "one token per line with its type",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format: {s}")))
    }
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting annotation");
        log::debug!("Arguments: {:?}", self);

        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        self.apply_overrides(&mut config);

        let annotator = self.build_annotator(&config)?;
        let stats = annotator.stats();
        log::info!(
            "Loaded {} concepts ({} keys, {} automaton states)",
            stats.concepts,
            stats.keys,
            stats.states
        );

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to annotate", files.len());

        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };

        let threads = self
            .threads
            .unwrap_or(config.performance.worker_threads);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let document = annotate_file(&annotator, path, format);
                    progress.file_completed(&path.display().to_string());
                    document
                })
                .collect::<Result<Vec<_>>>()
        });
        progress.finish();
        let documents = documents?;

        let total: usize = documents.iter().map(|d| d.annotations.len()).sum();
        log::info!("Found {} annotations in {} files", total, documents.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for document in &documents {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Command-line flags take precedence over the config file
    fn apply_overrides(&self, config: &mut CliConfig) {
        let matching = &mut config.matching;
        if self.case_sensitive {
            matching.case_sensitive = true;
        }
        if let Some(length) = self.case_sensitive_length {
            matching.case_sensitive_length = length;
        }
        if self.eliminate_overlapping {
            matching.eliminate_overlapping = true;
        }
        if let Some(language) = &self.stemming {
            matching.stemming_language = language.clone();
        }
        if let Some(default_type) = &self.default_type {
            matching.default_type = Some(default_type.clone());
        }
        if let Some(path) = &self.dictionary {
            config.dictionary.path = Some(path.clone());
        }
        if let Some(format) = &self.dictionary_format {
            config.dictionary.format = Some(format.clone());
        }
    }

    fn build_annotator(&self, config: &CliConfig) -> Result<Annotator> {
        let annotator_config = config.annotator_config()?;
        let path = config.dictionary.path.as_deref().ok_or_else(|| {
            CliError::ConfigError(
                "no dictionary given (use --dictionary or [dictionary] path)".to_string(),
            )
        })?;
        let format = config
            .dictionary
            .format
            .as_deref()
            .map(DictionaryFormat::from_str)
            .transpose()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        log::info!("Loading dictionary from {}", path.display());

        let entries = source::load_path(path, format)
            .map_err(|e| CliError::DictionaryError(e.to_string()))?;
        let annotator = Annotator::new(entries, annotator_config)
            .map_err(|e| CliError::DictionaryError(e.to_string()))?;
        Ok(annotator)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when running several commands in one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn annotate_file(
    annotator: &Annotator,
    path: &Path,
    format: OutputFormat,
) -> Result<AnnotatedDocument> {
    let text = FileReader::read_text(path)?;
    let source = path.display().to_string();
    let failed = |e: termtag_engine::EngineError| CliError::AnnotationError {
        source: source.clone(),
        message: e.to_string(),
    };

    let annotations = annotator.annotate(&text).map_err(failed)?;
    let tokens = match format {
        OutputFormat::Conll => Some(annotator.tag_tokens(&text).map_err(failed)?),
        _ => None,
    };
    log::debug!("{}: {} annotations", source, annotations.len());

    Ok(AnnotatedDocument {
        source,
        text,
        annotations,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> AnnotateArgs {
        AnnotateArgs {
            dictionary: None,
            dictionary_format: None,
            input,
            output: None,
            format: None,
            case_sensitive: false,
            case_sensitive_length: None,
            eliminate_overlapping: false,
            stemming: None,
            default_type: None,
            config: None,
            threads: Some(1),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_output_format_names() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.matching.stemming_language = "German".to_string();

        let mut args = args(vec!["a.txt".to_string()]);
        args.stemming = Some("English".to_string());
        args.eliminate_overlapping = true;
        args.dictionary = Some(PathBuf::from("terms.json"));
        args.apply_overrides(&mut config);

        assert_eq!(config.matching.stemming_language, "English");
        assert!(config.matching.eliminate_overlapping);
        assert!(!config.matching.case_sensitive);
        assert_eq!(config.dictionary.path, Some(PathBuf::from("terms.json")));
    }

    #[test]
    fn test_missing_dictionary() {
        let args = args(vec!["a.txt".to_string()]);
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("no dictionary given"));
    }

    #[test]
    fn test_annotate_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let dictionary = temp_dir.path().join("cities.tsv");
        fs::write(&dictionary, "New York\tlabel\turn:ny\tCity\n").unwrap();
        let input = temp_dir.path().join("doc.txt");
        fs::write(&input, "I live in New York City.").unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args(vec![input.display().to_string()]);
        args.dictionary = Some(dictionary);
        args.output = Some(output.clone());
        args.format = Some(OutputFormat::Json);
        args.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let annotation = &json[0]["annotations"][0];
        assert_eq!(annotation["text"], "New York");
        assert_eq!(annotation["uri"], "urn:ny");
        assert_eq!(annotation["type"], "City");
        assert_eq!(annotation["begin"], 10);
        assert_eq!(annotation["end"], 18);
    }
}
