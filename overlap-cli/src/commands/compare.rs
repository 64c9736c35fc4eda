//! Compare command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use overlap_core::{Input, Request};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{DocumentLabels, HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First document
    #[arg(short = 'a', long, value_name = "FILE", required = true)]
    pub first: PathBuf,

    /// Second document
    #[arg(short = 'b', long, value_name = "FILE", required = true)]
    pub second: PathBuf,

    /// Comparison granularity [default: lines]
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Substring length in characters (substring mode only)
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "OVERLAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Comparison granularities selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Shared lines
    Lines,
    /// Shared sentences
    Sentences,
    /// Shared substrings of a fixed length
    Substrings,
}

impl ModeArg {
    /// Selector name understood by the core
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeArg::Lines => "lines",
            ModeArg::Sentences => "sentences",
            ModeArg::Substrings => "substrings",
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered documents under header lines
    Text,
    /// Standalone HTML page
    Html,
    /// JSON with shared fragments and region offsets
    Json,
}

impl OutputFormat {
    /// Format name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Rendered documents under header lines",
            OutputFormat::Html => "Standalone HTML page with both documents",
            OutputFormat::Json => "Shared fragments and region offsets as JSON",
        }
    }

    /// Parse a format name from a configuration file
    pub fn from_config(name: &str) -> Result<Self> {
        OutputFormat::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format: {name}")).into()
        })
    }
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting comparison");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let request = self.build_request(&config)?;

        let comparison = request
            .run()
            .map_err(CliError::from)?;

        log::info!(
            "Mode {}: {} shared fragments",
            comparison.mode,
            comparison.shared.len()
        );
        log::info!(
            "Highlighted regions: {} in {}, {} in {}",
            comparison.first.highlighted_count(),
            self.first.display(),
            comparison.second.highlighted_count(),
            self.second.display()
        );

        let labels = DocumentLabels::new(
            self.first.display().to_string(),
            self.second.display().to_string(),
        );
        let mut formatter = self.create_formatter(&config)?;
        formatter.format_comparison(&comparison, &labels)?;
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Wrote output to {}", path.display());
        }

        Ok(())
    }

    /// Combine flags, configuration file, and document bytes into a core request
    ///
    /// Flags take precedence over the configuration file.
    pub fn build_request(&self, config: &CliConfig) -> Result<Request> {
        let first = FileReader::read_bytes(&self.first)?;
        let second = FileReader::read_bytes(&self.second)?;

        let mode = self
            .mode
            .map(|mode| mode.as_str().to_string())
            .unwrap_or_else(|| config.comparison.default_mode.clone());

        let mut request = Request::new()
            .first(Input::from_bytes(first))
            .second(Input::from_bytes(second))
            .mode(mode);

        if let Some(length) = self.length.or(config.comparison.substring_length) {
            request = request.length(length.to_string());
        }
        if let Some(class) = &config.output.highlight_class {
            request = request.highlight_class(class.clone());
        }

        Ok(request)
    }

    /// Output format from flags, falling back to the configuration file
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_config(&config.output.format),
        }
    }

    fn create_formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.resolve_format(config)?;
        let writer = self.open_writer()?;

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };
        Ok(formatter)
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => Ok(Box::new(BufWriter::new(create_file(path)?))),
            None => Ok(Box::new(io::stdout())),
        }
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
            // a logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(first: PathBuf, second: PathBuf) -> CompareArgs {
        CompareArgs {
            first,
            second,
            mode: None,
            length: None,
            format: None,
            output: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn write_pair(dir: &TempDir, first: &[u8], second: &[u8]) -> (PathBuf, PathBuf) {
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, first).unwrap();
        fs::write(&b, second).unwrap();
        (a, b)
    }

    #[test]
    fn test_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&dir, b"abcde", b"xbcdy");

        let mut config = CliConfig::default();
        config.comparison.default_mode = "sentences".to_string();
        config.comparison.substring_length = Some(2);

        let mut compare = args(a, b);
        compare.mode = Some(ModeArg::Substrings);
        compare.length = Some(3);

        let comparison = compare.build_request(&config).unwrap().run().unwrap();
        assert_eq!(comparison.shared.sorted(), vec!["bcd"]);
    }

    #[test]
    fn test_config_supplies_defaults() {
        let dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&dir, b"abcde", b"xbcdy");

        let mut config = CliConfig::default();
        config.comparison.default_mode = "substrings".to_string();
        config.comparison.substring_length = Some(4);
        config.output.highlight_class = Some("hit".to_string());

        let comparison = args(a, b).build_request(&config).unwrap().run().unwrap();
        assert!(comparison.shared.is_empty());
        assert_eq!(comparison.first_markup(), "abcde");
    }

    #[test]
    fn test_missing_length_is_reported() {
        let dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&dir, b"abc", b"abc");

        let mut compare = args(a, b);
        compare.mode = Some(ModeArg::Substrings);

        let err = compare
            .build_request(&CliConfig::default())
            .unwrap()
            .run()
            .unwrap_err();
        assert!(matches!(err, overlap_core::Error::MissingLength));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let compare = args(dir.path().join("nope.txt"), dir.path().join("nope2.txt"));

        let err = compare.build_request(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_resolve_format() {
        let compare = args(PathBuf::from("a"), PathBuf::from("b"));
        let mut config = CliConfig::default();
        assert_eq!(compare.resolve_format(&config).unwrap(), OutputFormat::Text);

        config.output.format = "HTML".to_string();
        assert_eq!(compare.resolve_format(&config).unwrap(), OutputFormat::Html);

        config.output.format = "pdf".to_string();
        assert!(compare.resolve_format(&config).is_err());

        let mut compare = compare;
        compare.format = Some(OutputFormat::Json);
        assert_eq!(compare.resolve_format(&config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&dir, b"hello world\nfoo\n", b"goodbye\nfoo\n");
        let out = dir.path().join("out.html");

        let mut compare = args(a, b);
        compare.format = Some(OutputFormat::Html);
        compare.output = Some(out.clone());
        compare.execute().unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("<pre>hello world\n<span>foo</span>\n</pre>"));
    }

    #[test]
    fn test_mode_arg_names() {
        for mode in ModeArg::value_variants() {
            assert!(overlap_core::Mode::NAMES.contains(&mode.as_str()));
        }
    }
}
