use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_INDENT};
use crate::error::{DialogSetError, Result};
use crate::logging::log_error;
use crate::models::Dataset;
use crate::parsers::{ParseReport, QaTextParser};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub lines_read: usize,
    pub sessions: usize,
    pub messages: usize,
    pub skipped_lines: usize,
}

/// Reads dialogue text, parses it and writes the JSON dataset
#[derive(Debug, Clone)]
pub struct ConverterService {
    parser: QaTextParser,
    indent: usize,
}

impl ConverterService {
    pub fn new() -> Self {
        Self {
            parser: QaTextParser::new(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_parser(QaTextParser::new().with_strict(config.parser.strict))
            .with_indent(config.output.indent)
    }

    pub fn with_parser(mut self, parser: QaTextParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Read `path` as UTF-8, dropping a leading byte-order mark
    pub fn read_input(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DialogSetError::input_not_found(path),
            _ => DialogSetError::Io(e),
        })?;

        decode_utf8(path, bytes)
    }

    /// Parse already-decoded dialogue text
    pub fn convert_text(&self, text: &str) -> Result<(Dataset, ParseReport)> {
        self.parser.parse(text)
    }

    /// Convert `input` and write the dataset to `output`, or next to the input
    /// with a `.json` extension. An existing output file is overwritten.
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<ConversionSummary> {
        let output_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        let text = self.read_input(input)?;
        let (dataset, report) = self.convert_text(&text)?;
        tracing::info!(
            path = %input.display(),
            lines = report.lines_read,
            "Read input file"
        );

        let json = dataset.to_json_pretty(self.indent)?;
        fs::write(&output_path, json)?;
        tracing::info!(
            path = %output_path.display(),
            sessions = dataset.len(),
            "Wrote dataset"
        );

        Ok(ConversionSummary {
            input_path: input.to_path_buf(),
            output_path,
            lines_read: report.lines_read,
            sessions: dataset.len(),
            messages: dataset.total_messages(),
            skipped_lines: report.skipped_count(),
        })
    }
}

impl Default for ConverterService {
    fn default() -> Self {
        Self::new()
    }
}

/// `data.txt` becomes `data.json`; a path without extension gains one
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

fn decode_utf8(path: &Path, mut bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        DialogSetError::decode(path, line)
    })
}

/// Convert with default settings, returning the output path
pub fn convert(input: impl AsRef<Path>, output: Option<&Path>) -> Result<PathBuf> {
    ConverterService::new()
        .convert(input.as_ref(), output)
        .map(|summary| summary.output_path)
}

/// Convert with default settings; failures are printed and logged, and `None` is returned
pub fn convert_or_report(input: impl AsRef<Path>, output: Option<&Path>) -> Option<PathBuf> {
    match convert(input, output) {
        Ok(path) => Some(path),
        Err(e) => {
            report_failure(&e);
            None
        }
    }
}

/// Print a user-facing description of a failed conversion
pub fn report_failure(error: &DialogSetError) {
    log_error(error, error.category());

    let message = match error {
        DialogSetError::InputNotFound { path } => {
            format!("Input file not found: {}", path.display())
        }
        DialogSetError::Decode { path, line } => format!(
            "{} is not UTF-8 encoded (first bad byte on line {line}); re-save it as UTF-8",
            path.display()
        ),
        DialogSetError::MalformedLine { line, reason } => {
            format!("Line {line} rejected in strict mode: {reason}")
        }
        other => format!("Conversion failed: {other}"),
    };

    eprintln!("{} {}", console::style("✗").red().bold(), message);
}
