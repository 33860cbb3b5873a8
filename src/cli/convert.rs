use anyhow::Result;
use console::style;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::Config;
use crate::logging::log_error;
use crate::parsers::QaTextParser;
use crate::services::{report_failure, ConversionSummary, ConverterService};

/// Resolved settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub quiet: bool,
    pub pause: bool,
}

/// Run a conversion and print the outcome.
///
/// Conversion failures are reported on stderr and yield `Ok(None)`; they are not
/// returned as errors.
pub fn handle_convert_command(
    config: &Config,
    options: ConvertOptions,
) -> Result<Option<ConversionSummary>> {
    let service = ConverterService::from_config(config)
        .with_parser(QaTextParser::new().with_strict(options.strict));

    match service.convert(&options.input, options.output.as_deref()) {
        Ok(summary) => {
            if !options.quiet {
                print_summary(&summary);
            }
            Ok(Some(summary))
        }
        Err(e) => {
            report_failure(&e);
            Ok(None)
        }
    }
}

/// Print a configuration failure the same way conversion failures are printed
pub fn report_config_failure(error: &anyhow::Error) {
    log_error(error, "config");
    eprintln!(
        "{} Failed to load configuration: {error:#}",
        style("✗").red().bold()
    );
}

fn print_summary(summary: &ConversionSummary) {
    println!("Read {} lines", summary.lines_read);
    if summary.skipped_lines > 0 {
        println!(
            "{} Skipped {} line(s) without a usable q:/a: turn",
            style("!").yellow().bold(),
            summary.skipped_lines
        );
    }
    println!();
    println!("{}", style("Conversion complete").bold().green());
    println!("  Input:    {}", summary.input_path.display());
    println!("  Output:   {}", summary.output_path.display());
    println!("  Sessions: {}", summary.sessions);
    println!("  Messages: {}", summary.messages);
}

/// Block until the user presses Enter. Does nothing when stdin is not a terminal.
pub fn wait_for_acknowledgment() {
    if !std::io::stdin().is_terminal() {
        return;
    }

    println!();
    println!("{}", style("Press Enter to exit...").dim());
    if let Err(e) = console::Term::stdout().read_line() {
        tracing::debug!(error = %e, "Failed to read acknowledgment");
    }
}
