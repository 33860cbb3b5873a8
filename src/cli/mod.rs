pub mod convert;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "dialogset")]
#[command(about = "Convert q:/a: dialogue text into a JSON chat dataset")]
#[command(version)]
pub struct Cli {
    /// Input text file (defaults to input.default_path from the config, dialogueCollection.txt)
    pub input: Option<PathBuf>,

    /// Output JSON file (defaults to the input path with a .json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abort on the first line that is not a valid q:/a: turn
    #[arg(long)]
    pub strict: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.dialogset/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Run the conversion. Config and conversion failures are both reported on
    /// stderr, followed by the exit pause, and yield a failing exit code.
    pub fn run(self) -> Result<ExitCode> {
        let config = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                convert::report_config_failure(&e);
                if !self.no_pause {
                    convert::wait_for_acknowledgment();
                }
                return Ok(ExitCode::FAILURE);
            }
        };

        let options = self.into_options(&config);
        let pause = options.pause;
        let summary = convert::handle_convert_command(&config, options)?;

        if pause {
            convert::wait_for_acknowledgment();
        }

        Ok(match summary {
            Some(_) => ExitCode::SUCCESS,
            None => ExitCode::FAILURE,
        })
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => {
                let mut config = Config::load_from(path)?;
                config.apply_env();
                Ok(config)
            }
            None => Config::load(),
        }
    }

    /// Merge flags over config values
    pub fn into_options(self, config: &Config) -> convert::ConvertOptions {
        convert::ConvertOptions {
            input: self
                .input
                .unwrap_or_else(|| config.input.default_path.clone()),
            output: self.output,
            strict: self.strict || config.parser.strict,
            quiet: self.quiet,
            pause: config.cli.pause_on_exit && !self.no_pause,
        }
    }
}
