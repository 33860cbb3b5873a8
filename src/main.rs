use clap::Parser;
use dialogset::cli::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists (ignore errors if missing)
    dotenvy::dotenv().ok();

    dialogset::logging::init_from_env()?;

    let cli = Cli::parse();
    cli.run()
}
