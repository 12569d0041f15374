//! Watchface Config - settings form tooling for the watchface companion app
//!
//! Renders the settings form the phone-side loader consumes, validates forms
//! against the firmware's message keys, and decodes submitted settings.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchface_config::cli::{
    CliError, CliResult, ConfigArgs, DecodeArgs, EmitArgs, ExitCode, ValidateArgs,
};
use watchface_config::config::Config;
use watchface_config::constants::APP_BINARY_NAME;

/// Watchface Config - settings form tooling for the watchface companion app
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the settings form
    Emit(EmitArgs),
    /// Validate the built-in form or a form file
    Validate(ValidateArgs),
    /// Decode a settings submit payload
    Decode(DecodeArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn load_config(path: Option<&std::path::Path>) -> CliResult<Config> {
    Config::load(path).map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Command::Emit(args) => args.execute(&load_config(config_path)?),
        Command::Validate(args) => args.execute(&load_config(config_path)?),
        Command::Decode(args) => args.execute(),
        Command::Config(args) => args.execute(config_path),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
