//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::OutputFormat;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Indent JSON output by default (true or false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pretty: Option<bool>,

    /// Default output file
    #[arg(long, value_name = "FILE")]
    output_path: Option<PathBuf>,

    /// Message keys declared by the firmware (comma-separated)
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    message_keys: Option<Vec<String>>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    output: OutputSection,
    device: DeviceSection<'a>,
}

#[derive(Serialize, Debug)]
struct OutputSection {
    format: String,
    pretty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[derive(Serialize, Debug)]
struct DeviceSection<'a> {
    message_keys: &'a [String],
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = Config::load(config_path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        let file = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => Config::config_file_path().ok().filter(|path| path.exists()),
        };

        if self.json {
            output_json(&config, file.as_deref())?;
        } else {
            output_human_readable(&config, file.as_deref());
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.format.is_none()
            && self.pretty.is_none()
            && self.output_path.is_none()
            && self.message_keys.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --pretty, --output-path, or --message-keys",
            ));
        }

        // Setting values on a config that does not exist yet starts from defaults
        let mut config = match config_path {
            Some(path) if path.exists() => Config::load_from(path),
            Some(_) => Ok(Config::new()),
            None => Config::load(None),
        }
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(format) = self.format {
            config.output.format = format;
        }

        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }

        if let Some(path) = &self.output_path {
            config.output.path = Some(path.clone());
        }

        if let Some(keys) = &self.message_keys {
            config.device.message_keys = keys.iter().map(|key| key.trim().to_string()).collect();
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        let saved = config
            .save(config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated: {}", saved.display());

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, file: Option<&Path>) -> CliResult<()> {
    let output = ConfigOutput {
        file: file.map(|p| p.to_string_lossy().to_string()),
        output: OutputSection {
            format: config.output.format.to_string(),
            pretty: config.output.pretty,
            path: config
                .output
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        device: DeviceSection {
            message_keys: &config.device.message_keys,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, file: Option<&Path>) {
    println!("Watchface Config Configuration");
    println!("==============================");
    println!();

    match file {
        Some(path) => println!("File: {}", path.display()),
        None => println!("File: (defaults, no config file)"),
    }
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format);
    println!("  Pretty: {}", config.output.pretty);
    match &config.output.path {
        Some(path) => println!("  Path:   {}", path.display()),
        None => println!("  Path:   (stdout)"),
    }
    println!();

    println!("Device:");
    println!("  Message Keys: {}", config.device.message_keys.join(", "));
    println!();
}
