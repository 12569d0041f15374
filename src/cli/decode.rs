//! Decode command: turn a submit payload into device settings.

use crate::cli::common::{CliError, CliResult};
use crate::device::DeviceSettings;
use crate::manifest::settings_form;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Decode a settings submit payload
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// JSON payload file keyed by message key, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub payload: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DecodeOutput {
    settings: DeviceSettings,
    app_message: BTreeMap<&'static str, i32>,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let payload: Value = serde_json::from_str(&self.read_payload()?)
            .map_err(|e| CliError::io(format!("Failed to parse settings payload: {e}")))?;

        let mut settings = DeviceSettings::from_form(&settings_form());
        settings
            .apply_response(&payload)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let output = DecodeOutput {
            settings,
            app_message: settings.to_app_message(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Device settings:");
            println!(
                "  Invert colors: {}",
                if output.settings.invert_colors { "on" } else { "off" }
            );
            println!("\nApp message:");
            for (key, value) in &output.app_message {
                println!("  {key} = {value}");
            }
        }

        Ok(())
    }

    fn read_payload(&self) -> CliResult<String> {
        if self.payload.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::io(format!("Failed to read payload from stdin: {e}")))?;
            return Ok(buffer);
        }

        fs::read_to_string(&self.payload).map_err(|e| {
            CliError::io(format!(
                "Failed to read payload {}: {e}",
                self.payload.display()
            ))
        })
    }
}
