//! Emit command: render the settings form for the phone-side loader.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, OutputFormat};
use crate::manifest::settings_form;
use crate::validator::FormValidator;
use clap::Args;
use std::path::PathBuf;

/// Render the settings form
#[derive(Debug, Clone, Args)]
pub struct EmitArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Output file (defaults to the configured path, else stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl EmitArgs {
    /// Execute the emit command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let form = settings_form();

        // Never ship a form the firmware would reject
        let report = FormValidator::new(&form, config.device.message_keys.iter()).validate();
        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Settings form does not match the device configuration:\n{}",
                report.format_message()
            )));
        }

        let format = self.format.unwrap_or(config.output.format);
        let pretty = config.output.pretty && !self.compact;

        match self.output.as_ref().or(config.output.path.as_ref()) {
            Some(path) => {
                export::write_form(&form, path, format, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                eprintln!("✓ Wrote settings form to: {}", path.display());
            }
            None => {
                let rendered = export::render(&form, format, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                print!("{rendered}");
            }
        }

        Ok(())
    }
}
