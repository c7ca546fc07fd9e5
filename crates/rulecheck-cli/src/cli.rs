//! CLI argument parsing and report rendering

use crate::registration::UserRegistration;
use clap::{Parser, ValueEnum};
use console::style;
use rulecheck::{Validate, ValidationReport};
use std::io::Write;

/// rulecheck - validate a user registration and print the report
#[derive(Parser, Debug)]
#[command(name = "rulecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// User name (required, 10 to 255 characters)
    #[arg(long, default_value = "Tio Jobs")]
    user: String,

    /// Email address (required, must be a valid address)
    #[arg(long, default_value = "admin@admin.com")]
    email: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when validation fails
    #[arg(long)]
    strict: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One line per message
    Text,
    /// The report as a JSON object
    Json,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// Returns `false` when the process should exit with a failure status.
    pub fn execute(self, out: &mut impl Write) -> anyhow::Result<bool> {
        let registration = UserRegistration::new(self.user, self.email);
        tracing::debug!(?registration, "validating");

        let report = registration.validate();
        if report.is_empty() {
            tracing::info!("registration is valid");
        } else {
            tracing::info!(errors = report.len(), "registration is invalid");
        }

        match self.format {
            Format::Text => render_text(&report, out)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }

        Ok(!(self.strict && !report.is_empty()))
    }
}

fn render_text(report: &ValidationReport, out: &mut impl Write) -> std::io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "{}", style("valid").green());
    }
    for (field, messages) in report.iter() {
        for message in messages {
            writeln!(out, "{}: {}", style(field).bold(), style(message).red())?;
        }
    }
    Ok(())
}
