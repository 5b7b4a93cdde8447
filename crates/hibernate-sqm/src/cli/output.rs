//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use hibernate_sqm_diagnostics::SqmError;
use hibernate_sqm_function::ContributionObserver;
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    /// Human readable text
    #[default]
    Pretty,
}

/// Format an error for display
///
/// Engine errors are rendered as diagnostics with their help line.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<SqmError>() {
        Some(sqm) => sqm.to_diagnostic().render_colored(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// `name: value` line with a highlighted label
pub fn format_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:>10} {}", format!("{}:", label).cyan(), value)
}

/// Serialize a value as pretty JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

/// Contribution notifications on stderr, for `--verbose`
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrObserver;

impl ContributionObserver for StderrObserver {
    fn type_contributions(&self, contributor: &str) {
        eprintln!("{} type contributions from {}", "Registering".blue().bold(), contributor);
    }

    fn function_contributions(&self, contributor: &str) {
        eprintln!("{} function contributions from {}", "Registering".blue().bold(), contributor);
    }

    fn function_registered(&self, name: &str, alt_name: Option<&str>) {
        match alt_name {
            Some(alt) => eprintln!("  {} {} ({})", "+".green(), name, alt.dimmed()),
            None => eprintln!("  {} {}", "+".green(), name),
        }
    }
}
