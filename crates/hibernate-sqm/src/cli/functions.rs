//! Function catalogue listing

use super::output::{self, OutputFormat};
use super::EngineOptions;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Configuration for the functions command
pub struct FunctionsConfig {
    pub engine: EngineOptions,
    /// Case-insensitive substring of the canonical name or an alternate key
    pub filter: Option<String>,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct FunctionEntry<'a> {
    name: &'a str,
    alternate_keys: Vec<&'a str>,
    signature: String,
}

/// List the functions registered for the configured dialect
pub fn functions(config: FunctionsConfig) -> Result<()> {
    let factory = config.engine.build()?;
    let registry = factory.query_engine().function_registry();
    let filter = config.filter.as_deref().map(str::to_lowercase);

    let entries: Vec<FunctionEntry<'_>> = registry
        .iter()
        .map(|(name, descriptor)| FunctionEntry {
            name,
            alternate_keys: registry.alternate_keys_for(name),
            signature: descriptor.signature(),
        })
        .filter(|entry| match &filter {
            Some(filter) => {
                entry.name.to_lowercase().contains(filter.as_str())
                    || entry.alternate_keys.iter().any(|key| key.to_lowercase().contains(filter.as_str()))
            }
            None => true,
        })
        .collect();

    match config.format {
        OutputFormat::Json => println!("{}", output::format_json(&entries)?),
        OutputFormat::Pretty => {
            for entry in &entries {
                if entry.alternate_keys.is_empty() {
                    println!("{}", entry.signature);
                } else {
                    println!("{} {}", entry.signature, format!("[{}]", entry.alternate_keys.join(", ")).dimmed());
                }
            }
            eprintln!(
                "{}",
                output::format_success(&format!("{} of {} functions", entries.len(), registry.len()))
            );
        }
    }
    Ok(())
}
