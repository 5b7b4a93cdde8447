//! CLI functionality for the `sqm` tool
//!
//! This module contains the command implementations:
//! - Literal parsing and typing
//! - Function catalogue listing
//! - Type resolution
//! - Function call compilation
//! - Output formatting

pub mod call;
pub mod functions;
pub mod literal;
pub mod output;
pub mod resolve;

use crate::{DialectName, EngineConfig, SessionFactory, SessionFactoryBuilder};
use anyhow::{Context, Result};
use hibernate_sqm_function::ContributionObserver;
use std::path::PathBuf;
use std::sync::Arc;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Overrides the dialect from the configuration file
    pub dialect: Option<DialectName>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl EngineOptions {
    /// Bootstrap an engine from the configuration file and overrides
    pub fn build(&self) -> Result<SessionFactory> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_path(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(dialect) = self.dialect {
            config.dialect = dialect;
        }

        let mut builder = SessionFactoryBuilder::new(config);
        if self.verbose {
            let observer: Arc<dyn ContributionObserver> = Arc::new(output::StderrObserver);
            builder = builder.with_observer(observer);
        }
        Ok(builder.build()?)
    }
}
