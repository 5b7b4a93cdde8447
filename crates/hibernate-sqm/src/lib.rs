//! Typed SQM expression core for Rust
//!
//! This crate ties the workspace together:
//! - Engine configuration and dialect selection
//! - Bootstrap: dialect contributors populate the type configuration and
//!   function registry, which are then frozen
//! - The compilation contexts ([`SessionFactory`], [`QueryEngine`],
//!   [`SqmCreationState`]) queries are built against
//!
//! # Example
//!
//! ```ignore
//! use hibernate_sqm::{DialectName, EngineConfig, SessionFactoryBuilder};
//!
//! let factory = SessionFactoryBuilder::new(EngineConfig::for_dialect(DialectName::MariaDB)).build()?;
//! let state = factory.creation_state();
//! let literal = hibernate_sqm::tree::helper::date_literal_from("2023-05-01", &state)?;
//! ```

// Re-export all public APIs from internal crates
pub use hibernate_sqm_diagnostics as diagnostics;
pub use hibernate_sqm_function as function;
pub use hibernate_sqm_parser as parser;
pub use hibernate_sqm_spatial as spatial;
pub use hibernate_sqm_tree as tree;
pub use hibernate_sqm_types as types;

pub mod bootstrap;
pub mod config;
pub mod dialect;
pub mod engine;

// Convenience re-exports
pub use bootstrap::SessionFactoryBuilder;
pub use config::EngineConfig;
pub use dialect::DialectName;
pub use engine::{QueryEngine, SessionFactory, SqmCreationState};
pub use hibernate_sqm_diagnostics::{Result, SqmError};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
