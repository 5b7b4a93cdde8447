//! Literal command implementation

use super::output::{self, OutputFormat};
use super::EngineOptions;
use anyhow::Result;
use hibernate_sqm_tree::helper::literal_from;
use hibernate_sqm_tree::SqmExpression;
use hibernate_sqm_types::LiteralKind;

/// Configuration for the literal command
pub struct LiteralConfig {
    pub engine: EngineOptions,
    pub kind: LiteralKind,
    pub text: String,
    pub format: OutputFormat,
}

/// Parse literal text and type it with the engine's canonical type
pub fn literal(config: LiteralConfig) -> Result<()> {
    let factory = config.engine.build()?;
    let literal = literal_from(config.kind, &config.text, &factory.creation_state())?;

    match config.format {
        OutputFormat::Json => println!("{}", output::format_json(&SqmExpression::from(literal))?),
        OutputFormat::Pretty => {
            println!("{}", output::format_field("kind", config.kind));
            println!("{}", output::format_field("type", literal.node_type()));
            println!("{}", output::format_field("sql", literal.render_sql()));
        }
    }
    Ok(())
}
