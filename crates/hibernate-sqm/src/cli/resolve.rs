//! Type resolution command

use super::output::{self, OutputFormat};
use super::EngineOptions;
use anyhow::Result;
use hibernate_sqm_diagnostics::{SqmError, SQM0102};
use hibernate_sqm_types::{to_sqm_type, JavaTypeKey, SemanticType, TypeName, TypeResolutionContext};
use std::sync::Arc;

/// Configuration for the resolve command
pub struct ResolveConfig {
    pub engine: EngineOptions,
    /// A registration name (`timestamp`) or Java class name (`java.sql.Date`, `int`)
    pub name: String,
    pub format: OutputFormat,
}

/// Resolve a nominal type by registration name first, then by class name
pub fn lookup<C: TypeResolutionContext + ?Sized>(name: &str, context: &C) -> Result<Arc<SemanticType>, SqmError> {
    let types = context.type_configuration();
    if types.basic_type_by_name(name).is_some() {
        return to_sqm_type(Some(&TypeName::new(name)), context)
            .ok_or_else(|| SqmError::semantic(SQM0102, format!("Unknown type '{}'", name)));
    }

    let java_type = JavaTypeKey::from_class_name(name);
    match types.standard_basic_type_for_java_type(&java_type) {
        Some(_) => to_sqm_type(Some(&java_type), context)
            .ok_or_else(|| SqmError::semantic(SQM0102, format!("Unknown type '{}'", name))),
        None => Err(SqmError::semantic(SQM0102, format!("Unknown type '{}'", name))),
    }
}

pub fn resolve(config: ResolveConfig) -> Result<()> {
    let factory = config.engine.build()?;
    let resolved = lookup(&config.name, &factory.creation_state())?;

    match config.format {
        OutputFormat::Json => println!("{}", output::format_json(resolved.as_ref())?),
        OutputFormat::Pretty => {
            println!("{}", output::format_field("name", resolved.name()));
            println!("{}", output::format_field("java", resolved.java_type()));
            println!("{}", output::format_field("jdbc", resolved.jdbc_type()));
            if let Some(kind) = resolved.literal_kind() {
                println!("{}", output::format_field("literal", kind.pattern()));
            }
        }
    }
    Ok(())
}
