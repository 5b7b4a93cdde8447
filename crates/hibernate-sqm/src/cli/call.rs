//! Function call compilation command

use super::output::{self, OutputFormat};
use super::EngineOptions;
use anyhow::Result;
use hibernate_sqm_diagnostics::{ErrorBuilder, SqmError, SQM0004, SQM0102};
use hibernate_sqm_tree::helper::{integer_literal_from, literal_from, parameter};
use hibernate_sqm_tree::{ParameterName, SqmCreationContext, SqmExpression};
use hibernate_sqm_types::{BindableType, LiteralKind, TypeName, TypeResolutionContext};

/// Configuration for the call command
pub struct CallConfig {
    pub engine: EngineOptions,
    pub function: String,
    /// Argument expressions, see [`argument`]
    pub arguments: Vec<String>,
    pub format: OutputFormat,
}

/// Build one argument expression
///
/// - `?1` or `?1:geometry`: positional parameter, optionally with an anticipated type name
/// - `:name` or `:name:geometry`: named parameter
/// - `kind=text`: literal of the given kind (`date=2023-05-01`)
/// - anything else: integer literal
pub fn argument<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmExpression, SqmError> {
    if let Some(rest) = text.strip_prefix('?') {
        let (position, anticipated) = split_type(rest);
        let position = position.parse::<u32>().map_err(|e| invalid_argument(text, e.to_string()))?;
        return typed_parameter(ParameterName::Positional(position), anticipated, context);
    }
    if let Some(rest) = text.strip_prefix(':') {
        let (name, anticipated) = split_type(rest);
        return typed_parameter(ParameterName::Named(name.to_string()), anticipated, context);
    }
    if let Some((kind, literal)) = text.split_once('=') {
        let kind = kind.parse::<LiteralKind>().map_err(|e| invalid_argument(text, e))?;
        return Ok(literal_from(kind, literal, context)?.into());
    }
    Ok(integer_literal_from(text, context)?.into())
}

fn split_type(text: &str) -> (&str, Option<TypeName>) {
    match text.split_once(':') {
        Some((name, type_name)) => (name, Some(TypeName::new(type_name))),
        None => (text, None),
    }
}

fn typed_parameter<C: SqmCreationContext + ?Sized>(
    name: ParameterName,
    anticipated: Option<TypeName>,
    context: &C,
) -> Result<SqmExpression, SqmError> {
    if let Some(type_name) = &anticipated
        && context.type_configuration().basic_type_by_name(&type_name.0).is_none()
    {
        return Err(SqmError::semantic(SQM0102, format!("Unknown type '{}'", type_name)));
    }
    let anticipated = anticipated.as_ref().map(|t| t as &dyn BindableType);
    Ok(parameter(name, anticipated, context)?.into())
}

fn invalid_argument(text: &str, detail: impl Into<String>) -> SqmError {
    ErrorBuilder::new(SQM0004, format!("Invalid argument '{}'", text))
        .context(detail)
        .parse(text)
}

pub fn call(config: CallConfig) -> Result<()> {
    let factory = config.engine.build()?;
    let state = factory.creation_state();

    let arguments = config
        .arguments
        .iter()
        .map(|text| argument(text, &state))
        .collect::<Result<Vec<_>, _>>()?;
    let call = state.node_builder().function(&config.function, arguments)?;

    match config.format {
        OutputFormat::Json => println!("{}", output::format_json(&SqmExpression::Function(call))?),
        OutputFormat::Pretty => {
            println!("{}", output::format_field("sql", call.render_sql()));
            match call.result_type() {
                Some(result_type) => println!("{}", output::format_field("type", result_type)),
                None => println!("{}", output::format_field("type", "(unknown)")),
            }
        }
    }
    Ok(())
}
