//! Expression nodes

use crate::NodeBuilder;
use hibernate_sqm_function::SqmFunctionDescriptor;
use hibernate_sqm_types::{LiteralValue, SemanticType};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A literal bound to its canonical type and the builder that created it
///
/// Immutable once built; only [`NodeBuilder`] constructs literals, so the
/// type is never absent.
#[derive(Clone, Serialize)]
pub struct SqmLiteral {
    value: LiteralValue,
    #[serde(rename = "type")]
    node_type: Arc<SemanticType>,
    #[serde(skip)]
    node_builder: Arc<NodeBuilder>,
}

impl SqmLiteral {
    pub(crate) fn new(value: LiteralValue, node_type: Arc<SemanticType>, node_builder: Arc<NodeBuilder>) -> Self {
        Self {
            value,
            node_type,
            node_builder,
        }
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    pub fn node_type(&self) -> &Arc<SemanticType> {
        &self.node_type
    }

    pub fn node_builder(&self) -> &Arc<NodeBuilder> {
        &self.node_builder
    }

    pub fn render_sql(&self) -> String {
        self.value.to_sql_literal()
    }
}

impl PartialEq for SqmLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && Arc::ptr_eq(&self.node_type, &other.node_type)
    }
}

impl fmt::Debug for SqmLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqmLiteral")
            .field("value", &self.value)
            .field("node_type", &self.node_type.name())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ParameterName {
    /// `:name`
    Named(String),
    /// `?1`
    Positional(u32),
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, ":{}", name),
            Self::Positional(position) => write!(f, "?{}", position),
        }
    }
}

/// A query parameter with the type it is expected to bind as, if known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqmParameter {
    name: ParameterName,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    anticipated_type: Option<Arc<SemanticType>>,
}

impl SqmParameter {
    pub(crate) fn new(name: ParameterName, anticipated_type: Option<Arc<SemanticType>>) -> Self {
        Self {
            name,
            anticipated_type,
        }
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn anticipated_type(&self) -> Option<&Arc<SemanticType>> {
        self.anticipated_type.as_ref()
    }

    pub fn render_sql(&self) -> String {
        self.name.to_string()
    }
}

/// A call of a registered function
#[derive(Debug, Clone, Serialize)]
pub struct SqmFunctionCall {
    /// Name as written in the query, canonical or alternate
    name: String,
    #[serde(serialize_with = "serialize_descriptor_name", rename = "function")]
    descriptor: Arc<SqmFunctionDescriptor>,
    arguments: Vec<SqmExpression>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    result_type: Option<Arc<SemanticType>>,
}

fn serialize_descriptor_name<S: serde::Serializer>(
    descriptor: &Arc<SqmFunctionDescriptor>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(descriptor.name())
}

impl SqmFunctionCall {
    pub(crate) fn new(
        name: String,
        descriptor: Arc<SqmFunctionDescriptor>,
        arguments: Vec<SqmExpression>,
        result_type: Option<Arc<SemanticType>>,
    ) -> Self {
        Self {
            name,
            descriptor,
            arguments,
            result_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &Arc<SqmFunctionDescriptor> {
        &self.descriptor
    }

    pub fn arguments(&self) -> &[SqmExpression] {
        &self.arguments
    }

    pub fn result_type(&self) -> Option<&Arc<SemanticType>> {
        self.result_type.as_ref()
    }

    /// Render with the descriptor's renderer; the SQL name is the
    /// descriptor's, whichever key the query used
    pub fn render_sql(&self) -> String {
        let arguments: Vec<String> = self.arguments.iter().map(SqmExpression::render_sql).collect();
        self.descriptor.render(&arguments)
    }
}

impl PartialEq for SqmFunctionCall {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor)
            && self.name == other.name
            && self.arguments == other.arguments
            && self.result_type == other.result_type
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SqmExpression {
    Literal(SqmLiteral),
    Parameter(SqmParameter),
    Function(SqmFunctionCall),
}

impl SqmExpression {
    pub fn node_type(&self) -> Option<&Arc<SemanticType>> {
        match self {
            Self::Literal(literal) => Some(literal.node_type()),
            Self::Parameter(parameter) => parameter.anticipated_type(),
            Self::Function(call) => call.result_type(),
        }
    }

    pub fn render_sql(&self) -> String {
        match self {
            Self::Literal(literal) => literal.render_sql(),
            Self::Parameter(parameter) => parameter.render_sql(),
            Self::Function(call) => call.render_sql(),
        }
    }
}

impl From<SqmLiteral> for SqmExpression {
    fn from(literal: SqmLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<SqmParameter> for SqmExpression {
    fn from(parameter: SqmParameter) -> Self {
        Self::Parameter(parameter)
    }
}

impl From<SqmFunctionCall> for SqmExpression {
    fn from(call: SqmFunctionCall) -> Self {
        Self::Function(call)
    }
}
