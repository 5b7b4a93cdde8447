//! The query node builder

use crate::{ParameterName, SqmExpression, SqmFunctionCall, SqmLiteral, SqmParameter};
use hibernate_sqm_diagnostics::{Result, SqmError};
use hibernate_sqm_function::SqmFunctionRegistry;
use hibernate_sqm_types::{
    BindableType, JavaTypeKey, LiteralValue, SemanticType, TypeConfiguration, TypeResolutionContext, try_to_sqm_type,
};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Builds typed expression nodes against one engine's registries
///
/// Holds shared references to the frozen type configuration and function
/// registry, never copies.
pub struct NodeBuilder {
    type_configuration: Arc<TypeConfiguration>,
    function_registry: Arc<SqmFunctionRegistry>,
    integer_type: Arc<SemanticType>,
}

impl NodeBuilder {
    pub fn new(
        type_configuration: Arc<TypeConfiguration>,
        function_registry: Arc<SqmFunctionRegistry>,
    ) -> Result<Arc<Self>> {
        let integer_type = standard_type(&type_configuration, &JavaTypeKey::INTEGER)?;
        Ok(Arc::new(Self {
            type_configuration,
            function_registry,
            integer_type,
        }))
    }

    pub fn function_registry(&self) -> &SqmFunctionRegistry {
        &self.function_registry
    }

    /// The standard integer type, cached at construction
    pub fn integer_type(&self) -> &Arc<SemanticType> {
        &self.integer_type
    }

    /// A literal typed with the standard type of its Java type
    pub fn literal(self: &Arc<Self>, value: LiteralValue) -> Result<SqmLiteral> {
        if let LiteralValue::Integer(value) = value {
            return Ok(self.integer_literal(value));
        }
        let node_type = standard_type(&self.type_configuration, &value.java_type())?;
        Ok(SqmLiteral::new(value, node_type, Arc::clone(self)))
    }

    pub fn integer_literal(self: &Arc<Self>, value: i32) -> SqmLiteral {
        SqmLiteral::new(
            LiteralValue::Integer(value),
            Arc::clone(&self.integer_type),
            Arc::clone(self),
        )
    }

    pub fn parameter(&self, name: ParameterName, anticipated: Option<&dyn BindableType>) -> Result<SqmParameter> {
        let anticipated_type = try_to_sqm_type(anticipated, self)?;
        Ok(SqmParameter::new(name, anticipated_type))
    }

    /// A call of a registered function, by canonical name or alternate key
    pub fn function(&self, name: &str, arguments: Vec<SqmExpression>) -> Result<SqmFunctionCall> {
        let descriptor = self.function_registry.resolve(name)?;
        descriptor.validate_argument_count(arguments.len())?;

        let argument_types: SmallVec<[Option<Arc<SemanticType>>; 4]> =
            arguments.iter().map(|argument| argument.node_type().cloned()).collect();
        let result_type = descriptor.resolve_return_type(&argument_types);

        Ok(SqmFunctionCall::new(name.to_string(), descriptor, arguments, result_type))
    }
}

fn standard_type(type_configuration: &TypeConfiguration, java_type: &JavaTypeKey) -> Result<Arc<SemanticType>> {
    type_configuration
        .standard_basic_type_for_java_type(java_type)
        .ok_or_else(|| {
            SqmError::configuration_inconsistency(format!("No standard basic type registered for {}", java_type))
        })
}

impl TypeResolutionContext for NodeBuilder {
    fn type_configuration(&self) -> &TypeConfiguration {
        &self.type_configuration
    }
}

impl fmt::Debug for NodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBuilder")
            .field("basic_types", &self.type_configuration.basic_types().count())
            .field("functions", &self.function_registry.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibernate_sqm_diagnostics::{SQM0101, SQM0111, SQM0402};
    use hibernate_sqm_function::{ArgumentsValidator, ReturnTypeResolver, SqmFunctionDescriptor};
    use hibernate_sqm_types::TypeName;
    use pretty_assertions::assert_eq;

    fn builder() -> Arc<NodeBuilder> {
        let mut registry = SqmFunctionRegistry::new();
        registry
            .register(
                "abs",
                Arc::new(SqmFunctionDescriptor::named(
                    "abs",
                    ArgumentsValidator::Exactly(1),
                    ReturnTypeResolver::ArgumentType(0),
                )),
            )
            .unwrap();
        NodeBuilder::new(Arc::new(TypeConfiguration::standard()), Arc::new(registry)).unwrap()
    }

    #[test]
    fn test_integer_literal_uses_cached_type() {
        let builder = builder();
        let literal = builder.integer_literal(42);
        assert!(Arc::ptr_eq(literal.node_type(), builder.integer_type()));
        assert!(Arc::ptr_eq(literal.node_builder(), &builder));
        assert_eq!(literal.render_sql(), "42");
    }

    #[test]
    fn test_literal_converges_on_integer_path() {
        let builder = builder();
        let via_value = builder.literal(LiteralValue::Integer(7)).unwrap();
        assert_eq!(via_value, builder.integer_literal(7));
    }

    #[test]
    fn test_string_literal() {
        let builder = builder();
        let literal = builder.literal(LiteralValue::from("it's")).unwrap();
        assert_eq!(literal.node_type().name(), "string");
        assert_eq!(literal.render_sql(), "'it''s'");
    }

    #[test]
    fn test_function_result_type_follows_argument() {
        let builder = builder();
        let call = builder
            .function("abs", vec![builder.integer_literal(-3).into()])
            .unwrap();
        assert!(Arc::ptr_eq(call.result_type().unwrap(), builder.integer_type()));
        assert_eq!(call.render_sql(), "abs(-3)");
    }

    #[test]
    fn test_function_errors() {
        let builder = builder();
        assert_eq!(builder.function("ABS", vec![]).unwrap_err().code(), SQM0101);
        assert_eq!(builder.function("abs", vec![]).unwrap_err().code(), SQM0111);
    }

    #[test]
    fn test_parameter_types() {
        let builder = builder();
        let untyped = builder.parameter(ParameterName::Positional(1), None).unwrap();
        assert!(untyped.anticipated_type().is_none());
        assert_eq!(untyped.render_sql(), "?1");

        let typed = builder
            .parameter(ParameterName::Named("since".into()), Some(&TypeName::new("timestamp")))
            .unwrap();
        assert_eq!(typed.anticipated_type().unwrap().name(), "timestamp");
        assert_eq!(typed.render_sql(), ":since");

        let err = builder
            .parameter(ParameterName::Positional(2), Some(&TypeName::new("geometry")))
            .unwrap_err();
        assert_eq!(err.code(), SQM0402);
    }

    #[test]
    fn test_builder_requires_integer_type() {
        let err = NodeBuilder::new(Arc::new(TypeConfiguration::empty()), Arc::new(SqmFunctionRegistry::new()))
            .unwrap_err();
        assert_eq!(err.code(), SQM0402);
    }
}
