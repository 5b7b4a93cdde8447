//! Sinks handed to contributors during bootstrap

use crate::{ServiceRegistry, SqmFunctionRegistry};
use hibernate_sqm_diagnostics::{Result, SqmError};
use hibernate_sqm_types::{JavaTypeKey, SemanticType, TypeConfiguration, try_to_sqm_type};
use std::sync::Arc;

/// Function contribution context
pub trait FunctionContributions {
    fn function_registry(&mut self) -> &mut SqmFunctionRegistry;

    fn type_configuration(&self) -> &TypeConfiguration;

    fn service_registry(&self) -> &Arc<ServiceRegistry>;

    /// Standard type for a Java type; a missing standard type means the
    /// type configuration is inconsistent
    fn standard_type(&self, java_type: &JavaTypeKey) -> Result<Arc<SemanticType>> {
        try_to_sqm_type(Some(java_type), self.type_configuration())?.ok_or_else(|| {
            SqmError::configuration_inconsistency(format!("No standard type for {}", java_type))
        })
    }
}

/// The contribution context used by engine bootstrap
pub struct BootstrapFunctionContributions<'a> {
    function_registry: &'a mut SqmFunctionRegistry,
    type_configuration: &'a TypeConfiguration,
    service_registry: &'a Arc<ServiceRegistry>,
}

impl<'a> BootstrapFunctionContributions<'a> {
    pub fn new(
        function_registry: &'a mut SqmFunctionRegistry,
        type_configuration: &'a TypeConfiguration,
        service_registry: &'a Arc<ServiceRegistry>,
    ) -> Self {
        Self {
            function_registry,
            type_configuration,
            service_registry,
        }
    }
}

impl FunctionContributions for BootstrapFunctionContributions<'_> {
    fn function_registry(&mut self) -> &mut SqmFunctionRegistry {
        self.function_registry
    }

    fn type_configuration(&self) -> &TypeConfiguration {
        self.type_configuration
    }

    fn service_registry(&self) -> &Arc<ServiceRegistry> {
        self.service_registry
    }
}
