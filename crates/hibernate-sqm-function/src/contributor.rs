//! The contract dialect contributors implement

use crate::{ContributionObserver, FunctionContributions, KeyedSqmFunctionDescriptors, ServiceRegistry, SqmFunctionRegistry};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_types::TypeContributions;
use std::sync::Arc;

/// A dialect-specific contributor of types and functions
///
/// Bootstrap calls the three contribution steps in order: Java types, JDBC
/// types, then functions.
pub trait ContributorImplementor: Send + Sync {
    /// Name used in log messages and error reports
    fn name(&self) -> &str;

    fn contribute_java_types(&self, _type_contributions: &mut dyn TypeContributions) {}

    fn contribute_jdbc_types(&self, type_contributions: &mut dyn TypeContributions);

    fn contribute_functions(&self, function_contributions: &mut dyn FunctionContributions) -> Result<()>;

    fn service_registry(&self) -> &Arc<ServiceRegistry>;
}

/// Register every descriptor by canonical name, then its alternate key
pub fn register_keyed_descriptors(
    registry: &mut SqmFunctionRegistry,
    descriptors: &dyn KeyedSqmFunctionDescriptors,
    observer: &dyn ContributionObserver,
) -> Result<()> {
    for (key, descriptor) in descriptors.as_map() {
        registry.register(key.name(), Arc::clone(descriptor))?;
        if let Some(alt_name) = key.alt_name() {
            registry.register_alternate_key(alt_name, key.name())?;
        }
        observer.function_registered(key.name(), key.alt_name());
    }
    Ok(())
}
