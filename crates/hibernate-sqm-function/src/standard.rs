//! ANSI functions every dialect provides

use crate::{
    ArgumentsValidator, BaseSqmFunctionDescriptors, ContributionObserver, ContributorImplementor, FunctionContributions,
    FunctionKey, KeyedSqmFunctionDescriptors, LogObserver, ReturnTypeResolver, ServiceRegistry, SqmFunctionDescriptor,
    register_keyed_descriptors,
};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_types::{JavaTypeKey, TypeContributions};
use indexmap::IndexMap;
use std::sync::Arc;

/// Standard function descriptors, typed against the contribution's type
/// configuration
#[derive(Debug, Clone)]
pub struct StandardSqmFunctionDescriptors {
    base: BaseSqmFunctionDescriptors,
}

impl StandardSqmFunctionDescriptors {
    pub fn new(contributions: &dyn FunctionContributions) -> Result<Self> {
        use ArgumentsValidator::{AtLeast, Exactly};
        use ReturnTypeResolver::{ArgumentType, Fixed};

        let double = contributions.standard_type(&JavaTypeKey::DOUBLE)?;
        let string = contributions.standard_type(&JavaTypeKey::STRING)?;
        let integer = contributions.standard_type(&JavaTypeKey::INTEGER)?;

        let mut base = BaseSqmFunctionDescriptors::new();
        base.insert(FunctionKey::new("abs"), SqmFunctionDescriptor::named("abs", Exactly(1), ArgumentType(0)));
        base.insert(
            FunctionKey::new("mod"),
            SqmFunctionDescriptor::pattern("mod", "mod(?1, ?2)", ArgumentType(0))?,
        );
        base.insert(FunctionKey::new("sqrt"), SqmFunctionDescriptor::named("sqrt", Exactly(1), Fixed(double)));
        base.insert(
            FunctionKey::apply("ceiling", "ceil"),
            SqmFunctionDescriptor::named("ceiling", Exactly(1), ArgumentType(0)),
        );
        base.insert(FunctionKey::new("floor"), SqmFunctionDescriptor::named("floor", Exactly(1), ArgumentType(0)));
        base.insert(
            FunctionKey::apply("upper", "ucase"),
            SqmFunctionDescriptor::named("upper", Exactly(1), Fixed(Arc::clone(&string))),
        );
        base.insert(
            FunctionKey::apply("lower", "lcase"),
            SqmFunctionDescriptor::named("lower", Exactly(1), Fixed(Arc::clone(&string))),
        );
        base.insert(
            FunctionKey::apply("length", "char_length"),
            SqmFunctionDescriptor::named("length", Exactly(1), Fixed(integer)),
        );
        base.insert(FunctionKey::new("concat"), SqmFunctionDescriptor::named("concat", AtLeast(1), Fixed(string)));
        base.insert(
            FunctionKey::new("coalesce"),
            SqmFunctionDescriptor::named("coalesce", AtLeast(1), ArgumentType(0)),
        );
        base.insert(
            FunctionKey::new("current_date"),
            SqmFunctionDescriptor::no_paren("current_date", contributions.standard_type(&JavaTypeKey::SQL_DATE)?),
        );
        base.insert(
            FunctionKey::new("current_time"),
            SqmFunctionDescriptor::no_paren("current_time", contributions.standard_type(&JavaTypeKey::SQL_TIME)?),
        );
        base.insert(
            FunctionKey::new("current_timestamp"),
            SqmFunctionDescriptor::no_paren(
                "current_timestamp",
                contributions.standard_type(&JavaTypeKey::SQL_TIMESTAMP)?,
            ),
        );

        Ok(Self { base })
    }
}

impl KeyedSqmFunctionDescriptors for StandardSqmFunctionDescriptors {
    fn as_map(&self) -> &IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>> {
        self.base.as_map()
    }
}

/// Contributor of the standard functions, run before any dialect contributor
#[derive(Debug)]
pub struct StandardFunctionContributor {
    service_registry: Arc<ServiceRegistry>,
    observer: Arc<dyn ContributionObserver>,
}

impl StandardFunctionContributor {
    pub fn new(service_registry: Arc<ServiceRegistry>) -> Self {
        Self {
            service_registry,
            observer: Arc::new(LogObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ContributionObserver>) -> Self {
        self.observer = observer;
        self
    }
}

impl ContributorImplementor for StandardFunctionContributor {
    fn name(&self) -> &str {
        "StandardFunctionContributor"
    }

    fn contribute_jdbc_types(&self, _type_contributions: &mut dyn TypeContributions) {
        // The standard descriptors ship with the type configuration itself
        self.observer.type_contributions(self.name());
    }

    fn contribute_functions(&self, function_contributions: &mut dyn FunctionContributions) -> Result<()> {
        self.observer.function_contributions(self.name());
        let descriptors = StandardSqmFunctionDescriptors::new(&*function_contributions)?;
        let registry = function_contributions.function_registry();
        register_keyed_descriptors(registry, &descriptors, self.observer.as_ref())?;
        registry.register_alternate_key("character_length", "length")?;
        Ok(())
    }

    fn service_registry(&self) -> &Arc<ServiceRegistry> {
        &self.service_registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BootstrapFunctionContributions, RecordingObserver, SqmFunctionRegistry};
    use hibernate_sqm_types::TypeConfiguration;
    use pretty_assertions::assert_eq;

    fn contribute() -> (SqmFunctionRegistry, Arc<RecordingObserver>) {
        let types = TypeConfiguration::standard();
        let services = Arc::new(ServiceRegistry::new());
        let observer = Arc::new(RecordingObserver::new());
        let contributor = StandardFunctionContributor::new(Arc::clone(&services)).with_observer(observer.clone());

        let mut registry = SqmFunctionRegistry::new();
        let mut contributions = BootstrapFunctionContributions::new(&mut registry, &types, &services);
        contributor.contribute_functions(&mut contributions).unwrap();
        (registry, observer)
    }

    #[test]
    fn test_standard_functions_registered() {
        let (registry, observer) = contribute();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.alternate_keys_for("length"), vec!["char_length", "character_length"]);
        assert_eq!(observer.registered_functions().len(), 13);
    }

    #[test]
    fn test_no_paren_rendering() {
        let (registry, _) = contribute();
        let current_date = registry.resolve("current_date").unwrap();
        assert_eq!(current_date.render(&[]), "current_date");
        assert_eq!(current_date.signature(), "current_date(0) -> date");
    }

    #[test]
    fn test_missing_standard_type_is_inconsistency() {
        let types = TypeConfiguration::empty();
        let services = Arc::new(ServiceRegistry::new());
        let mut registry = SqmFunctionRegistry::new();
        let contributions = BootstrapFunctionContributions::new(&mut registry, &types, &services);

        let err = StandardSqmFunctionDescriptors::new(&contributions).unwrap_err();
        assert_eq!(err.code(), hibernate_sqm_diagnostics::SQM0402);
    }
}
