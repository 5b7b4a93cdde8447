//! Engine bootstrap: run contributors, then freeze the registries

use crate::{EngineConfig, SessionFactory};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_function::{
    BootstrapFunctionContributions, ContributionObserver, ContributorImplementor, LogObserver, ServiceRegistry,
    SqmFunctionRegistry,
};
use hibernate_sqm_spatial::SpatialSettings;
use hibernate_sqm_types::TypeConfiguration;
use std::sync::Arc;

/// Builds a [`SessionFactory`]
///
/// Bootstrap runs on one thread and owns the mutable registries; the built
/// factory only hands them out behind `Arc`s.
pub struct SessionFactoryBuilder {
    config: EngineConfig,
    observer: Arc<dyn ContributionObserver>,
    service_registry: Arc<ServiceRegistry>,
    extra_contributors: Vec<Box<dyn ContributorImplementor>>,
}

impl SessionFactoryBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            observer: Arc::new(LogObserver),
            service_registry: Arc::new(ServiceRegistry::new()),
            extra_contributors: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ContributionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run an additional contributor after the dialect's own
    pub fn with_contributor(mut self, contributor: impl ContributorImplementor + 'static) -> Self {
        self.extra_contributors.push(Box::new(contributor));
        self
    }

    /// Services visible to contributors
    pub fn service_registry(&self) -> &Arc<ServiceRegistry> {
        &self.service_registry
    }

    pub fn build(self) -> Result<SessionFactory> {
        let Self {
            config,
            observer,
            service_registry,
            extra_contributors,
        } = self;

        service_registry.register(SpatialSettings {
            enabled: config.spatial_enabled,
        });

        let mut contributors = config.dialect.contributors(&service_registry, &observer);
        contributors.extend(extra_contributors);

        let mut type_configuration = TypeConfiguration::standard();
        for contributor in &contributors {
            contributor.contribute_java_types(&mut type_configuration);
        }
        for contributor in &contributors {
            contributor.contribute_jdbc_types(&mut type_configuration);
        }

        let mut function_registry = SqmFunctionRegistry::with_policy(config.duplicate_function_policy);
        for contributor in &contributors {
            let mut contributions =
                BootstrapFunctionContributions::new(&mut function_registry, &type_configuration, &service_registry);
            contributor
                .contribute_functions(&mut contributions)
                .map_err(|e| e.with_contributor(contributor.name()))?;
        }

        log::info!(
            "Bootstrapped {} dialect: {} basic types, {} functions",
            config.dialect,
            type_configuration.basic_types().count(),
            function_registry.len()
        );

        SessionFactory::new(
            config,
            Arc::new(type_configuration),
            Arc::new(function_registry),
            service_registry,
        )
    }
}
