//! MariaDB spatial dialect contributions

use crate::{BaseSpatialSqmFunctionDescriptors, MYSQL_GEOMETRY, SpatialSettings, geometry_type};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_function::{
    ContributionObserver, ContributorImplementor, FunctionContributions, FunctionKey, KeyedSqmFunctionDescriptors,
    LogObserver, ServiceRegistry, SqmFunctionDescriptor, register_keyed_descriptors,
};
use hibernate_sqm_types::TypeContributions;
use indexmap::IndexMap;
use std::sync::Arc;

/// Spatial function descriptors supported by MariaDB
#[derive(Debug, Clone)]
pub struct MariaDBSqmFunctionDescriptors {
    common: BaseSpatialSqmFunctionDescriptors,
}

impl MariaDBSqmFunctionDescriptors {
    pub fn new(contributions: &dyn FunctionContributions) -> Result<Self> {
        Ok(Self {
            common: BaseSpatialSqmFunctionDescriptors::new(contributions)?,
        })
    }
}

impl KeyedSqmFunctionDescriptors for MariaDBSqmFunctionDescriptors {
    fn as_map(&self) -> &IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>> {
        self.common.as_map()
    }
}

/// Contributes the geometry type and the spatial functions for MariaDB
#[derive(Debug)]
pub struct MariaDBDialectContributor {
    service_registry: Arc<ServiceRegistry>,
    observer: Arc<dyn ContributionObserver>,
}

impl MariaDBDialectContributor {
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

    fn spatial_enabled(&self) -> bool {
        self.service_registry
            .get::<SpatialSettings>()
            .is_none_or(|settings| settings.enabled)
    }
}

impl ContributorImplementor for MariaDBDialectContributor {
    fn name(&self) -> &str {
        "MariaDBDialectContributor"
    }

    fn contribute_java_types(&self, type_contributions: &mut dyn TypeContributions) {
        type_contributions.contribute_type(geometry_type());
    }

    fn contribute_jdbc_types(&self, type_contributions: &mut dyn TypeContributions) {
        self.observer.type_contributions(self.name());
        type_contributions.contribute_jdbc_type(MYSQL_GEOMETRY);
    }

    fn contribute_functions(&self, function_contributions: &mut dyn FunctionContributions) -> Result<()> {
        self.observer.function_contributions(self.name());
        if !self.spatial_enabled() {
            log::info!("Spatial functions disabled, skipping {}", self.name());
            return Ok(());
        }

        let descriptors = MariaDBSqmFunctionDescriptors::new(&*function_contributions)?;
        register_keyed_descriptors(
            function_contributions.function_registry(),
            &descriptors,
            self.observer.as_ref(),
        )
    }

    fn service_registry(&self) -> &Arc<ServiceRegistry> {
        &self.service_registry
    }
}
