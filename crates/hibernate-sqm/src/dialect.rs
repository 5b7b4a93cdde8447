//! Dialect selection

use hibernate_sqm_function::{ContributionObserver, ContributorImplementor, ServiceRegistry, StandardFunctionContributor};
use hibernate_sqm_spatial::MariaDBDialectContributor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DialectName {
    /// Standard functions only
    #[default]
    Generic,
    #[cfg_attr(feature = "cli", value(name = "mariadb"))]
    MariaDB,
}

impl DialectName {
    /// Contributors for this dialect, in bootstrap order
    pub fn contributors(
        &self,
        service_registry: &Arc<ServiceRegistry>,
        observer: &Arc<dyn ContributionObserver>,
    ) -> Vec<Box<dyn ContributorImplementor>> {
        let mut contributors: Vec<Box<dyn ContributorImplementor>> = vec![Box::new(
            StandardFunctionContributor::new(Arc::clone(service_registry)).with_observer(Arc::clone(observer)),
        )];
        if let Self::MariaDB = self {
            contributors.push(Box::new(
                MariaDBDialectContributor::new(Arc::clone(service_registry)).with_observer(Arc::clone(observer)),
            ));
        }
        contributors
    }
}

impl fmt::Display for DialectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
            Self::MariaDB => f.write_str("mariadb"),
        }
    }
}

impl FromStr for DialectName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "mariadb" => Ok(Self::MariaDB),
            other => Err(format!("unknown dialect '{}'", other)),
        }
    }
}
