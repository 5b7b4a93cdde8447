//! Spatial support for SQM
//!
//! Provides the geometry type, the catalogue of spatial functions common to
//! all spatial dialects, and the MariaDB dialect contributor.

pub mod common;
pub mod geometry;
pub mod mariadb;
pub mod settings;

pub use common::{BaseSpatialSqmFunctionDescriptors, CommonSpatialFunction, SpatialReturnType};
pub use geometry::{GEOMETRY_JAVA_TYPE, MYSQL_GEOMETRY, geometry_type};
pub use mariadb::{MariaDBDialectContributor, MariaDBSqmFunctionDescriptors};
pub use settings::SpatialSettings;
