//! Geometry value type and its MySQL/MariaDB JDBC handler

use hibernate_sqm_types::{JavaTypeKey, JdbcType, SemanticType, SqlTypes};

pub const GEOMETRY_JAVA_TYPE: JavaTypeKey = JavaTypeKey::from_static("org.geolatte.geom.Geometry");

/// Geometry column handler shared by MySQL and MariaDB
pub const MYSQL_GEOMETRY: JdbcType = JdbcType::new(SqlTypes::GEOMETRY, "GEOMETRY", "geometry");

/// The `geometry` basic type
pub fn geometry_type() -> SemanticType {
    SemanticType::new("geometry", GEOMETRY_JAVA_TYPE, MYSQL_GEOMETRY)
}
