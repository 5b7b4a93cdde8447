//! Runtime spatial settings, looked up through the service registry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialSettings {
    /// Register spatial functions; types are contributed regardless
    pub enabled: bool,
}

impl Default for SpatialSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
