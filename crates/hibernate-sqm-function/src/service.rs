//! Type-keyed service lookup handed to dialect contributors

use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of engine services, looked up by type
///
/// Contributors hold an `Arc` to it and query it inside each contribution
/// call; nothing is cached between calls, so a service registered before
/// bootstrap is what the contributors see.
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service, returning the one it replaces
    pub fn register<S: Any + Send + Sync>(&self, service: S) -> Option<Arc<S>> {
        self.services
            .write()
            .insert(TypeId::of::<S>(), Arc::new(service))
            .and_then(|previous| previous.downcast::<S>().ok())
    }

    pub fn get<S: Any + Send + Sync>(&self) -> Option<Arc<S>> {
        self.services
            .read()
            .get(&TypeId::of::<S>())
            .cloned()
            .and_then(|service| service.downcast::<S>().ok())
    }

    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.len())
            .finish()
    }
}
