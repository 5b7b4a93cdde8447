//! Descriptor sets keyed by canonical name and optional alternate key

use crate::SqmFunctionDescriptor;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Registry key of a contributed function
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionKey {
    name: String,
    alt_name: Option<String>,
}

impl FunctionKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alt_name: None,
        }
    }

    /// Key with an alternate name, e.g. `("ST_Distance", "distance")`
    pub fn apply(name: impl Into<String>, alt_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alt_name: Some(alt_name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alt_name(&self) -> Option<&str> {
        self.alt_name.as_deref()
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alt_name {
            Some(alt) => write!(f, "{} ({})", self.name, alt),
            None => f.write_str(&self.name),
        }
    }
}

/// A dialect's set of function descriptors, in registration order
pub trait KeyedSqmFunctionDescriptors {
    fn as_map(&self) -> &IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>>;
}

/// Ordered descriptor map that dialect descriptor sets build on
#[derive(Debug, Clone, Default)]
pub struct BaseSqmFunctionDescriptors {
    map: IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>>,
}

impl BaseSqmFunctionDescriptors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the descriptor for a key
    pub fn insert(&mut self, key: FunctionKey, descriptor: SqmFunctionDescriptor) {
        self.map.insert(key, Arc::new(descriptor));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyedSqmFunctionDescriptors for BaseSqmFunctionDescriptors {
    fn as_map(&self) -> &IndexMap<FunctionKey, Arc<SqmFunctionDescriptor>> {
        &self.map
    }
}
