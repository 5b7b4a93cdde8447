//! Function registry: canonical names and alternate keys

use crate::SqmFunctionDescriptor;
use hibernate_sqm_diagnostics::{Result, SqmError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// What to do when a canonical name is registered twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with a duplicate registration error
    #[default]
    Reject,
    /// Last registration wins
    Replace,
}

/// Registry mapping case-sensitive function names to descriptors
///
/// Alternate keys map to a canonical name, so lookup by either key yields the
/// same `Arc`. Populated during bootstrap, read-only afterwards.
#[derive(Debug, Default)]
pub struct SqmFunctionRegistry {
    functions: HashMap<String, Arc<SqmFunctionDescriptor>>,
    alternate_keys: HashMap<String, String>,
    policy: DuplicatePolicy,
}

impl SqmFunctionRegistry {
    /// Create an empty registry that rejects duplicates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Register a descriptor under its canonical name
    pub fn register(&mut self, name: impl Into<String>, descriptor: Arc<SqmFunctionDescriptor>) -> Result<()> {
        let name = name.into();

        if self.alternate_keys.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => return Err(SqmError::duplicate_registration(&name)),
                DuplicatePolicy::Replace => {
                    log::debug!("alternate key '{}' replaced by a canonical registration", name);
                    self.alternate_keys.remove(&name);
                }
            }
        }

        if self.functions.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => return Err(SqmError::duplicate_registration(&name)),
                DuplicatePolicy::Replace => log::debug!("function '{}' re-registered, replacing previous descriptor", name),
            }
        }

        self.functions.insert(name, descriptor);
        Ok(())
    }

    /// Make `alternate` resolve to the function registered as `canonical`
    ///
    /// The canonical name must already be registered. Re-registering the
    /// same mapping is a no-op; an alternate key can never shadow a canonical
    /// name.
    pub fn register_alternate_key(&mut self, alternate: impl Into<String>, canonical: &str) -> Result<()> {
        let alternate = alternate.into();

        if !self.functions.contains_key(canonical) {
            return Err(SqmError::dangling_alternate_key(&alternate, canonical));
        }
        if self.functions.contains_key(&alternate) {
            return Err(SqmError::duplicate_registration(&alternate));
        }

        match self.alternate_keys.get(&alternate) {
            Some(existing) if existing == canonical => return Ok(()),
            Some(existing) => match self.policy {
                DuplicatePolicy::Reject => return Err(SqmError::duplicate_registration(&alternate)),
                DuplicatePolicy::Replace => {
                    log::debug!("alternate key '{}' re-pointed from '{}' to '{}'", alternate, existing, canonical)
                }
            },
            None => {}
        }

        self.alternate_keys.insert(alternate, canonical.to_string());
        Ok(())
    }

    /// Look up by canonical name or alternate key
    pub fn find_function_descriptor(&self, name: &str) -> Option<Arc<SqmFunctionDescriptor>> {
        self.canonical_name(name)
            .and_then(|canonical| self.functions.get(canonical))
            .cloned()
    }

    /// Look up by canonical name or alternate key, failing for unknown names
    pub fn resolve(&self, name: &str) -> Result<Arc<SqmFunctionDescriptor>> {
        self.find_function_descriptor(name)
            .ok_or_else(|| SqmError::unknown_function(name))
    }

    /// Canonical name a key resolves to
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.functions.contains_key(name) {
            Some(name)
        } else {
            self.alternate_keys.get(name).map(String::as_str)
        }
    }

    /// Alternate keys pointing at a canonical name, sorted
    pub fn alternate_keys_for(&self, canonical: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .alternate_keys
            .iter()
            .filter(|(_, target)| target.as_str() == canonical)
            .map(|(alternate, _)| alternate.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn contains(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// Canonical registrations, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<SqmFunctionDescriptor>)> {
        let mut entries: Vec<_> = self
            .functions
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Number of canonical registrations
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgumentsValidator, ReturnTypeResolver};
    use hibernate_sqm_diagnostics::{SQM0101, SQM0300, SQM0301};
    use pretty_assertions::assert_eq;

    fn descriptor(name: &str) -> Arc<SqmFunctionDescriptor> {
        Arc::new(SqmFunctionDescriptor::named(
            name,
            ArgumentsValidator::Exactly(1),
            ReturnTypeResolver::ArgumentType(0),
        ))
    }

    #[test]
    fn test_alternate_key_resolves_to_same_descriptor() {
        let mut registry = SqmFunctionRegistry::new();
        registry.register("ST_Distance", descriptor("ST_Distance")).unwrap();
        registry.register_alternate_key("distance", "ST_Distance").unwrap();

        let canonical = registry.find_function_descriptor("ST_Distance").unwrap();
        let alternate = registry.find_function_descriptor("distance").unwrap();
        assert!(Arc::ptr_eq(&canonical, &alternate));
        assert_eq!(registry.canonical_name("distance"), Some("ST_Distance"));
        assert_eq!(registry.alternate_keys_for("ST_Distance"), vec!["distance"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = SqmFunctionRegistry::new();
        registry.register("ST_Distance", descriptor("ST_Distance")).unwrap();

        assert!(registry.find_function_descriptor("st_distance").is_none());
        assert_eq!(registry.resolve("ST_DISTANCE").unwrap_err().code(), SQM0101);
    }

    #[test]
    fn test_duplicate_rejected_by_default() {
        let mut registry = SqmFunctionRegistry::new();
        registry.register("abs", descriptor("abs")).unwrap();
        let err = registry.register("abs", descriptor("abs")).unwrap_err();
        assert_eq!(err.code(), SQM0300);
    }

    #[test]
    fn test_replace_policy_last_writer_wins() {
        let mut registry = SqmFunctionRegistry::with_policy(DuplicatePolicy::Replace);
        registry.register("abs", descriptor("abs")).unwrap();
        let replacement = descriptor("ABS");
        registry.register("abs", Arc::clone(&replacement)).unwrap();

        assert!(Arc::ptr_eq(&registry.resolve("abs").unwrap(), &replacement));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dangling_alternate_key() {
        let mut registry = SqmFunctionRegistry::new();
        let err = registry.register_alternate_key("distance", "ST_Distance").unwrap_err();
        assert_eq!(err.code(), SQM0301);
    }

    #[test]
    fn test_alternate_key_cannot_shadow_canonical_name() {
        let mut registry = SqmFunctionRegistry::with_policy(DuplicatePolicy::Replace);
        registry.register("upper", descriptor("upper")).unwrap();
        registry.register("lower", descriptor("lower")).unwrap();

        let err = registry.register_alternate_key("lower", "upper").unwrap_err();
        assert_eq!(err.code(), SQM0300);
    }

    #[test]
    fn test_alternate_key_repointing_follows_policy() {
        let mut registry = SqmFunctionRegistry::new();
        registry.register("ST_Union", descriptor("ST_Union")).unwrap();
        registry.register("ST_Intersection", descriptor("ST_Intersection")).unwrap();
        registry.register_alternate_key("geomunion", "ST_Union").unwrap();
        registry.register_alternate_key("geomunion", "ST_Union").unwrap();

        let err = registry
            .register_alternate_key("geomunion", "ST_Intersection")
            .unwrap_err();
        assert_eq!(err.code(), SQM0300);
    }

    #[test]
    fn test_iteration_sorted_by_name() {
        let mut registry = SqmFunctionRegistry::new();
        for name in ["lower", "abs", "concat"] {
            registry.register(name, descriptor(name)).unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["abs", "concat", "lower"]);
    }
}
