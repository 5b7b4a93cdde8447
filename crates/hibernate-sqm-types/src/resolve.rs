//! Resolution of nominal (bindable) types to canonical semantic types
//!
//! Every compilation-time object that can reach the canonical type registry
//! implements [`TypeResolutionContext`], so [`to_sqm_type`] gives the same
//! answer whether it is called with a creation state, a node builder, the
//! type configuration itself or a session factory.

use crate::{JavaTypeKey, SemanticType, TypeConfiguration, TypeName};
use hibernate_sqm_diagnostics::{Result, SqmError};
use std::fmt;
use std::sync::Arc;

/// A nominal type that a parameter or binding may anticipate
pub trait BindableType: fmt::Debug + Send + Sync {
    /// Resolve against the canonical registry; `None` means the registry
    /// has no type for this nominal type
    fn resolve_expressible(&self, type_configuration: &TypeConfiguration) -> Option<Arc<SemanticType>>;
}

impl BindableType for Arc<SemanticType> {
    fn resolve_expressible(&self, _type_configuration: &TypeConfiguration) -> Option<Arc<SemanticType>> {
        Some(Arc::clone(self))
    }
}

impl BindableType for JavaTypeKey {
    fn resolve_expressible(&self, type_configuration: &TypeConfiguration) -> Option<Arc<SemanticType>> {
        type_configuration.standard_basic_type_for_java_type(self)
    }
}

impl BindableType for TypeName {
    fn resolve_expressible(&self, type_configuration: &TypeConfiguration) -> Option<Arc<SemanticType>> {
        type_configuration.basic_type_by_name(&self.0)
    }
}

/// Narrow capability: access to the canonical type registry
pub trait TypeResolutionContext {
    fn type_configuration(&self) -> &TypeConfiguration;
}

impl TypeResolutionContext for TypeConfiguration {
    fn type_configuration(&self) -> &TypeConfiguration {
        self
    }
}

impl<T: TypeResolutionContext + ?Sized> TypeResolutionContext for Arc<T> {
    fn type_configuration(&self) -> &TypeConfiguration {
        (**self).type_configuration()
    }
}

/// Resolve an anticipated type, reporting an unresolvable non-null type as
/// a configuration inconsistency
pub fn try_to_sqm_type<B, C>(anticipated: Option<&B>, context: &C) -> Result<Option<Arc<SemanticType>>>
where
    B: BindableType + ?Sized,
    C: TypeResolutionContext + ?Sized,
{
    let Some(anticipated) = anticipated else {
        return Ok(None);
    };

    anticipated
        .resolve_expressible(context.type_configuration())
        .map(Some)
        .ok_or_else(|| {
            SqmError::configuration_inconsistency(format!(
                "Type configuration could not resolve anticipated type {:?}",
                anticipated
            ))
        })
}

/// Resolve an anticipated type to its canonical semantic type
///
/// A `None` anticipated type resolves to `None`.
///
/// # Panics
///
/// Panics when a non-null anticipated type does not resolve: the engine's
/// type configuration is inconsistent and compilation must not continue with
/// a missing type.
pub fn to_sqm_type<B, C>(anticipated: Option<&B>, context: &C) -> Option<Arc<SemanticType>>
where
    B: BindableType + ?Sized,
    C: TypeResolutionContext + ?Sized,
{
    match try_to_sqm_type(anticipated, context) {
        Ok(resolved) => resolved,
        Err(err) => panic!("{}", err),
    }
}
