//! Type resolution through every compilation context

use hibernate_sqm::tree::helper::{integer_literal_from, to_sqm_type, try_to_sqm_type};
use hibernate_sqm::types::{BindableType, JavaTypeKey, SemanticType, TypeName, TypeResolutionContext};
use hibernate_sqm::{DialectName, EngineConfig, SessionFactory, SessionFactoryBuilder};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn factory() -> SessionFactory {
    SessionFactoryBuilder::new(EngineConfig::for_dialect(DialectName::MariaDB))
        .build()
        .unwrap()
}

fn resolve_everywhere(factory: &SessionFactory, anticipated: &dyn BindableType) -> Vec<Option<Arc<SemanticType>>> {
    let state = factory.creation_state();
    let engine = factory.query_engine();
    let node_builder = engine.criteria_builder();

    vec![
        to_sqm_type(Some(anticipated), &state),
        to_sqm_type(Some(anticipated), &**node_builder),
        to_sqm_type(Some(anticipated), node_builder.type_configuration()),
        to_sqm_type(Some(anticipated), &**engine),
        to_sqm_type(Some(anticipated), factory),
    ]
}

#[rstest]
#[case(JavaTypeKey::SQL_TIMESTAMP)]
#[case(JavaTypeKey::SQL_DATE)]
#[case(JavaTypeKey::INTEGER)]
#[case(JavaTypeKey::new("org.geolatte.geom.Geometry"))]
fn test_identical_resolution_from_all_contexts(#[case] java_type: JavaTypeKey) {
    let factory = factory();
    let resolved = resolve_everywhere(&factory, &java_type);

    let first = resolved[0].clone().expect("registered type resolves");
    for other in &resolved[1..] {
        assert!(Arc::ptr_eq(&first, other.as_ref().unwrap()));
    }
}

#[test]
fn test_none_resolves_to_none_everywhere() {
    let factory = factory();
    let state = factory.creation_state();
    assert!(to_sqm_type::<TypeName, _>(None, &state).is_none());
    assert!(to_sqm_type::<TypeName, _>(None, &factory).is_none());
}

#[test]
fn test_resolution_is_reference_stable() {
    let factory = factory();
    let first = to_sqm_type(Some(&TypeName::new("geometry")), &factory).unwrap();
    let second = to_sqm_type(Some(&TypeName::new("geometry")), &factory.creation_state()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_unregistered_type_is_configuration_inconsistency() {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    let err = try_to_sqm_type(Some(&TypeName::new("geometry")), &factory).unwrap_err();
    assert_eq!(err.code().to_string(), "SQM0402");
}

#[test]
#[should_panic(expected = "SQM0402")]
fn test_unregistered_type_panics_in_to_sqm_type() {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    to_sqm_type(Some(&JavaTypeKey::new("org.geolatte.geom.Geometry")), &factory.creation_state());
}

#[test]
fn test_integer_literal_typed_with_standard_integer() {
    let factory = factory();
    let state = factory.creation_state();
    let literal = integer_literal_from("42", &state).unwrap();

    let integer = to_sqm_type(Some(&JavaTypeKey::INTEGER), &state).unwrap();
    assert!(Arc::ptr_eq(literal.node_type(), &integer));
    assert_eq!(literal.render_sql(), "42");
}
