//! Tests for the MariaDB dialect contributor

use hibernate_sqm_diagnostics::SQM0300;
use hibernate_sqm_function::{
    BootstrapFunctionContributions, ContributionEvent, ContributorImplementor, RecordingObserver,
    ReturnTypeResolver, ServiceRegistry, SqmFunctionRegistry,
};
use hibernate_sqm_spatial::{
    CommonSpatialFunction, GEOMETRY_JAVA_TYPE, MariaDBDialectContributor, SpatialSettings,
};
use hibernate_sqm_tree::{NodeBuilder, ParameterName};
use hibernate_sqm_types::{SqlTypes, TypeConfiguration, TypeName};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

struct Contributed {
    types: TypeConfiguration,
    registry: SqmFunctionRegistry,
    observer: Arc<RecordingObserver>,
}

fn contribute(services: Arc<ServiceRegistry>) -> Contributed {
    let observer = Arc::new(RecordingObserver::new());
    let contributor = MariaDBDialectContributor::new(Arc::clone(&services)).with_observer(observer.clone());

    let mut types = TypeConfiguration::standard();
    contributor.contribute_java_types(&mut types);
    contributor.contribute_jdbc_types(&mut types);

    let mut registry = SqmFunctionRegistry::new();
    let mut contributions = BootstrapFunctionContributions::new(&mut registry, &types, &services);
    contributor.contribute_functions(&mut contributions).unwrap();

    Contributed {
        types,
        registry,
        observer,
    }
}

#[test]
fn test_distance_and_alias_resolve_to_same_descriptor() {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    let canonical = contributed.registry.find_function_descriptor("ST_Distance").unwrap();
    let alias = contributed.registry.find_function_descriptor("distance").unwrap();

    assert!(Arc::ptr_eq(&canonical, &alias));
}

#[rstest]
#[case("geomunion", "ST_Union")]
#[case("srid", "ST_SRID")]
#[case("symdifference", "ST_SymDifference")]
#[case("ST_Relate", "ST_Relate")]
fn test_alternate_keys(#[case] key: &str, #[case] canonical: &str) {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    assert_eq!(contributed.registry.canonical_name(key), Some(canonical));
}

#[test]
fn test_whole_catalogue_registered_in_order() {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    assert_eq!(contributed.registry.len(), CommonSpatialFunction::ALL.len());

    let expected: Vec<String> = CommonSpatialFunction::ALL.iter().map(|f| f.name().to_string()).collect();
    assert_eq!(contributed.observer.registered_functions(), expected);
}

#[test]
fn test_observer_sees_type_then_function_contributions() {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    let events = contributed.observer.events();

    assert_eq!(events[0], ContributionEvent::TypeContributions("MariaDBDialectContributor".into()));
    assert_eq!(events[1], ContributionEvent::FunctionContributions("MariaDBDialectContributor".into()));
}

#[test]
fn test_geometry_types_contributed() {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    let descriptor = contributed.types.jdbc_type_registry().descriptor(SqlTypes::GEOMETRY).unwrap();
    assert_eq!(descriptor.name, "GEOMETRY");

    let geometry = contributed.types.standard_basic_type_for_java_type(&GEOMETRY_JAVA_TYPE).unwrap();
    let buffer = contributed.registry.resolve("buffer").unwrap();
    match buffer.return_type_resolver() {
        ReturnTypeResolver::Fixed(semantic_type) => assert!(Arc::ptr_eq(semantic_type, &geometry)),
        other => panic!("Expected fixed geometry type, got: {:?}", other),
    }
}

#[test]
fn test_disabled_settings_skip_functions_only() {
    let services = Arc::new(ServiceRegistry::new());
    services.register(SpatialSettings { enabled: false });

    let contributed = contribute(services);
    assert!(contributed.registry.is_empty());
    assert!(contributed.types.basic_type_by_name("geometry").is_some());
}

#[test]
fn test_contributing_twice_is_rejected() {
    let services = Arc::new(ServiceRegistry::new());
    let mut contributed = contribute(Arc::clone(&services));

    let contributor = MariaDBDialectContributor::new(Arc::clone(&services));
    let mut contributions = BootstrapFunctionContributions::new(&mut contributed.registry, &contributed.types, &services);
    let err = contributor.contribute_functions(&mut contributions).unwrap_err();
    assert_eq!(err.code(), SQM0300);
}

#[test]
fn test_distance_call_over_geometry_parameters() {
    let contributed = contribute(Arc::new(ServiceRegistry::new()));
    let builder = NodeBuilder::new(Arc::new(contributed.types), Arc::new(contributed.registry)).unwrap();

    let geometry = TypeName::new("geometry");
    let arguments = vec![
        builder.parameter(ParameterName::Positional(1), Some(&geometry)).unwrap().into(),
        builder.parameter(ParameterName::Positional(2), Some(&geometry)).unwrap().into(),
    ];
    let call = builder.function("distance", arguments).unwrap();

    assert_eq!(call.render_sql(), "ST_Distance(?1, ?2)");
    assert_eq!(call.result_type().unwrap().name(), "double");
}
