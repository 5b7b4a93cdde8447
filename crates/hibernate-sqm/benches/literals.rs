//! Literal and expression building benchmarks using divan

use hibernate_sqm::parser::{parse_date, parse_integer, parse_time, parse_timestamp};
use hibernate_sqm::tree::helper::{date_literal_from, timestamp_literal_from};
use hibernate_sqm::tree::{ParameterName, SqmCreationContext};
use hibernate_sqm::types::{to_sqm_type, JavaTypeKey, TypeName};
use hibernate_sqm::{DialectName, EngineConfig, SessionFactory, SessionFactoryBuilder};
use std::sync::LazyLock;

fn main() {
    divan::main();
}

static FACTORY: LazyLock<SessionFactory> = LazyLock::new(|| {
    SessionFactoryBuilder::new(EngineConfig::for_dialect(DialectName::MariaDB))
        .build()
        .expect("MariaDB bootstrap")
});

mod parse {
    use super::*;

    #[divan::bench]
    fn integer(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_integer(divan::black_box("-2147483648")));
    }

    #[divan::bench]
    fn iso_date(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_date(divan::black_box("2023-05-01")));
    }

    #[divan::bench]
    fn iso_time(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_time(divan::black_box("10:15:30.123456789")));
    }

    #[divan::bench]
    fn iso_timestamp(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_timestamp(divan::black_box("2023-05-01T10:15:30.123")));
    }

    #[divan::bench]
    fn jdbc_timestamp(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_timestamp(divan::black_box("{ts '2023-05-01 10:15:30'}")));
    }

    #[divan::bench]
    fn malformed_date(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_date(divan::black_box("2023-02-30")));
    }
}

mod build {
    use super::*;

    #[divan::bench]
    fn date_literal(bencher: divan::Bencher) {
        let state = FACTORY.creation_state();
        bencher.bench_local(|| date_literal_from(divan::black_box("2023-05-01"), &state));
    }

    #[divan::bench]
    fn timestamp_literal(bencher: divan::Bencher) {
        let state = FACTORY.creation_state();
        bencher.bench_local(|| timestamp_literal_from(divan::black_box("{ts '2023-05-01 10:15:30'}"), &state));
    }

    #[divan::bench]
    fn resolve_java_type(bencher: divan::Bencher) {
        let state = FACTORY.creation_state();
        bencher.bench_local(|| to_sqm_type(Some(divan::black_box(&JavaTypeKey::SQL_TIMESTAMP)), &state));
    }

    #[divan::bench(args = ["ST_Distance", "distance"])]
    fn spatial_call(bencher: divan::Bencher, name: &str) {
        let state = FACTORY.creation_state();
        let geometry = TypeName::new("geometry");
        bencher.bench_local(|| {
            let left = state.node_builder().parameter(ParameterName::Positional(1), Some(&geometry))?;
            let right = state.node_builder().parameter(ParameterName::Positional(2), Some(&geometry))?;
            state
                .node_builder()
                .function(divan::black_box(name), vec![left.into(), right.into()])
        });
    }
}
