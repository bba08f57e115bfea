//! Benchmarks for the routing and country-code rules.

use std::hint::black_box;

use commonval_validator::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

// ============================================================================
// Typed validators
// ============================================================================

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    let v = routing_number();

    group.bench_function("valid", |b| b.iter(|| v.validate(black_box("122100024"))));
    group.bench_function("bad_checksum", |b| {
        b.iter(|| v.validate(black_box("123123124")))
    });
    group.bench_function("wrong_length", |b| b.iter(|| v.validate(black_box("1221"))));
    group.bench_function("checksum_only", |b| {
        b.iter(|| routing_checksum(black_box(&[1, 2, 2, 1, 0, 0, 0, 2, 4])))
    });

    group.finish();
}

fn bench_country_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("countrycode");
    let iso2 = country_code(CodeKind::Iso2);
    let iso3 = country_code(CodeKind::Iso3);

    group.bench_function("iso2_hit", |b| b.iter(|| iso2.validate(black_box("us"))));
    group.bench_function("iso2_miss", |b| b.iter(|| iso2.validate(black_box("XX"))));
    group.bench_function("iso3_hit", |b| b.iter(|| iso3.validate(black_box("USA"))));
    group.bench_function("iso3_wrong_width", |b| {
        b.iter(|| iso3.validate(black_box("United States")))
    });

    group.finish();
}

// ============================================================================
// Rule strings through the registry
// ============================================================================

fn bench_rule_set(c: &mut Criterion) {
    let rules = RuleSet::builtin();
    let value = json!("122100024");

    c.bench_function("rule_set_check_spec", |b| {
        b.iter(|| rules.check_spec(black_box("routing|countrycode:iso3"), &value))
    });
}

criterion_group!(benches, bench_routing, bench_country_code, bench_rule_set);
criterion_main!(benches);
