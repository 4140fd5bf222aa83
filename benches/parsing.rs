//! Criterion benchmarks for unbinding, binding and matching.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use cpe_name::{
    CpeName, Part, WellFormedName, WfnBuilder, bind_to_formatted_string, bind_to_uri,
    compare_wfns, unbind_formatted_string, unbind_uri,
};

const URIS: [(&str, &str); 4] = [
    ("minimal", "cpe:/a:acme"),
    (
        "typical",
        "cpe:/a:microsoft:internet_explorer:8.0.6001:beta",
    ),
    (
        "packed",
        "cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~",
    ),
    ("encoded", "cpe:/a:foo%24bar:insight%21:7.%2a:sp%01%01"),
];

const FORMATTED_STRINGS: [(&str, &str); 3] = [
    ("minimal", "cpe:2.3:a:acme:*:*:*:*:*:*:*:*:*"),
    (
        "typical",
        "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*",
    ),
    (
        "escaped",
        "cpe:2.3:a:foo\\$bar:insight\\!:7.4.0.1570:-:*:*:online:win2003:x64:*",
    ),
];

/// Benchmark: unbinding both syntaxes
fn bench_unbind(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbind");

    for (name, uri) in URIS {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| unbind_uri(black_box(uri)));
        });
    }

    for (name, fs) in FORMATTED_STRINGS {
        group.throughput(Throughput::Bytes(fs.len() as u64));
        group.bench_with_input(BenchmarkId::new("formatted_string", name), &fs, |b, fs| {
            b.iter(|| unbind_formatted_string(black_box(fs)));
        });
    }

    group.bench_function("facade", |b| {
        b.iter(|| CpeName::parse(black_box(FORMATTED_STRINGS[1].1)));
    });

    group.finish();
}

/// Benchmark: binding a parsed name to both syntaxes
fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");

    for (name, fs) in FORMATTED_STRINGS {
        let wfn = unbind_formatted_string(fs).expect("valid test name");
        group.bench_with_input(BenchmarkId::new("uri", name), &wfn, |b, wfn| {
            b.iter(|| bind_to_uri(black_box(wfn)));
        });
        group.bench_with_input(BenchmarkId::new("formatted_string", name), &wfn, |b, wfn| {
            b.iter(|| bind_to_formatted_string(black_box(wfn)));
        });
    }

    group.finish();
}

/// Benchmark: name comparison with and without wildcards
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let installed = unbind_uri("cpe:/a:adobe:reader:9.3.2:-:-").expect("valid source");
    let cases: [(&str, WellFormedName); 4] = [
        ("equal", installed.clone()),
        (
            "any",
            WfnBuilder::new().part(Part::Application).build(),
        ),
        (
            "wildcard",
            unbind_formatted_string("cpe:2.3:a:adobe:reader:9.*:*:*:*:*:*:*:*")
                .expect("valid target"),
        ),
        (
            "both_wildcards",
            unbind_formatted_string("cpe:2.3:a:ad?be:*reader:9.3*:*:*:*:*:*:*:*")
                .expect("valid target"),
        ),
    ];

    for (name, target) in cases {
        group.bench_with_input(BenchmarkId::new("wfn", name), &target, |b, target| {
            b.iter(|| compare_wfns(black_box(&installed), black_box(target)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unbind, bench_bind, bench_compare);
criterion_main!(benches);
