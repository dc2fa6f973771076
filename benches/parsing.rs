//! Criterion benchmarks for magnet URI parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use magnet_uri::{MagnetUri, Parameter, ParameterPrefix};

const TEST_CASES: [(&str, &str); 5] = [
    ("minimal", "magnet:?xt=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C"),
    (
        "with_name",
        "magnet:?xt=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C&dn=Great+Speeches+-+Martin+Luther+King+Jr.+-+I+Have+A+Dream.mp3",
    ),
    (
        "indexed",
        "magnet:?xt.1=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C&xt.2=urn:sha1:TXGCZQTH26NL6OUQAJJPFALHG2LTGBC7",
    ),
    ("keywords", "magnet:?kt=martin+luther+king+mp3"),
    (
        "full",
        "magnet:?xt.1=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C&xt.2=urn:sha1:TXGCZQTH26NL6OUQAJJPFALHG2LTGBC7&dn=speech.mp3&kt=martin+luther+king&mt=http://weblog.foo/all-my-favorites.rss",
    ),
];

/// Benchmark: MagnetUri::parse with varying parameter counts
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, uri) in TEST_CASES {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| MagnetUri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: MagnetUri::to_uri_string
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for (name, uri_str) in TEST_CASES {
        let uri = MagnetUri::parse(uri_str).expect("valid test URI");
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| black_box(uri).to_uri_string());
        });
    }

    group.finish();
}

/// Benchmark: order-independent equality at growing parameter counts
fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    for count in [1usize, 4, 16, 64, 256] {
        let params: Vec<Parameter> = (0..count)
            .map(|i| Parameter::new(ParameterPrefix::ExactTopic, format!("urn:sha1:{i:032}")))
            .collect();
        let forward = MagnetUri::new(params.clone());
        let reversed = MagnetUri::new(params.into_iter().rev().collect());

        group.bench_with_input(
            BenchmarkId::new("parameters", count),
            &(forward, reversed),
            |b, (forward, reversed)| {
                b.iter(|| black_box(forward) == black_box(reversed));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_equality);
criterion_main!(benches);
