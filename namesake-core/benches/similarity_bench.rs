use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use namesake_core::harvest::{harvest_file, HarvestOptions};
use namesake_core::language::Language;
use namesake_core::matcher::match_scope;
use namesake_core::scope::{Name, NameKind, NameOrigin, ScopeId, ScopeNames};
use namesake_core::similarity::{may_exceed_threshold, similarity_score};
use namesake_core::subsequence::longest_common_subsequence;
use std::path::PathBuf;

/// Two names of the given length sharing everything but one middle char.
fn synthetic_pair(len: usize) -> (String, String) {
    let a: String = ('a'..='z').cycle().take(len).collect();
    let mut b = a.clone();
    b.replace_range(len / 2..len / 2 + 1, "_");
    (a, b)
}

fn scope_with_names(count: usize) -> ScopeNames {
    let stems = [
        "buffer", "counter", "index", "total", "result", "value", "handle", "offset",
    ];
    let mut scope = ScopeNames::new(ScopeId::file_root("bench.rs"));
    for i in 0..count {
        let text = format!("{}_{:03}", stems[i % stems.len()], i / stems.len());
        let origin = NameOrigin {
            file: PathBuf::from("bench.rs"),
            line: i as u64 + 1,
            col: 4,
            kind: NameKind::Variable,
        };
        scope.push(Name::new(text, origin));
    }
    scope
}

fn bench_similarity_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_score");
    for len in [8usize, 16, 32, 64] {
        let (a, b) = synthetic_pair(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(similarity_score(black_box(a), black_box(b))));
        });
    }
    group.finish();
}

fn bench_evidence_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_common_subsequence");
    for len in [8usize, 16, 32, 64] {
        let (a, b) = synthetic_pair(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(longest_common_subsequence(black_box(a), black_box(b))));
        });
    }
    group.finish();
}

fn bench_match_scope(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_scope");
    for count in [16usize, 64, 256] {
        let scope = scope_with_names(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &scope,
            |bench, scope| {
                bench.iter(|| black_box(match_scope(black_box(scope), 0.75)));
            },
        );
    }
    group.finish();
}

fn bench_length_pruning(c: &mut Criterion) {
    let scope = scope_with_names(256);
    c.bench_function("length_gate_256_names", |b| {
        b.iter(|| {
            let mut admitted = 0usize;
            for (i, first) in scope.names.iter().enumerate() {
                for second in &scope.names[i + 1..] {
                    if may_exceed_threshold(first.char_len(), second.char_len(), black_box(0.75)) {
                        admitted += 1;
                    }
                }
            }
            black_box(admitted)
        })
    });
}

fn bench_harvest_file(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            "fn handler_{i}() {{\n    let buffer_{i} = {i};\n    let count_{i} = 0;\n}}\n"
        ));
    }
    let bytes = source.into_bytes();
    let path = PathBuf::from("bench.rs");
    let options = HarvestOptions::default();

    c.bench_function("harvest_file_200_fns", |b| {
        b.iter(|| {
            black_box(harvest_file(
                &path,
                black_box(&bytes),
                Language::Rust,
                &options,
                None,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_similarity_score,
    bench_evidence_extraction,
    bench_match_scope,
    bench_length_pruning,
    bench_harvest_file
);
criterion_main!(benches);
