//! Benchmarks for QADL parsing
//!
//! Run with: cargo bench -p qadl-parser

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qadl_parser::{normalize, parse};

const GROVER: &str = include_str!("../../../demos/scripts/grover.qadl");

/// Flat circuit with `n` qubits and a layer of gates and measurements.
fn flat_script(n: usize) -> String {
    let mut script = String::from("Circuit Flat {\n");
    for i in 0..n {
        script.push_str(&format!("    qubit q{i}\n"));
    }
    for i in 0..n {
        script.push_str(&format!("    gate H q{i}\n"));
        if i > 0 {
            script.push_str(&format!("    gate CNOT q{} q{i}\n", i - 1));
        }
    }
    for i in 0..n {
        script.push_str(&format!("    measure q{i} -> c{i}\n"));
    }
    script.push_str("}\n");
    script
}

/// Modules nested `depth` levels deep, each with a few gates.
fn nested_script(depth: usize) -> String {
    let mut script = String::new();
    for level in 0..depth {
        script.push_str(&format!("Circuit Level{level} {{\nqubit q0\ngate H q0\n"));
        script.push_str(&format!("module M{level} {{\n"));
    }
    script.push_str("Circuit Leaf {\nqubit q0\ngate X q0\n}\n");
    for _ in 0..depth {
        script.push_str("}\n}\n");
    }
    script
}

fn bench_normalize(c: &mut Criterion) {
    let script = flat_script(100);
    c.bench_function("normalize_flat_100", |b| {
        b.iter(|| normalize(black_box(&script)));
    });
}

fn bench_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for size in &[10, 100, 1000] {
        let script = flat_script(*size);
        group.bench_with_input(BenchmarkId::new("qubits", size), &script, |b, s| {
            b.iter(|| parse(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    for depth in &[1, 4, 16] {
        let script = nested_script(*depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &script, |b, s| {
            b.iter(|| parse(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_demo(c: &mut Criterion) {
    c.bench_function("parse_grover", |b| {
        b.iter(|| parse(black_box(GROVER)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_parse_flat,
    bench_parse_nested,
    bench_parse_demo
);
criterion_main!(benches);
