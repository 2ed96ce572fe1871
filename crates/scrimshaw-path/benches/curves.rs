use criterion::{Criterion, criterion_group, criterion_main};
use scrimshaw_path::{align, bounds, parse, smooth, to_curves};
use std::hint::black_box;

fn zigzag(points: usize) -> String {
    let mut d = String::from("M0,0");
    for i in 1..points {
        let y = if i % 2 == 0 { 0 } else { 40 };
        d.push_str(&format!(" L{},{}", i * 10, y));
    }
    d
}

const MIXED: &str = "M0,0 L10,10 Q20,0 30,10 T50,10 S60,0 70,10 H80 V0 \
    A25,40 15 1 1 120,40 C130,0 140,80 150,40 Z m10,10 l5,5 h5 v-5 z";

fn bench_curves(c: &mut Criterion) {
    let line = zigzag(500);

    c.bench_function("parse/zigzag_500", |b| {
        b.iter(|| parse(black_box(line.as_str())))
    });
    c.bench_function("to_curves/mixed", |b| b.iter(|| to_curves(black_box(MIXED))));
    c.bench_function("bounds/mixed", |b| {
        let curves = to_curves(MIXED);
        b.iter(|| bounds(black_box(&curves)))
    });
    c.bench_function("smooth/zigzag_500", |b| {
        b.iter(|| smooth(black_box(line.as_str()), 4.0))
    });
    c.bench_function("align/mixed_vs_zigzag", |b| {
        let short = zigzag(20);
        b.iter(|| align(black_box(MIXED), black_box(short.as_str())))
    });
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
