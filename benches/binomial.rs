use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modmath_lib::comb::{BinomialTable, LucasBinomial};

fn run_table_bench(c: &mut Criterion) {
    let table: BinomialTable = BinomialTable::new(10007).unwrap();
    c.bench_function("binomial table 10007", |b| {
        b.iter(|| table.binomial(black_box(10000), black_box(4999)))
    });
}

fn run_lucas_bench(c: &mut Criterion) {
    let moder: LucasBinomial = LucasBinomial::new(10007).unwrap();
    c.bench_function("binomial lucas 10007", |b| {
        b.iter(|| moder.binomial(black_box(10_000_000_000), black_box(4_999_999_999)))
    });
}

fn run_lucas_fallback_bench(c: &mut Criterion) {
    // Prime above the embedded digit table; every query runs the
    // multiplicative fallback.
    let moder: LucasBinomial = LucasBinomial::new(1048583).unwrap();
    c.bench_function("binomial lucas fallback 1048583", |b| {
        b.iter(|| moder.binomial(black_box(1048582), black_box(1000)))
    });
}

criterion_group!(
    name = table_bench;
    config = Criterion::default();
    targets = run_table_bench
);

criterion_group!(
    name = lucas_bench;
    config = Criterion::default();
    targets = run_lucas_bench
);

criterion_group!(
    name = lucas_fallback_bench;
    config = Criterion::default();
    targets = run_lucas_fallback_bench
);

criterion_main!(table_bench, lucas_bench, lucas_fallback_bench);
