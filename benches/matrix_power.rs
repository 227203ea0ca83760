use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modmath_lib::{
    matrix::{matrix_power, Matrix},
    modular::{BigintWide, Mod1000000007, ModularNumber, MulReduce, NativeWide, SplitWide},
};

const K: u16 = 64;
const EXPONENT: u64 = 8;

fn build_fixture<W: MulReduce>(
) -> (Matrix<ModularNumber<Mod1000000007, W>>, Vec<ModularNumber<Mod1000000007, W>>) {
    let n = u64::from(K);
    let data = (0..n * n).map(ModularNumber::new).collect();
    let matrix = Matrix::new(data, K, K).unwrap();
    let vector = (0..n).map(ModularNumber::new).collect();
    (matrix, vector)
}

fn run_native_bench(c: &mut Criterion) {
    let (matrix, vector) = build_fixture::<NativeWide>();
    c.bench_function("matrix_power native 64", |b| {
        b.iter(|| matrix_power(black_box(&matrix), EXPONENT, black_box(&vector)))
    });
}

fn run_split_bench(c: &mut Criterion) {
    let (matrix, vector) = build_fixture::<SplitWide>();
    c.bench_function("matrix_power split 64", |b| {
        b.iter(|| matrix_power(black_box(&matrix), EXPONENT, black_box(&vector)))
    });
}

fn run_bigint_bench(c: &mut Criterion) {
    let (matrix, vector) = build_fixture::<BigintWide>();
    c.bench_function("matrix_power bigint 64", |b| {
        b.iter(|| matrix_power(black_box(&matrix), EXPONENT, black_box(&vector)))
    });
}

criterion_group!(
    name = native_power_bench;
    config = Criterion::default();
    targets = run_native_bench
);

criterion_group!(
    name = split_power_bench;
    config = Criterion::default();
    targets = run_split_bench
);

criterion_group!(
    name = bigint_power_bench;
    config = Criterion::default();
    targets = run_bigint_bench
);

criterion_main!(native_power_bench, split_power_bench, bigint_power_bench);
