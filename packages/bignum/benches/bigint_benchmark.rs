use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bignum::{factorial, fibonacci, power, BigInt};

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group_factorial = c.benchmark_group("factorial");
    group_factorial.bench_function("100", |b| b.iter(|| factorial(black_box(100))));
    group_factorial.bench_function("1000", |b| b.iter(|| factorial(black_box(1000))));
    group_factorial.sample_size(10);
    group_factorial.bench_function("3000", |b| b.iter(|| factorial(black_box(3000))));
    group_factorial.finish();

    let two = BigInt::from(2u32);
    let mut group_power = c.benchmark_group("power_of_two");
    group_power.bench_function("1024", |b| b.iter(|| power(&two, black_box(1024))));
    group_power.bench_function("16384", |b| b.iter(|| power(&two, black_box(16384))));
    group_power.finish();

    let mut group_fibonacci = c.benchmark_group("fibonacci");
    group_fibonacci.bench_function("1000", |b| b.iter(|| fibonacci(black_box(1000))));
    group_fibonacci.bench_function("10000", |b| b.iter(|| fibonacci(black_box(10000))));
    group_fibonacci.finish();

    let a = factorial(500);
    let d = fibonacci(2500);
    let mut group_mul = c.benchmark_group("multiply");
    group_mul.bench_function("1135x523_digits", |b| b.iter(|| black_box(&a).multiply(black_box(&d))));
    group_mul.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
