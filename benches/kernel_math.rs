//! Throughput benchmarks for the kernel math surface.
//!
//! Measures the lifted vector operations against their scalar-loop
//! equivalents and the launch driver against a sequential sweep, so
//! regressions in the combinator layer or dispatch overhead show up.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use riptide::kernel::*;
use riptide::{launch, GridDim};

fn input(n: usize) -> Vec<f32> {
    (0..n).map(|i| (i as f32).mul_add(0.37, 0.1)).collect()
}

/// Benchmark: lifted math vs the same loop at scalar granularity.
fn bench_lifted_math(c: &mut Criterion) {
    let data = input(4096);

    let mut group = c.benchmark_group("lifted_math");
    group.bench_function("float4_sqrt_fma", |b| {
        b.iter(|| {
            let mut acc = float4::splat(0.0);
            for chunk in 0..data.len() / 4 {
                let v: float4 = vload(black_box(&data), chunk);
                acc = fma(sqrt(fabs(v)), v, acc);
            }
            acc
        })
    });
    group.bench_function("scalar_sqrt_fma", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in black_box(&data).iter() {
                acc = x.abs().sqrt().mul_add(x, acc);
            }
            acc
        })
    });
    group.finish();
}

/// Benchmark: geometric kernels on 3-wide vectors.
fn bench_geometric(c: &mut Criterion) {
    let a = float3::new(1.0, 2.0, 3.0);
    let b3 = float3::new(-4.0, 0.5, 2.0);

    let mut group = c.benchmark_group("geometric");
    group.bench_function("dot3", |b| b.iter(|| dot(black_box(a), black_box(b3))));
    group.bench_function("cross3", |b| b.iter(|| cross(black_box(a), black_box(b3))));
    group.bench_function("normalize3", |b| b.iter(|| normalize(black_box(a))));
    group.finish();
}

/// Benchmark: launch driver overhead over a trivial kernel.
fn bench_launch(c: &mut Criterion) {
    let n = 1 << 14;

    let mut group = c.benchmark_group("launch");
    group.bench_function("saxpy_16k", |b| {
        let x = input(n);
        let mut y = vec![0.0f32; n];
        b.iter(|| {
            let xp = x.as_ptr();
            let yp = y.as_mut_ptr();
            let xp = riptide::ConstantPtr::from_raw(xp);
            let yp = riptide::GlobalPtr::from_raw(yp);
            launch(GridDim::d1(n), move |ctx| {
                let i = get_global_id(ctx, 0);
                unsafe {
                    let v = 2.0 * xp.add(i).read() + yp.add(i).read();
                    yp.add(i).write(v);
                }
            });
        })
    });
    group.bench_function("saxpy_16k_sequential", |b| {
        let x = input(n);
        let mut y = vec![0.0f32; n];
        b.iter(|| {
            for i in 0..n {
                y[i] = 2.0f32.mul_add(x[i], y[i]);
            }
            black_box(&y);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_lifted_math, bench_geometric, bench_launch);
criterion_main!(benches);
