use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pcuboid_mesh::CuboidParams;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuboid_build");
    let host_default = CuboidParams::new([2.0, 1.0, 1.0], [3, 3, 3], [5.0, 3.0, 3.0]);
    group.bench_function("default_3x3x3", |b| {
        b.iter(|| black_box(host_default.build().unwrap()))
    });
    let host_max = CuboidParams::new([2.0, 1.0, 1.0], [10, 10, 10], [5.0, 3.0, 3.0]);
    group.bench_function("max_10x10x10", |b| {
        b.iter(|| black_box(host_max.build().unwrap()))
    });
    let dense = CuboidParams::new([1.0; 3], [128, 128, 128], [1.0; 3]);
    group.bench_function("dense_128", |b| b.iter(|| black_box(dense.build().unwrap())));
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
