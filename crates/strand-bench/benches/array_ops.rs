//! Criterion micro-benchmarks for append growth and positional shifting.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use strand_array::DynArray;
use strand_bench::{filled, lcg_stream};

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_4k_from_capacity_one", |b| {
        b.iter(|| {
            let mut xs = DynArray::new();
            for i in 0..4096u64 {
                xs.append(black_box(i));
            }
            xs
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    // Worst case: every insert shifts the whole live prefix.
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut xs = DynArray::new();
            for i in 0..1024u64 {
                xs.insert(0, black_box(i));
            }
            xs
        })
    });
}

fn bench_insert_scattered(c: &mut Criterion) {
    let probes = lcg_stream(42, 1024);
    c.bench_function("insert_scattered_1k", |b| {
        b.iter(|| {
            let mut xs = DynArray::new();
            for (i, &p) in probes.iter().enumerate() {
                xs.insert((p % (i as u64 + 1)) as usize, black_box(i as u64));
            }
            xs
        })
    });
}

fn bench_remove_front(c: &mut Criterion) {
    c.bench_function("remove_front_until_empty_1k", |b| {
        b.iter_batched(
            || filled(1024),
            |mut xs| {
                while !xs.is_empty() {
                    black_box(xs.remove(0).unwrap());
                }
                xs
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_indexed_sum(c: &mut Criterion) {
    let xs = filled(4096);
    c.bench_function("checked_indexed_sum_4k", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..xs.len() {
                total = total.wrapping_add(*xs.get(black_box(i)).unwrap());
            }
            total
        })
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_front,
    bench_insert_scattered,
    bench_remove_front,
    bench_indexed_sum
);
criterion_main!(benches);
