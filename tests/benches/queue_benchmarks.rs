//! # Linked-Queue Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | insert_head / insert_tail | O(1) per element |
//! | remove_head | O(1) plus the copied prefix |
//! | size | O(1) |
//! | reverse | O(n), no allocation |
//! | sort | O(n log n), no node allocation |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lq_queue::Queue;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..16);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn filled(values: &[String]) -> Queue {
    let mut queue = Queue::new();
    for v in values {
        queue.insert_tail(v).expect("insert_tail");
    }
    queue
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tail", size), &values, |b, values| {
            b.iter(|| black_box(filled(values)))
        });
        group.bench_with_input(BenchmarkId::new("head", size), &values, |b, values| {
            b.iter(|| {
                let mut queue = Queue::new();
                for v in values {
                    queue.insert_head(v).expect("insert_head");
                }
                black_box(queue)
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_head");

    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bounded_buffer", size), &values, |b, values| {
            b.iter_batched(
                || filled(values),
                |mut queue| {
                    let mut buf = [0u8; 8];
                    while queue.remove_head(Some(&mut buf)).is_ok() {}
                    black_box(buf)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_reverse_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");
    group.sample_size(20);

    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reverse", size), &values, |b, values| {
            let mut queue = filled(values);
            b.iter(|| {
                queue.reverse();
                black_box(queue.size())
            })
        });
        group.bench_with_input(BenchmarkId::new("sort_random", size), &values, |b, values| {
            b.iter_batched(
                || filled(values),
                |mut queue| {
                    queue.sort();
                    queue
                },
                criterion::BatchSize::LargeInput,
            )
        });

        let mut sorted = values.clone();
        sorted.sort();
        group.bench_with_input(BenchmarkId::new("sort_presorted", size), &sorted, |b, values| {
            b.iter_batched(
                || filled(values),
                |mut queue| {
                    queue.sort();
                    queue
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove, bench_reverse_and_sort);
criterion_main!(benches);
