mod common;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use tokio::runtime::Runtime;

use common::{debit_batch, settle_batch, setup_engine, setup_shared_engine, wager};

/// Benchmark debit throughput over a single account versus many
fn bench_debit_throughput(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("debit_throughput");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.to_async(&rt).iter_batched(
                || (setup_engine(100, i64::MAX / 2), debit_batch(count, 100)),
                |(engine, requests)| async move {
                    for request in requests {
                        black_box(engine.debit(request).await.ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the full reserve-then-settle round lifecycle
fn bench_round_lifecycle(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("round_lifecycle");

    for count in [100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.to_async(&rt).iter_batched(
                || (setup_engine(100, i64::MAX / 2), settle_batch(count, 100)),
                |(engine, pairs)| async move {
                    for (debit, credit) in pairs {
                        black_box(engine.debit(debit).await.ok());
                        black_box(engine.credit(credit).await.ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark duplicate-round probes: every request after the first loses
fn bench_duplicate_rejection(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("duplicate_rejection", |b| {
        b.to_async(&rt).iter_batched(
            || {
                let engine = setup_engine(1, i64::MAX / 2);
                let replays: Vec<_> = (0..1_000)
                    .map(|i| wager(0, "round-fixed", &format!("tx-{i}"), 10))
                    .collect();
                (engine, replays)
            },
            |(engine, replays)| async move {
                for request in replays {
                    black_box(engine.debit(request).await.ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark concurrent load across disjoint accounts
fn bench_concurrent_accounts(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("concurrent_accounts");

    for workers in [4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                b.to_async(&rt).iter_batched(
                    || setup_shared_engine(workers, i64::MAX / 2),
                    |engine| async move {
                        let tasks: Vec<_> = (0..workers)
                            .map(|i| {
                                let engine = Arc::clone(&engine);
                                tokio::spawn(async move {
                                    for j in 0..50 {
                                        let request = wager(
                                            i,
                                            &format!("round-{i}-{j}"),
                                            &format!("tx-{i}-{j}"),
                                            10,
                                        );
                                        black_box(engine.debit(request).await.ok());
                                    }
                                })
                            })
                            .collect();
                        for task in tasks {
                            task.await.unwrap();
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_debit_throughput,
    bench_round_lifecycle,
    bench_duplicate_rejection,
    bench_concurrent_accounts
);
criterion_main!(benches);
