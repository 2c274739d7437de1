use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use warmup_bench::{StreamGenerator, Strategy, SIZE_THRESHOLD};

/// Distinct counts around the set/array crossover.
const COUNTS: [usize; 8] = [5, 10, 25, 40, SIZE_THRESHOLD - 1, SIZE_THRESHOLD, 60, 79];

const CHARS_UNTIL: u64 = 20_000;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_finder");
    group.sample_size(20);

    for count in COUNTS {
        for strategy in [Strategy::Set, Strategy::Array] {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), count),
                &count,
                |b, &count| {
                    b.iter_batched(
                        || StreamGenerator::with_master(count, CHARS_UNTIL).expect("valid count"),
                        |mut generator| black_box(strategy.find(&mut generator, count)),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
