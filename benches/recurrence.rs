// benches/recurrence.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crownwheel::recurrence::recurrence_time;

fn benchmark_recurrence(c: &mut Criterion) {
    c.bench_function("recurrence_small_ensemble", |b| {
        let periods = [4u64, 6, 9];
        let wedges = [2u64, 3, 1];
        b.iter(|| recurrence_time(black_box(&periods), black_box(&wedges)));
    });

    c.bench_function("recurrence_full_catalog", |b| {
        let periods: Vec<u64> = (1..=50).collect();
        let wedges: Vec<u64> = (1..=50).map(|i| (i % 8) + 1).collect();
        b.iter(|| recurrence_time(black_box(&periods), black_box(&wedges)));
    });
}

criterion_group!(benches, benchmark_recurrence);
criterion_main!(benches);
