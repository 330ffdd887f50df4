use criterion::{black_box, criterion_group, criterion_main, Criterion};
use synviz_core::{pack_lanes, QtlRecord};

fn features(count: usize) -> Vec<QtlRecord> {
    // Deterministic pseudo-random intervals, heavy on overlap.
    let mut state = 0x9e3779b97f4a7c15u64;
    (0..count)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let start = state % 1_000_000;
            let span = (state >> 32) % 50_000;
            QtlRecord {
                id: format!("q{}", i),
                symbol: format!("Q{}", i),
                chr: "1".to_string(),
                start,
                end: start + span,
            }
        })
        .collect()
}

fn bench_lane_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lane_packing");
    for &count in &[100usize, 1_000, 5_000] {
        let input = features(count);
        group.bench_function(format!("pack_{}", count), |b| {
            b.iter(|| pack_lanes(black_box(&input), 120.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lane_packing);
criterion_main!(benches);
