use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dnc_trace::problems::closest_pair::{find_closest_pair, find_closest_pair_into, Point};
use dnc_trace::traits::StepCounter;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|id| Point::new(rng.gen_range(0.0..1e4), rng.gen_range(0.0..1e4), id))
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_closest_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_traced");
    for &n in &[1_000usize, 5_000, 10_000] {
        group.bench_function(format!("points_{n}"), |b| {
            b.iter_batched(
                || random_points(&mut StdRng::seed_from_u64(42), n),
                |points| {
                    let before = rss_kib();
                    let traced = find_closest_pair(&points);
                    let after = rss_kib();
                    criterion::black_box(traced.result.distance);
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (closest pair {n}, {} steps): {}",
                        traced.steps.len(),
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("closest_pair_counted");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = random_points(&mut StdRng::seed_from_u64(7), n);
        group.bench_function(format!("points_{n}"), |b| {
            b.iter(|| {
                let mut counter = StepCounter::default();
                let result = find_closest_pair_into(criterion::black_box(&points), &mut counter);
                criterion::black_box((result.distance, counter.count));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest_pair);
criterion_main!(benches);
