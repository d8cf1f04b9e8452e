//! Criterion benchmarks for the move-generation hot path.
//!
//! Run with:
//!     cargo bench --bench ready_holes

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use pegjump_engine::engine::config::PRESETS;
use pegjump_engine::engine::simulator::random_playout;
use pegjump_engine::games::peg_solitaire::Board;

struct Fixture {
    label: String,
    board: Board,
}

/// Each preset after 0, 4 and 8 random jumps.
fn fixtures() -> Vec<Fixture> {
    let mut out = Vec::new();
    for (name, def) in PRESETS.iter() {
        for depth in [0usize, 4, 8] {
            let mut board = def.build().expect("preset builds");
            let mut rng = StdRng::seed_from_u64(depth as u64);
            let mut played = 0;
            while played < depth {
                let legal = board.legal_jumps();
                let Some(&mv) = legal.choose(&mut rng) else { break };
                board.jump_from_to(mv.from, mv.to);
                played += 1;
            }
            out.push(Fixture {
                label: format!("{name}_j{played}"),
                board,
            });
        }
    }
    out
}

fn bench_ready_holes(c: &mut Criterion) {
    let fixtures = fixtures();
    let mut group = c.benchmark_group("ready_holes");
    for fixture in &fixtures {
        group.bench_with_input(
            BenchmarkId::new("ready_holes", &fixture.label),
            &fixture.board,
            |b, board| b.iter(|| board.ready_holes().len()),
        );
    }
    group.finish();
}

fn bench_legal_jumps(c: &mut Criterion) {
    let fixtures = fixtures();
    let mut group = c.benchmark_group("legal_jumps");
    for fixture in &fixtures {
        group.bench_with_input(
            BenchmarkId::new("legal_jumps", &fixture.label),
            &fixture.board,
            |b, board| b.iter(|| board.legal_jumps()),
        );
    }
    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    for (name, def) in PRESETS.iter() {
        group.bench_function(*name, |b| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || def.build().expect("preset builds"),
                |mut board| random_playout(&mut board, &mut rng).pegs_left,
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let def = &PRESETS["european"];
    c.bench_function("build_european", |b| b.iter(|| def.build()));
}

criterion_group!(
    benches,
    bench_ready_holes,
    bench_legal_jumps,
    bench_random_playout,
    bench_build
);
criterion_main!(benches);
