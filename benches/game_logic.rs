use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bowling::core::{describe, recompute, Game};
use tui_bowling::types::DEMO_ROLLS;

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("perfect_game_12_rolls", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for _ in 0..12 {
                let _ = game.roll(black_box(10));
            }
            game.total_score()
        })
    });
}

fn bench_demo_game(c: &mut Criterion) {
    c.bench_function("demo_game_from_rolls", |b| {
        b.iter(|| Game::from_rolls(black_box(&DEMO_ROLLS)).map(|g| g.total_score()))
    });
}

fn bench_recompute(c: &mut Criterion) {
    let game = match Game::from_rolls(&DEMO_ROLLS) {
        Ok(game) => game,
        Err(err) => panic!("demo rolls rejected: {err}"),
    };
    let mut frames = game.frames().to_vec();

    c.bench_function("recompute_full_game", |b| {
        b.iter(|| recompute(black_box(&mut frames)))
    });
}

fn bench_describe(c: &mut Criterion) {
    let inputs: [&[u8]; 4] = [&[10, 10, 10], &[7, 3, 10], &[0, 0], &[9, 1]];

    c.bench_function("describe_rolls", |b| {
        b.iter(|| {
            for rolls in inputs {
                black_box(describe(black_box(rolls)));
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::from_rolls(&DEMO_ROLLS).unwrap_or_default();
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_perfect_game,
    bench_demo_game,
    bench_recompute,
    bench_describe,
    bench_snapshot
);
criterion_main!(benches);
