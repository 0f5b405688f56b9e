use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_chess::engines::difficulty::{select_move, DifficultyTier};
use grid_chess::game_state::game_state::GameState;
use grid_chess::search::board_scoring::MaterialScorer;
use grid_chess::search::minimax::{select_best_move, select_best_move_full_width, SearchStats};

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    (
        "italian",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
    ("position_3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn max_depth() -> u8 {
    match std::env::var("GRID_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 3,
        _ => 2,
    }
}

fn bench_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        for tier in DifficultyTier::ALL {
            let mut bench_game = game.clone();
            group.bench_with_input(
                BenchmarkId::new(tier.name(), name),
                &tier,
                |b, tier| {
                    b.iter(|| {
                        let mv = select_move(black_box(&mut bench_game), tier.depth(), *tier);
                        black_box(mv)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta_vs_full_width");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        for depth in 1..=max_depth() {
            // Pruning must not change the chosen move.
            let mut check_game = game.clone();
            let mut stats = SearchStats::default();
            let pruned = select_best_move(&MaterialScorer, &mut check_game, depth, &mut stats);
            let full = select_best_move_full_width(&MaterialScorer, &mut check_game, depth, &mut stats);
            assert_eq!(pruned, full, "pruning changed the result for {} depth {}", name, depth);

            let mut pruned_game = game.clone();
            group.bench_function(BenchmarkId::new(format!("alpha_beta_d{}", depth), name), |b| {
                b.iter(|| {
                    let mut stats = SearchStats::default();
                    black_box(select_best_move(&MaterialScorer, black_box(&mut pruned_game), depth, &mut stats))
                });
            });

            let mut full_game = game.clone();
            group.bench_function(BenchmarkId::new(format!("full_width_d{}", depth), name), |b| {
                b.iter(|| {
                    let mut stats = SearchStats::default();
                    black_box(select_best_move_full_width(
                        &MaterialScorer,
                        black_box(&mut full_game),
                        depth,
                        &mut stats,
                    ))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_tiers, bench_pruning);
criterion_main!(search_benches);
