//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Light maximizes and Dark minimizes; there is no negamax sign flipping.
//! Children are visited in generator order and ties keep the first move
//! found, so results are deterministic for a given position and depth.
//!
//! The search drives make/unmake on the caller's `GameState` and always
//! leaves it exactly as it was. It is not reentrant: concurrent searches need
//! their own states.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::BoardScorer;

/// Bound used as the initial alpha/beta window, beyond any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    pub score: i32,
}

pub fn minimax<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    search_node(scorer, game_state, depth, alpha, beta, true, stats)
}

/// Same tree as `minimax` without cutoffs. Used to check that pruning never
/// changes a result.
pub fn minimax_full_width<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    stats: &mut SearchStats,
) -> i32 {
    search_node(scorer, game_state, depth, -SCORE_INFINITY, SCORE_INFINITY, false, stats)
}

fn search_node<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    prune: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return scorer.score(game_state);
    }

    let moves = generate_legal_moves(game_state);
    if moves.is_empty() {
        // Checkmate or stalemate; the scorer tells them apart.
        return scorer.score(game_state);
    }

    if game_state.side_to_move == Color::Light {
        let mut max_eval = -SCORE_INFINITY;
        for mv in moves {
            game_state.apply(mv);
            let eval = search_node(scorer, game_state, depth - 1, alpha, beta, prune, stats);
            game_state.undo();
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if prune && beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = SCORE_INFINITY;
        for mv in moves {
            game_state.apply(mv);
            let eval = search_node(scorer, game_state, depth - 1, alpha, beta, prune, stats);
            game_state.undo();
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if prune && beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Root move selection: each legal move is made and scored with a fresh
/// full window at `depth - 1`. A depth of 0 behaves like depth 1.
///
/// Returns `None` when the side to move has no legal move.
pub fn select_best_move<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    stats: &mut SearchStats,
) -> Option<SearchResult> {
    select_root(scorer, game_state, depth, true, stats)
}

pub fn select_best_move_full_width<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    stats: &mut SearchStats,
) -> Option<SearchResult> {
    select_root(scorer, game_state, depth, false, stats)
}

fn select_root<S: BoardScorer + ?Sized>(
    scorer: &S,
    game_state: &mut GameState,
    depth: u8,
    prune: bool,
    stats: &mut SearchStats,
) -> Option<SearchResult> {
    let maximizing = game_state.side_to_move == Color::Light;
    let child_depth = depth.saturating_sub(1);
    let mut best: Option<SearchResult> = None;

    for mv in generate_legal_moves(game_state) {
        game_state.apply(mv);
        let score = search_node(
            scorer,
            game_state,
            child_depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            prune,
            stats,
        );
        game_state.undo();

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(SearchResult { best_move: mv, score });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{MaterialScorer, MATE_SCORE};

    const SAMPLE_POSITIONS: [&str; 5] = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 3 3",
        "3r2k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1",
    ];

    fn select(fen: &str, depth: u8) -> (SearchResult, u64, SearchResult, u64) {
        let mut game = GameState::from_fen(fen).expect("valid FEN");
        let before = game.clone();

        let mut pruned_stats = SearchStats::default();
        let pruned = select_best_move(&MaterialScorer, &mut game, depth, &mut pruned_stats)
            .expect("position has legal moves");
        assert_eq!(game, before, "search must leave the state untouched");

        let mut full_stats = SearchStats::default();
        let full = select_best_move_full_width(&MaterialScorer, &mut game, depth, &mut full_stats)
            .expect("position has legal moves");
        assert_eq!(game, before);

        (pruned, pruned_stats.nodes, full, full_stats.nodes)
    }

    #[test]
    fn pruning_matches_full_width_choice() {
        for fen in SAMPLE_POSITIONS {
            // Kiwipete at depth 3 is slow without pruning.
            let max_depth = if fen == SAMPLE_POSITIONS[1] { 2 } else { 3 };
            for depth in 1..=max_depth {
                let (pruned, pruned_nodes, full, full_nodes) = select(fen, depth);
                assert_eq!(pruned, full, "{fen} at depth {depth}");
                assert!(pruned_nodes <= full_nodes);
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes_at_depth_three() {
        let (_, pruned_nodes, _, full_nodes) = select(SAMPLE_POSITIONS[0], 3);
        assert!(pruned_nodes < full_nodes);
    }

    #[test]
    fn minimax_values_agree_with_and_without_pruning() {
        for fen in SAMPLE_POSITIONS {
            let mut game = GameState::from_fen(fen).expect("valid FEN");
            let mut stats = SearchStats::default();
            let pruned = minimax(&MaterialScorer, &mut game, 2, -SCORE_INFINITY, SCORE_INFINITY, &mut stats);
            let full = minimax_full_width(&MaterialScorer, &mut game, 2, &mut stats);
            assert_eq!(pruned, full, "{fen}");
        }
    }

    #[test]
    fn finds_scholars_mate() {
        let mut game = GameState::from_fen(SAMPLE_POSITIONS[0]).expect("valid FEN");
        let mut stats = SearchStats::default();
        let result = select_best_move(&MaterialScorer, &mut game, 1, &mut stats).expect("legal moves");
        assert_eq!(result.best_move.to_string(), "f3f7");
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn black_finds_back_rank_mate() {
        let mut game = GameState::from_fen(SAMPLE_POSITIONS[4]).expect("valid FEN");
        let mut stats = SearchStats::default();
        let result = select_best_move(&MaterialScorer, &mut game, 2, &mut stats).expect("legal moves");
        assert_eq!(result.score, -MATE_SCORE);
        assert_eq!(result.best_move.to_string(), "d8d1");
    }

    #[test]
    fn takes_a_hanging_queen_at_depth_two() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("valid FEN");
        let mut stats = SearchStats::default();
        let result = select_best_move(&MaterialScorer, &mut game, 2, &mut stats).expect("legal moves");
        assert_eq!(result.best_move.to_string(), "d1d5");
    }

    #[test]
    fn no_moves_means_no_selection() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid FEN");
        let mut stats = SearchStats::default();
        assert!(select_best_move(&MaterialScorer, &mut game, 2, &mut stats).is_none());
    }
}
