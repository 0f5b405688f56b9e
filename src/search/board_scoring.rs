//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays independent of the heuristic by calling through
//! `BoardScorer`. Scores are absolute: positive favors Light, negative Dark.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Magnitude returned for a mated side to move.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    /// Score from Light's point of view. Mutable access is needed because
    /// terminal detection runs the legal-move filter.
    fn score(&self, game_state: &mut GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .grid
            .iter()
            .flatten()
            .flatten()
            .map(|piece| match piece.color {
                Color::Light => piece_value(piece.kind),
                Color::Dark => -piece_value(piece.kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        if !game_state.has_legal_move() {
            if !game_state.in_check(game_state.side_to_move) {
                return 0;
            }
            // The side to move has been mated.
            return match game_state.side_to_move {
                Color::Light => -MATE_SCORE,
                Color::Dark => MATE_SCORE,
            };
        }
        Self::material_balance_white_minus_black(game_state)
    }
}

/// Material evaluation with mate and stalemate handling.
#[inline]
pub fn evaluate(game_state: &mut GameState) -> i32 {
    MaterialScorer.score(game_state)
}
