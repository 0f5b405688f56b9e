//! Direction tables and occupancy helpers shared by the per-piece generators
//! and the attack oracle. Table order fixes move enumeration order.

use crate::game_state::{chess_types::*, game_state::GameState};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Row-major over `-1..=1`, skipping the center.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether `square` can be landed on by a piece of `color`: empty or enemy.
#[inline]
pub fn is_empty_or_enemy(game_state: &GameState, square: Square, color: Color) -> bool {
    match game_state.piece_at(square) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, color: Color) -> Option<Piece> {
    game_state.piece_at(square).filter(|piece| piece.color != color)
}
