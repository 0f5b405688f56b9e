//! Attack and check oracle.
//!
//! Answers whether a square is attacked by a color by looking outward from
//! the square for each kind of attacker.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRECTIONS,
};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_square(color)
}

/// A color without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    attacked_by_pawn(game_state, square, attacker_color)
        || attacked_by_knight(game_state, square, attacker_color)
        || attacked_along_rays(
            game_state,
            square,
            &DIAGONAL_DIRECTIONS,
            Piece::new(attacker_color, PieceKind::Bishop),
            Piece::new(attacker_color, PieceKind::Queen),
        )
        || attacked_along_rays(
            game_state,
            square,
            &STRAIGHT_DIRECTIONS,
            Piece::new(attacker_color, PieceKind::Rook),
            Piece::new(attacker_color, PieceKind::Queen),
        )
        || attacked_by_king(game_state, square, attacker_color)
}

/// A pawn attacks diagonally forward, so its attackers sit one row *behind*
/// the target from the attacker's point of view: row + 1 for Light, row - 1
/// for Dark.
fn attacked_by_pawn(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let pawn = Some(Piece::new(attacker_color, PieceKind::Pawn));
    let d_row = -attacker_color.pawn_direction();
    [-1i8, 1].iter().any(|&d_col| {
        square
            .offset(d_row, d_col)
            .is_some_and(|from| game_state.piece_at(from) == pawn)
    })
}

fn attacked_by_knight(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let knight = Some(Piece::new(attacker_color, PieceKind::Knight));
    KNIGHT_OFFSETS.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|from| game_state.piece_at(from) == knight)
    })
}

fn attacked_by_king(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let king = Some(Piece::new(attacker_color, PieceKind::King));
    KING_OFFSETS.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|from| game_state.piece_at(from) == king)
    })
}

/// Walks each ray to its first occupied square and reports whether that
/// blocker is one of the two given sliders.
fn attacked_along_rays(
    game_state: &GameState,
    square: Square,
    directions: &[(i8, i8)],
    slider: Piece,
    queen: Piece,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut next = square.offset(d_row, d_col);
        while let Some(current) = next {
            if let Some(piece) = game_state.piece_at(current) {
                if piece == slider || piece == queen {
                    return true;
                }
                break;
            }
            next = current.offset(d_row, d_col);
        }
    }
    false
}
