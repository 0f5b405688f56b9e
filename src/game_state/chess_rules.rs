//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting layout, piece values and the fixed
//! corner squares that castling rights are tied to.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting layout, row 0 first (Dark's back rank).
pub const STARTING_ROWS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Column the king starts on and must stand on to castle.
pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_CASTLE_DEST_COL: u8 = 6;
pub const QUEENSIDE_CASTLE_DEST_COL: u8 = 2;
pub const KINGSIDE_ROOK_DEST_COL: u8 = 5;
pub const QUEENSIDE_ROOK_DEST_COL: u8 = 3;

/// Rook corner squares and the single right each one guards.
pub const ROOK_CORNERS: [(Square, CastlingRights); 4] = [
    (Square::new(7, 7), CASTLE_LIGHT_KINGSIDE),
    (Square::new(7, 0), CASTLE_LIGHT_QUEENSIDE),
    (Square::new(0, 7), CASTLE_DARK_KINGSIDE),
    (Square::new(0, 0), CASTLE_DARK_QUEENSIDE),
];

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}
