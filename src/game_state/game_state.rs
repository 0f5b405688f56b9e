//! Mutable board state.
//!
//! `GameState` is the central model for the engine: an 8x8 grid of optional
//! pieces, the side to move, castling rights, the en-passant target and the
//! log of applied moves. It is mutated in place by make/unmake and owned
//! exclusively by one caller at a time; nothing here is shared or global.

use crate::game_state::chess_rules::STARTING_ROWS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_pseudo_legal_moves, has_legal_move,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// `grid[row][col]`, row 0 is Dark's back rank.
    pub grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by a pawn's double advance on the previous ply.
    pub en_passant_square: Option<Square>,
    /// Applied moves, oldest first. Each entry carries its undo snapshot.
    pub move_log: Vec<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            move_log: Vec::new(),
        }
    }
}

impl GameState {
    /// An empty board with Light to move and no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        for (row, layout) in STARTING_ROWS.iter().enumerate() {
            for (col, ch) in layout.chars().enumerate() {
                game_state.grid[row][col] = Piece::from_char(ch);
            }
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Scans the grid for `color`'s king. `None` only for malformed positions.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, PieceKind::King));
        for row in 0..8u8 {
            for col in 0..8u8 {
                if self.grid[row as usize][col as usize] == king {
                    return Some(Square::new(row, col));
                }
            }
        }
        None
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last()
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self, square, by_color)
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    pub fn pseudo_legal_moves(&self) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(self)
    }

    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        generate_legal_moves(self)
    }

    /// Legal moves whose origin is `square`, for highlighting destinations.
    pub fn legal_moves_from(&mut self, square: Square) -> Vec<ChessMove> {
        generate_legal_moves(self)
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    #[inline]
    pub fn has_legal_move(&mut self) -> bool {
        has_legal_move(self)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check(self.side_to_move) && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Applies a move produced by the legal generator (or its finalized
    /// promotion copy). Moves from anywhere else are outside the contract.
    #[inline]
    pub fn apply(&mut self, mv: ChessMove) {
        make_move(self, mv);
    }

    /// Reverts the last applied move. No-op on an empty log.
    #[inline]
    pub fn undo(&mut self) -> Option<ChessMove> {
        unmake_move(self)
    }
}
