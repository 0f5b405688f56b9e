//! Full legal move generation pipeline.
//!
//! Scans the grid for the side to move, dispatches each piece to its
//! pseudo-legal generator, then keeps only candidates that do not leave the
//! mover's king attacked. Legality is established by actually making each
//! candidate, testing check, and unmaking it again.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        generate_legal_moves(game_state)
    }
}

/// Row-major over the grid, one dispatch per piece of the side to move.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut pseudo = Vec::<ChessMove>::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = game_state.piece_at(from) else {
                continue;
            };
            if piece.color != side {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut pseudo),
                PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut pseudo),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    generate_slider_moves(game_state, from, piece, &mut pseudo)
                }
                PieceKind::King => generate_king_moves(game_state, from, piece, &mut pseudo),
            }
        }
    }

    pseudo
}

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::<ChessMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        if is_legal(game_state, mv) {
            legal.push(mv);
        }
    }
    legal
}

/// Stops at the first legal candidate.
pub fn has_legal_move(game_state: &mut GameState) -> bool {
    generate_pseudo_legal_moves(game_state)
        .into_iter()
        .any(|mv| is_legal(game_state, mv))
}

fn is_legal(game_state: &mut GameState, mv: ChessMove) -> bool {
    // A king is never captured by a legal move, whatever the position.
    if mv.captured_piece.is_some_and(|piece| piece.kind == PieceKind::King) {
        return false;
    }

    let mover = game_state.side_to_move;
    make_move(game_state, mv);
    let leaves_king_attacked = is_king_in_check(game_state, mover);
    unmake_move(game_state);
    !leaves_king_attacked
}
