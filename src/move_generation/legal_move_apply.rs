//! In-place make/unmake.
//!
//! `make_move` snapshots the prior en-passant target and castling rights onto
//! the move before mutating the grid, so `unmake_move` can restore them
//! exactly instead of re-deriving them.

use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_DEST_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL, QUEENSIDE_ROOK_COL,
    QUEENSIDE_ROOK_DEST_COL, ROOK_CORNERS,
};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn make_move(game_state: &mut GameState, mut mv: ChessMove) {
    debug_assert!(
        !mv.requires_promotion() || mv.promotion.is_some(),
        "promotion move {mv} applied without a promotion piece"
    );

    mv.prior_en_passant = game_state.en_passant_square;
    mv.prior_castling_rights = game_state.castling_rights;

    let mover = mv.moving_piece;

    if mv.is_en_passant {
        let captured_sq = en_passant_victim_square(&mv);
        mv.captured_piece = game_state.piece_at(captured_sq);
        game_state.set_piece(captured_sq, None);
    }

    game_state.set_piece(mv.from, None);
    game_state.set_piece(mv.to, Some(mover));

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, None);
        game_state.set_piece(rook_to, rook);
    }

    if let Some(kind) = mv.promotion {
        game_state.set_piece(mv.to, Some(Piece::new(mover.color, kind)));
    }

    update_castling_rights(game_state, &mv);

    game_state.en_passant_square = None;
    if mover.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
        game_state.en_passant_square = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.move_log.push(mv);
}

/// Pops and reverts the last move. Returns `None` with the state untouched
/// when the log is empty.
pub fn unmake_move(game_state: &mut GameState) -> Option<ChessMove> {
    let mv = game_state.move_log.pop()?;

    game_state.set_piece(mv.from, Some(mv.moving_piece));
    game_state.set_piece(mv.to, mv.captured_piece);

    if mv.promotion.is_some() {
        game_state.set_piece(
            mv.from,
            Some(Piece::new(mv.moving_piece.color, PieceKind::Pawn)),
        );
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, None);
        game_state.set_piece(rook_from, rook);
    }

    if mv.is_en_passant {
        game_state.set_piece(mv.to, None);
        game_state.set_piece(en_passant_victim_square(&mv), mv.captured_piece);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.en_passant_square = mv.prior_en_passant;
    game_state.castling_rights = mv.prior_castling_rights;

    Some(mv)
}

/// The pawn taken en passant sits one row behind the destination, on the
/// mover's side.
#[inline]
fn en_passant_victim_square(mv: &ChessMove) -> Square {
    let back = -mv.moving_piece.color.pawn_direction();
    Square::new((mv.to.row as i8 + back) as u8, mv.to.col)
}

#[inline]
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    let row = mv.from.row;
    if mv.to.col == KINGSIDE_CASTLE_DEST_COL {
        (Square::new(row, KINGSIDE_ROOK_COL), Square::new(row, KINGSIDE_ROOK_DEST_COL))
    } else {
        (Square::new(row, QUEENSIDE_ROOK_COL), Square::new(row, QUEENSIDE_ROOK_DEST_COL))
    }
}

/// A king move drops both of its color's rights. Any move leaving or
/// entering a rook corner drops that corner's right, whatever piece is
/// involved.
fn update_castling_rights(game_state: &mut GameState, mv: &ChessMove) {
    if mv.moving_piece.kind == PieceKind::King {
        let color = mv.moving_piece.color;
        game_state.castling_rights &= !(kingside_right(color) | queenside_right(color));
    }

    for (corner, right) in ROOK_CORNERS {
        if mv.from == corner || mv.to == corner {
            game_state.castling_rights &= !right;
        }
    }
}
