use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_DEST_COL, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_CASTLE_DEST_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{is_empty_or_enemy, KING_OFFSETS};

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    for (d_row, d_col) in KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_empty_or_enemy(game_state, to, king.color) {
            out.push(ChessMove::new(from, to, king, game_state.piece_at(to)));
        }
    }

    generate_castling_moves(game_state, from, king, out);
}

/// Castling needs the right, an empty path to the rook, and no attack on the
/// king's origin, the square it crosses, or its destination.
fn generate_castling_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    let side = king.color;
    if from.row as i8 != side.back_rank_row() || from.col != KING_START_COL {
        return;
    }

    let row = from.row;
    let enemy = side.opposite();
    let empty = |cols: &[u8]| cols.iter().all(|&col| game_state.is_empty(Square::new(row, col)));
    let safe = |cols: &[u8]| {
        cols.iter()
            .all(|&col| !is_square_attacked(game_state, Square::new(row, col), enemy))
    };

    if game_state.castling_rights & kingside_right(side) != 0
        && empty(&[KING_START_COL + 1, KINGSIDE_ROOK_COL - 1])
        && safe(&[KING_START_COL, KING_START_COL + 1, KINGSIDE_CASTLE_DEST_COL])
    {
        out.push(ChessMove::castle(from, Square::new(row, KINGSIDE_CASTLE_DEST_COL), king));
    }

    if game_state.castling_rights & queenside_right(side) != 0
        && empty(&[QUEENSIDE_ROOK_COL + 1, QUEENSIDE_ROOK_COL + 2, KING_START_COL - 1])
        && safe(&[KING_START_COL, KING_START_COL - 1, QUEENSIDE_CASTLE_DEST_COL])
    {
        out.push(ChessMove::castle(from, Square::new(row, QUEENSIDE_CASTLE_DEST_COL), king));
    }
}
