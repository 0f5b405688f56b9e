use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;

/// Pushes, double pushes, captures (each promotion choice as its own move)
/// and en passant for the pawn on `from`.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<ChessMove>) {
    let side = pawn.color;
    let dir = side.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if game_state.is_empty(one_step) {
            push_pawn_move(from, one_step, pawn, None, out);

            if from.row as i8 == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if game_state.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(captured) = enemy_piece_on(game_state, to, side) {
            push_pawn_move(from, to, pawn, Some(captured), out);
        }
    }

    if let Some(target) = game_state.en_passant_square {
        if from.row as i8 + dir == target.row as i8 && from.col.abs_diff(target.col) == 1 {
            out.push(ChessMove::en_passant(from, target, pawn));
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    out: &mut Vec<ChessMove>,
) {
    if to.row as i8 == pawn.color.promotion_row() {
        for promo in PROMOTION_KINDS {
            out.push(ChessMove::promoting(from, to, pawn, captured, promo));
        }
    } else {
        out.push(ChessMove::new(from, to, pawn, captured));
    }
}
