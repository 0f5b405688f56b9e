use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_empty_or_enemy, KNIGHT_OFFSETS};

pub fn generate_knight_moves(game_state: &GameState, from: Square, knight: Piece, out: &mut Vec<ChessMove>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_empty_or_enemy(game_state, to, knight.color) {
            out.push(ChessMove::new(from, to, knight, game_state.piece_at(to)));
        }
    }
}
