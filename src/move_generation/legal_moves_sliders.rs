use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};

/// Bishop, rook and queen moves. Diagonal rays come before straight ones.
pub fn generate_slider_moves(game_state: &GameState, from: Square, slider: Piece, out: &mut Vec<ChessMove>) {
    let (diagonals, straights) = match slider.kind {
        PieceKind::Bishop => (true, false),
        PieceKind::Rook => (false, true),
        PieceKind::Queen => (true, true),
        _ => return,
    };

    if diagonals {
        cast_rays(game_state, from, slider, &DIAGONAL_DIRECTIONS, out);
    }
    if straights {
        cast_rays(game_state, from, slider, &STRAIGHT_DIRECTIONS, out);
    }
}

fn cast_rays(
    game_state: &GameState,
    from: Square,
    slider: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut next = from.offset(d_row, d_col);
        while let Some(to) = next {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to, slider, None)),
                Some(blocker) => {
                    if blocker.color != slider.color {
                        out.push(ChessMove::new(from, to, slider, Some(blocker)));
                    }
                    break;
                }
            }
            next = to.offset(d_row, d_col);
        }
    }
}
