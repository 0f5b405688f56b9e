//! FEN-to-GameState parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. The clock fields
//! are validated but not stored; the move log of a parsed position is empty.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;

    // Clocks are optional; many hand-written test positions omit them.
    if let Some(halfmove_part) = parts.next() {
        halfmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    }
    if let Some(fullmove_part) = parts.next() {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;
    }

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;

    validate_kings(&game_state)?;
    if let Some(target) = game_state.en_passant_square {
        validate_en_passant_target(&game_state, target)?;
    }

    Ok(game_state)
}

/// Exactly one king per color.
fn validate_kings(game_state: &GameState) -> Result<(), String> {
    for color in [Color::Light, Color::Dark] {
        let king = Some(Piece::new(color, PieceKind::King));
        let count = game_state
            .grid
            .iter()
            .flatten()
            .filter(|cell| **cell == king)
            .count();
        if count != 1 {
            return Err(format!("Expected one {} king, found {count}", color.name()));
        }
    }
    Ok(())
}

/// The target must be empty, on the rank the side to move captures onto, and
/// directly behind a pawn of the side that just moved.
fn validate_en_passant_target(game_state: &GameState, target: Square) -> Result<(), String> {
    let side = game_state.side_to_move;
    let capture_row = side.opposite().pawn_start_row() + side.opposite().pawn_direction();
    if target.row as i8 != capture_row {
        return Err(format!("En-passant target on the wrong rank for {}", side.name()));
    }
    if !game_state.is_empty(target) {
        return Err("En-passant target square is occupied".to_owned());
    }

    let pushed_pawn = target
        .offset(-side.pawn_direction(), 0)
        .and_then(|square| game_state.piece_at(square));
    if pushed_pawn != Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
        return Err("En-passant target has no pawn in front of it".to_owned());
    }
    Ok(())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is grid row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = Piece::from_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            game_state.grid[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
