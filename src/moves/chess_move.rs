//! Move record produced by generation and consumed by make/unmake.
//!
//! A `ChessMove` is built by the generator with the prior-state snapshot left
//! blank; `make_move` fills in the snapshot (and the real captured pawn for
//! en passant) before pushing the move onto the state's log.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    /// En-passant target before this move, set at apply time.
    pub prior_en_passant: Option<Square>,
    /// Castling rights before this move, set at apply time.
    pub prior_castling_rights: CastlingRights,
}

impl ChessMove {
    /// A plain move or capture.
    pub fn new(from: Square, to: Square, moving_piece: Piece, captured_piece: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moving_piece,
            captured_piece,
            promotion: None,
            is_castle: false,
            is_en_passant: false,
            prior_en_passant: None,
            prior_castling_rights: 0,
        }
    }

    pub fn promoting(
        from: Square,
        to: Square,
        moving_piece: Piece,
        captured_piece: Option<Piece>,
        promotion: PieceKind,
    ) -> Self {
        Self {
            promotion: Some(promotion),
            ..Self::new(from, to, moving_piece, captured_piece)
        }
    }

    pub fn castle(from: Square, to: Square, king: Piece) -> Self {
        Self {
            is_castle: true,
            ..Self::new(from, to, king, None)
        }
    }

    pub fn en_passant(from: Square, to: Square, pawn: Piece) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(
                from,
                to,
                pawn,
                Some(Piece::new(pawn.color.opposite(), PieceKind::Pawn)),
            )
        }
    }

    /// True when a pawn lands on its final rank and so needs a promotion piece.
    #[inline]
    pub fn requires_promotion(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn
            && self.to.row as i8 == self.moving_piece.color.promotion_row()
    }

    /// Copy of this move with the promotion piece chosen.
    #[inline]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Copy without a promotion piece, the placeholder a UI holds while the
    /// player is still choosing.
    #[inline]
    pub fn without_promotion(self) -> Self {
        Self {
            promotion: None,
            ..self
        }
    }
}

impl fmt::Display for ChessMove {
    /// Coordinate form such as `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_to_algebraic(self.from), square_to_algebraic(self.to))?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::*;

    #[test]
    fn displays_coordinate_text() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let push = ChessMove::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
        assert_eq!(push.to_string(), "e2e4");

        let promo = ChessMove::promoting(Square::new(1, 0), Square::new(0, 0), pawn, None, PieceKind::Queen);
        assert_eq!(promo.to_string(), "a7a8q");
    }

    #[test]
    fn promotion_requirement_depends_on_mover_color() {
        let white_pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        let white_last = ChessMove::new(Square::new(1, 2), Square::new(0, 2), white_pawn, None);
        let black_last = ChessMove::new(Square::new(6, 2), Square::new(7, 2), black_pawn, None);
        let black_wrong_way = ChessMove::new(Square::new(1, 2), Square::new(0, 2), black_pawn, None);
        assert!(white_last.requires_promotion());
        assert!(black_last.requires_promotion());
        assert!(!black_wrong_way.requires_promotion());

        let finalized = white_last.with_promotion(PieceKind::Knight);
        assert_eq!(finalized.promotion, Some(PieceKind::Knight));
        assert!(finalized.without_promotion().promotion.is_none());
    }

    #[test]
    fn en_passant_constructor_records_enemy_pawn() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let ep = ChessMove::en_passant(Square::new(3, 4), Square::new(2, 3), pawn);
        assert!(ep.is_en_passant);
        assert_eq!(ep.captured_piece, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
    }
}
