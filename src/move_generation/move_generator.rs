use crate::game_state::{chess_types::ChessMove, game_state::GameState};

/// Source of legal moves for search and perft.
///
/// Takes the state mutably because legality is decided by making and
/// unmaking candidates; implementations must leave the state as they found it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}
