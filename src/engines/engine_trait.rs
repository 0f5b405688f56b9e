//! Engine abstraction layer used by the game session and terminal front-end.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind a single trait.

use crate::game_state::{chess_types::ChessMove, game_state::GameState};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    /// Diagnostics in `info string ...` form.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move. The state is borrowed mutably for
    /// make/unmake and is returned unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
