//! Fixed-depth minimax engine.
//!
//! Runs the alpha-beta root selection at a configured depth and reports the
//! chosen score and search effort as info lines.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{select_best_move, SearchStats};

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

pub struct MinimaxEngine {
    scorer: Box<dyn BoardScorer>,
    default_depth: u8,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self::with_scorer(default_depth, Box::new(MaterialScorer))
    }

    pub fn with_scorer(default_depth: u8, scorer: Box<dyn BoardScorer>) -> Self {
        Self {
            scorer,
            default_depth,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "GridChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let start = Instant::now();
        let mut stats = SearchStats::default();

        let result = select_best_move(self.scorer.as_ref(), game_state, depth, &mut stats);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string minimax_engine depth {}", depth));
        out.info_lines.push(format!(
            "info string minimax_engine nodes {} time_us {}",
            stats.nodes,
            start.elapsed().as_micros()
        ));

        if let Some(result) = result {
            out.info_lines.push(format!(
                "info string minimax_engine best {} score {}",
                result.best_move, result.score
            ));
            out.best_move = Some(result.best_move);
        }

        Ok(out)
    }
}
