//! Difficulty tiers for the built-in opponent.
//!
//! Easy plays a random legal move. Normal and Hard run minimax at
//! increasing depth.

use std::fmt;
use std::str::FromStr;

use rand::prelude::IndexedRandom;

use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{select_best_move, SearchStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Normal, Self::Hard];

    pub fn depth(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, normal or hard)")),
        }
    }
}

/// Picks a move for the side to move at the given tier.
///
/// `depth` is only consulted by the minimax tiers. Returns `None` when there
/// is no legal move. The state is left as it was found.
pub fn select_move(game_state: &mut GameState, depth: u8, tier: DifficultyTier) -> Option<ChessMove> {
    match tier {
        DifficultyTier::Easy => {
            let moves = game_state.legal_moves();
            moves.as_slice().choose(&mut rand::rng()).copied()
        }
        DifficultyTier::Normal | DifficultyTier::Hard => {
            let mut stats = SearchStats::default();
            select_best_move(&MaterialScorer, game_state, depth, &mut stats).map(|r| r.best_move)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{select_move, DifficultyTier};
    use crate::game_state::game_state::GameState;

    #[test]
    fn tiers_map_to_depths() {
        let depths: Vec<u8> = DifficultyTier::ALL.iter().map(|t| t.depth()).collect();
        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(DifficultyTier::default(), DifficultyTier::Normal);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("easy".parse::<DifficultyTier>(), Ok(DifficultyTier::Easy));
        assert_eq!(" Hard ".parse::<DifficultyTier>(), Ok(DifficultyTier::Hard));
        assert!("brutal".parse::<DifficultyTier>().is_err());
        for tier in DifficultyTier::ALL {
            assert_eq!(tier.to_string().parse::<DifficultyTier>(), Ok(tier));
        }
    }

    #[test]
    fn easy_returns_some_legal_move() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = select_move(&mut game, 1, DifficultyTier::Easy).expect("startpos has moves");
        assert_eq!(game, before);
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn minimax_tiers_take_free_material() {
        for tier in [DifficultyTier::Normal, DifficultyTier::Hard] {
            let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("valid FEN");
            let mv = select_move(&mut game, tier.depth(), tier).expect("legal moves");
            assert_eq!(mv.to_string(), "d1d5", "{tier}");
        }
    }

    #[test]
    fn every_tier_returns_none_without_moves() {
        for tier in DifficultyTier::ALL {
            let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid FEN");
            assert!(select_move(&mut game, tier.depth(), tier).is_none());
        }
    }
}
