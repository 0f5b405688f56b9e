//! Interactive game session: square selection, two-phase promotion and the
//! built-in opponent, with no rendering attached.
//!
//! A session owns a single `GameState`. Human input arrives as square clicks;
//! the session caches the legal moves of the selected piece and turns a click
//! on one of their destinations into a move. Pawn moves onto the last rank
//! stop in `PromotionState::AwaitingChoice` until a piece is chosen.

use std::fmt;

use crate::engines::difficulty::DifficultyTier;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoPromotionPending,
    InvalidPromotionPiece(PieceKind),
    Engine(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoPromotionPending => write!(f, "no promotion is pending"),
            SessionError::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {:?}", kind)
            }
            SessionError::Engine(msg) => write!(f, "engine error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionState {
    Idle,
    /// The pawn move waiting for its promotion piece. Its `promotion` is unset.
    AwaitingChoice(ChessMove),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game over or a promotion choice is outstanding.
    Ignored,
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    Cleared,
    Moved(ChessMove),
    PromotionPending(ChessMove),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given color is in check but has a legal reply.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{} is in check", color.name()),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

pub struct GameSession {
    game_state: GameState,
    selected: Option<Square>,
    cached_moves: Vec<ChessMove>,
    promotion: PromotionState,
    pub engine_enabled: bool,
    pub engine_color: Color,
    pub tier: DifficultyTier,
    random_engine: RandomEngine,
    minimax_engine: MinimaxEngine,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_random_engine(RandomEngine::new())
    }

    /// Session whose easy tier draws from a seeded generator.
    pub fn with_engine_seed(seed: u64) -> Self {
        Self::with_random_engine(RandomEngine::with_seed(seed))
    }

    fn with_random_engine(random_engine: RandomEngine) -> Self {
        Self {
            game_state: GameState::new_game(),
            selected: None,
            cached_moves: Vec::new(),
            promotion: PromotionState::Idle,
            engine_enabled: true,
            engine_color: Color::Dark,
            tier: DifficultyTier::default(),
            random_engine,
            minimax_engine: MinimaxEngine::default(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let mut session = Self::new();
        session.game_state = GameState::from_fen(fen)?;
        Ok(session)
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn promotion_state(&self) -> PromotionState {
        self.promotion
    }

    /// Destinations of the cached moves, one entry per square.
    pub fn highlighted_destinations(&self) -> Vec<Square> {
        let mut destinations: Vec<Square> = Vec::new();
        for mv in &self.cached_moves {
            if !destinations.contains(&mv.to) {
                destinations.push(mv.to);
            }
        }
        destinations
    }

    pub fn status(&mut self) -> GameStatus {
        let side = self.game_state.side_to_move;
        let has_move = self.game_state.has_legal_move();
        let in_check = self.game_state.in_check(side);
        match (has_move, in_check) {
            (false, true) => GameStatus::Checkmate {
                winner: side.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::InProgress,
        }
    }

    pub fn is_game_over(&mut self) -> bool {
        !self.game_state.has_legal_move()
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.promotion != PromotionState::Idle || self.is_game_over() {
            return ClickOutcome::Ignored;
        }

        if self.selected.is_some() {
            if let Some(mv) = self.cached_moves.iter().find(|mv| mv.to == square).copied() {
                self.clear_selection();
                if mv.requires_promotion() {
                    let pending = mv.without_promotion();
                    self.promotion = PromotionState::AwaitingChoice(pending);
                    return ClickOutcome::PromotionPending(pending);
                }
                self.game_state.apply(mv);
                return ClickOutcome::Moved(mv);
            }
        }

        match self.game_state.piece_at(square) {
            Some(piece) if piece.color == self.game_state.side_to_move => {
                self.selected = Some(square);
                self.cached_moves = self.game_state.legal_moves_from(square);
                ClickOutcome::Selected {
                    square,
                    destinations: self.highlighted_destinations(),
                }
            }
            _ => {
                self.clear_selection();
                ClickOutcome::Cleared
            }
        }
    }

    /// Finishes a pending promotion with `kind` and plays it.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<ChessMove, SessionError> {
        let PromotionState::AwaitingChoice(pending) = self.promotion else {
            return Err(SessionError::NoPromotionPending);
        };
        if !PROMOTION_KINDS.contains(&kind) {
            return Err(SessionError::InvalidPromotionPiece(kind));
        }

        let finalized = pending.with_promotion(kind);
        self.promotion = PromotionState::Idle;
        self.game_state.apply(finalized);
        Ok(finalized)
    }

    /// Takes back the last move, whoever played it.
    pub fn undo(&mut self) -> Option<ChessMove> {
        self.clear_selection();
        self.promotion = PromotionState::Idle;
        self.game_state.undo()
    }

    pub fn reset(&mut self) {
        self.game_state = GameState::new_game();
        self.clear_selection();
        self.promotion = PromotionState::Idle;
        self.random_engine.new_game();
        self.minimax_engine.new_game();
    }

    pub fn is_engine_turn(&mut self) -> bool {
        self.engine_enabled
            && self.game_state.side_to_move == self.engine_color
            && self.promotion == PromotionState::Idle
            && !self.is_game_over()
    }

    /// Lets the engine move if it is its turn. Returns `Ok(None)` otherwise.
    pub fn play_engine_move(&mut self) -> Result<Option<EngineOutput>, SessionError> {
        if !self.is_engine_turn() {
            return Ok(None);
        }

        let params = GoParams {
            depth: Some(self.tier.depth()),
        };
        let engine: &mut dyn Engine = match self.tier {
            DifficultyTier::Easy => &mut self.random_engine,
            DifficultyTier::Normal | DifficultyTier::Hard => &mut self.minimax_engine,
        };
        let mut output = engine
            .choose_move(&mut self.game_state, &params)
            .map_err(SessionError::Engine)?;
        output
            .info_lines
            .insert(0, format!("info string engine {} tier {}", engine.name(), self.tier));

        if let Some(mv) = output.best_move {
            self.game_state.apply(mv);
            self.clear_selection();
        }
        Ok(Some(output))
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.cached_moves.clear();
    }
}
