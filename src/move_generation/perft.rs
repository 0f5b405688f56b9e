//! Perft: exhaustive move-path counting used to validate generation and
//! make/unmake against published node counts.

use std::sync::Arc;
use std::thread;

use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, mv, depth, &mut total);
    }
    total
}

/// Splits the root moves across threads. Every worker searches its own copy
/// of the position; a `GameState` is never shared between threads.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    let root_moves = generator.generate_legal_moves(&mut root);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut local_state = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mut local_state, mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: ChessMove,
    depth_left: u8,
    counts: &mut PerftCounts,
) {
    game_state.apply(mv);

    if depth_left == 1 {
        counts.nodes += 1;

        if mv.captured_piece.is_some() {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castle {
            counts.castles += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if game_state.in_check(game_state.side_to_move) {
            counts.checks += 1;
            if !has_legal_move(game_state) {
                counts.checkmates += 1;
            }
        }
    } else {
        for child in generator.generate_legal_moves(game_state) {
            perft_recurse(generator, game_state, child, depth_left - 1, counts);
        }
    }

    game_state.undo();
}
