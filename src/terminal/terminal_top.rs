//! Line-oriented terminal front-end and command loop.
//!
//! Reads one command per line, drives a `GameSession`, and lets the engine
//! reply whenever it is its turn. Engine diagnostics are echoed with a
//! wall-clock timestamp.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::engines::difficulty::DifficultyTier;
use crate::engines::engine_trait::EngineOutput;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::perft::perft;
use crate::session::game_session::{ClickOutcome, GameSession, GameStatus};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::render_game_state::render_game_state;

const MAX_PERFT_DEPTH: u8 = 6;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(GameSession::new());

    writeln!(stdout, "{}", render_game_state(terminal.session.game_state()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    fn new(session: GameSession) -> Self {
        Self { session }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default();

        match cmd {
            "move" => {
                if let Err(err) = self.handle_move(arg, out) {
                    writeln!(out, "info string move error: {}", err)?;
                }
            }
            "promote" => match parse_promotion_kind(arg) {
                Ok(kind) => match self.session.choose_promotion(kind) {
                    Ok(mv) => self.after_human_move(mv, out)?,
                    Err(err) => writeln!(out, "info string promote error: {}", err)?,
                },
                Err(err) => writeln!(out, "info string promote error: {}", err)?,
            },
            "undo" => {
                match self.session.undo() {
                    Some(mv) => writeln!(out, "undone {}", mv)?,
                    None => writeln!(out, "nothing to undo")?,
                }
                self.engine_reply(out)?;
            }
            "reset" => {
                self.session.reset();
                writeln!(out, "{}", render_game_state(self.session.game_state()))?;
            }
            "level" => match arg.parse::<DifficultyTier>() {
                Ok(tier) => {
                    self.session.tier = tier;
                    writeln!(out, "level {} depth {}", tier, tier.depth())?;
                }
                Err(err) => writeln!(out, "info string level error: {}", err)?,
            },
            "engine" => match arg {
                "on" => {
                    self.session.engine_enabled = true;
                    writeln!(out, "engine on, playing {}", self.session.engine_color.name())?;
                    self.engine_reply(out)?;
                }
                "off" => {
                    self.session.engine_enabled = false;
                    writeln!(out, "engine off")?;
                }
                other => writeln!(out, "info string engine error: expected on|off, got '{}'", other)?,
            },
            "board" => {
                writeln!(out, "{}", render_game_state(self.session.game_state()))?;
            }
            "fen" => {
                writeln!(out, "{}", self.session.game_state().get_fen())?;
            }
            "moves" => {
                let mut game_state = self.session.game_state().clone();
                let moves: Vec<String> = game_state
                    .legal_moves()
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                writeln!(out, "{} legal: {}", moves.len(), moves.join(" "))?;
            }
            "perft" => match arg.parse::<u8>() {
                Ok(depth) if depth <= MAX_PERFT_DEPTH => {
                    let mut game_state = self.session.game_state().clone();
                    let counts = perft(&LegalMoveGenerator, &mut game_state, depth);
                    writeln!(
                        out,
                        "perft {} nodes {} captures {} ep {} castles {} promotions {} checks {} mates {}",
                        depth,
                        counts.nodes,
                        counts.captures,
                        counts.en_passant,
                        counts.castles,
                        counts.promotions,
                        counts.checks,
                        counts.checkmates
                    )?;
                }
                _ => writeln!(
                    out,
                    "info string perft error: depth must be 0..={}, got '{}'",
                    MAX_PERFT_DEPTH, arg
                )?,
            },
            "quit" => {
                return Ok(true);
            }
            _ => match algebraic_to_square(cmd) {
                Ok(square) => {
                    let outcome = self.session.click(square);
                    self.report_click(outcome, out)?;
                }
                Err(_) => writeln!(out, "info string unknown command '{}'", cmd)?,
            },
        }

        Ok(false)
    }

    /// `move e2e4` or `move e7e8q`, played as two clicks.
    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> Result<(), String> {
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(format!("expected coordinates like e2e4, got '{}'", text));
        }
        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;
        let promotion = text.get(4..5).map(parse_promotion_kind).transpose()?;

        match self.session.click(from) {
            ClickOutcome::Selected { .. } => {}
            ClickOutcome::Ignored => return Err("input is blocked".to_owned()),
            _ => return Err(format!("no piece of the side to move on {}", &text[0..2])),
        }

        let io_err = |err: io::Error| err.to_string();
        match self.session.click(to) {
            ClickOutcome::Moved(mv) => self.after_human_move(mv, out).map_err(io_err),
            ClickOutcome::PromotionPending(pending) => match promotion {
                Some(kind) => {
                    let mv = self.session.choose_promotion(kind).map_err(|e| e.to_string())?;
                    self.after_human_move(mv, out).map_err(io_err)
                }
                None => self.report_click(ClickOutcome::PromotionPending(pending), out).map_err(io_err),
            },
            _ => Err(format!("{} is not a legal move", text)),
        }
    }

    fn report_click(&mut self, outcome: ClickOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            ClickOutcome::Ignored => writeln!(out, "input ignored ({})", self.session.status()),
            ClickOutcome::Selected { square, destinations } => {
                let targets: Vec<String> = destinations.into_iter().map(square_to_algebraic).collect();
                writeln!(
                    out,
                    "selected {} -> {}",
                    square_to_algebraic(square),
                    targets.join(" ")
                )
            }
            ClickOutcome::Cleared => writeln!(out, "selection cleared"),
            ClickOutcome::Moved(mv) => self.after_human_move(mv, out),
            ClickOutcome::PromotionPending(mv) => {
                writeln!(out, "promotion pending {}, choose with promote q|r|b|n", mv)
            }
        }
    }

    fn after_human_move(&mut self, mv: ChessMove, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "played {}", mv)?;
        self.report_status(out)?;
        self.engine_reply(out)
    }

    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.play_engine_move() {
            Ok(Some(output)) => {
                write_info_lines(&output, out)?;
                match output.best_move {
                    Some(mv) => writeln!(out, "engine plays {}", mv)?,
                    None => writeln!(out, "engine has no move")?,
                }
                writeln!(out, "{}", render_game_state(self.session.game_state()))?;
                self.report_status(out)
            }
            Ok(None) => Ok(()),
            Err(err) => writeln!(out, "info string engine error: {}", err),
        }
    }

    fn report_status(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.status() {
            GameStatus::InProgress => Ok(()),
            status => writeln!(out, "{}", status),
        }
    }
}

fn write_info_lines(output: &EngineOutput, out: &mut impl Write) -> io::Result<()> {
    let stamp = Local::now().format("%H:%M:%S%.3f");
    for line in &output.info_lines {
        writeln!(out, "[{}] {}", stamp, line)?;
    }
    Ok(())
}

fn parse_promotion_kind(text: &str) -> Result<PieceKind, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match PieceKind::from_char(c.to_ascii_lowercase()) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) => Ok(kind),
            _ => Err(format!("'{}' is not one of q, r, b, n", text)),
        },
        _ => Err(format!("'{}' is not one of q, r, b, n", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_promotion_kind, TerminalState};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::session::game_session::GameSession;

    fn run(terminal: &mut TerminalState, line: &str) -> (bool, String) {
        let mut out = Vec::<u8>::new();
        let quit = terminal
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (quit, String::from_utf8(out).expect("utf8 output"))
    }

    fn human_only(fen: &str) -> TerminalState {
        let mut session = GameSession::from_fen(fen).expect("valid FEN");
        session.engine_enabled = false;
        TerminalState::new(session)
    }

    #[test]
    fn square_clicks_select_and_move() {
        let mut terminal = human_only("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let (_, text) = run(&mut terminal, "e2");
        assert_eq!(text.trim(), "selected e2 -> e3 e4");
        let (_, text) = run(&mut terminal, "e4");
        assert!(text.contains("played e2e4"));
        assert_eq!(terminal.session.game_state().side_to_move, Color::Dark);
    }

    #[test]
    fn move_command_gets_an_engine_reply() {
        let mut session = GameSession::with_engine_seed(11);
        session.tier = "easy".parse().expect("valid tier");
        let mut terminal = TerminalState::new(session);
        let (_, text) = run(&mut terminal, "move g1f3");
        assert!(text.contains("played g1f3"));
        assert!(text.contains("engine plays"));
        assert!(text.contains("info string random_engine legal_moves 20"));
        assert_eq!(terminal.session.game_state().move_log.len(), 2);
    }

    #[test]
    fn move_with_suffix_promotes() {
        let mut terminal = human_only("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let (_, text) = run(&mut terminal, "move a7a8r");
        assert!(text.contains("played a7a8r"));
        assert_eq!(terminal.session.game_state().get_fen(), "R3k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn promote_command_finishes_pending_move() {
        let mut terminal = human_only("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let (_, text) = run(&mut terminal, "move a7a8");
        assert!(text.contains("promotion pending a7a8"));
        let (_, text) = run(&mut terminal, "promote x");
        assert!(text.contains("promote error"));
        let (_, text) = run(&mut terminal, "promote q");
        assert!(text.contains("played a7a8q"));
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut terminal = human_only("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let (_, text) = run(&mut terminal, "move e2e5");
        assert!(text.contains("move error: e2e5 is not a legal move"));
        let (_, text) = run(&mut terminal, "move e7e5");
        assert!(text.contains("move error"));
        assert!(terminal.session.game_state().move_log.is_empty());
    }

    #[test]
    fn settings_and_inspection_commands() {
        let mut terminal = human_only("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let (_, text) = run(&mut terminal, "level hard");
        assert_eq!(text.trim(), "level hard depth 3");
        let (_, text) = run(&mut terminal, "level impossible");
        assert!(text.contains("level error"));
        let (_, text) = run(&mut terminal, "moves");
        assert!(text.starts_with("20 legal: a2a3 a2a4"));
        let (_, text) = run(&mut terminal, "perft 2");
        assert!(text.starts_with("perft 2 nodes 400 "));
        let (_, text) = run(&mut terminal, "fen");
        assert_eq!(text.trim(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let (_, text) = run(&mut terminal, "frobnicate");
        assert!(text.contains("unknown command 'frobnicate'"));
    }

    #[test]
    fn undo_and_quit() {
        let mut terminal = human_only("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        run(&mut terminal, "move d2d4");
        let (_, text) = run(&mut terminal, "undo");
        assert_eq!(text.trim(), "undone d2d4");
        let (_, text) = run(&mut terminal, "undo");
        assert_eq!(text.trim(), "nothing to undo");
        let (quit, _) = run(&mut terminal, "quit");
        assert!(quit);
    }

    #[test]
    fn checkmate_is_announced() {
        let mut terminal = human_only("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let (_, text) = run(&mut terminal, "move a1a8");
        assert!(text.contains("checkmate, white wins"));
    }

    #[test]
    fn promotion_letters() {
        assert_eq!(parse_promotion_kind("q"), Ok(PieceKind::Queen));
        assert_eq!(parse_promotion_kind("N"), Ok(PieceKind::Knight));
        assert!(parse_promotion_kind("k").is_err());
        assert!(parse_promotion_kind("qq").is_err());
    }
}
