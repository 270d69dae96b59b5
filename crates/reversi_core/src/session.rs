//! Live game state for one human-versus-computer session.

use crate::board::Board;
use crate::error::GameError;
use crate::movegen::{apply_move, has_any_legal_move, legal_moves};
use crate::types::{Color, Coord};
use crate::Engine;

/// Parameters fixed at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub human_color: Color,
    pub board_size: u8,
    pub search_depth: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_color: Color::Black,
            board_size: 8,
            search_depth: 3,
        }
    }
}

/// What the computer did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputerMove {
    Played { coord: Coord, flipped: u32 },
    Passed,
}

/// Final result, available once the game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    Winner(Color),
    Draw,
}

/// Owns the live board, the turn, the color binding, and the engine that
/// answers for the computer. All mutation goes through the move methods;
/// the search never touches the live board.
pub struct GameSession {
    board: Board,
    to_move: Color,
    human: Color,
    depth: u8,
    engine: Box<dyn Engine>,
}

impl GameSession {
    /// Starts a fresh game. Black moves first, so the engine opens when
    /// the human picked White.
    pub fn new(config: SessionConfig, engine: Box<dyn Engine>) -> Result<Self, GameError> {
        let board = Board::new(config.board_size)?;
        Self::from_position(
            board,
            Color::Black,
            config.human_color,
            config.search_depth,
            engine,
        )
    }

    /// Resumes from an arbitrary position. The board is already shaped by
    /// its own constructor; only the depth needs validating here.
    pub fn from_position(
        board: Board,
        to_move: Color,
        human_color: Color,
        search_depth: u8,
        mut engine: Box<dyn Engine>,
    ) -> Result<Self, GameError> {
        if search_depth == 0 {
            return Err(GameError::InvalidDepth {
                depth: search_depth,
            });
        }
        engine.new_game();
        Ok(Self {
            board,
            to_move,
            human: human_color,
            depth: search_depth,
            engine,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn to_move(&self) -> Color {
        self.to_move
    }
    pub fn human_color(&self) -> Color {
        self.human
    }
    pub fn computer_color(&self) -> Color {
        self.human.other()
    }
    pub fn is_human_turn(&self) -> bool {
        self.to_move == self.human
    }
    pub fn search_depth(&self) -> u8 {
        self.depth
    }
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Disk counts (black, white) on the live board.
    pub fn disk_counts(&self) -> (u32, u32) {
        self.board.count_disks()
    }

    /// Legal moves for `player` on the live board, for display.
    pub fn current_legal_moves(&self, player: Color) -> Vec<Coord> {
        legal_moves(&self.board, player)
    }

    /// Validates and applies a human move, then hands the turn over.
    /// Returns the flip count. Any failure, including calling this on the
    /// computer's turn, leaves board and turn exactly as they were.
    pub fn attempt_human_move(&mut self, coord: Coord) -> Result<u32, GameError> {
        if self.to_move != self.human {
            return Err(GameError::IllegalMove { coord });
        }
        let flipped = apply_move(&mut self.board, coord, self.human)?;
        self.to_move = self.to_move.other();
        Ok(flipped)
    }

    /// Runs the engine for the computer's turn. With no legal move the
    /// computer passes and only the turn changes. Panics when called on
    /// the human's turn; turn sequencing is the driver's responsibility.
    pub fn computer_move(&mut self) -> ComputerMove {
        let computer = self.human.other();
        assert!(
            self.to_move == computer,
            "computer_move called on the human's turn"
        );
        if !has_any_legal_move(&self.board, computer) {
            self.to_move = self.to_move.other();
            return ComputerMove::Passed;
        }
        let result = self.engine.select_move(&self.board, computer, self.depth);
        let coord = result
            .best_move
            .expect("engine returned no move in a position that has one");
        let flipped =
            apply_move(&mut self.board, coord, computer).expect("engine returned an illegal move");
        self.to_move = self.to_move.other();
        ComputerMove::Played { coord, flipped }
    }

    /// Forfeits the human's turn. Panics unless the human is to move and
    /// genuinely has no legal move.
    pub fn human_pass(&mut self) {
        assert!(
            self.to_move == self.human,
            "human_pass called on the computer's turn"
        );
        assert!(
            !has_any_legal_move(&self.board, self.human),
            "human_pass with legal moves available"
        );
        self.to_move = self.to_move.other();
    }

    /// True when neither color has a legal move.
    pub fn is_game_over(&self) -> bool {
        !has_any_legal_move(&self.board, Color::Black)
            && !has_any_legal_move(&self.board, Color::White)
    }

    /// Winner by disk count once the game is over, None while running.
    pub fn standing(&self) -> Option<Standing> {
        if !self.is_game_over() {
            return None;
        }
        let (black, white) = self.board.count_disks();
        Some(if black > white {
            Standing::Winner(Color::Black)
        } else if white > black {
            Standing::Winner(Color::White)
        } else {
            Standing::Draw
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
