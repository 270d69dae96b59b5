pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod session;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use movegen::*;
pub use perft::perft;
pub use session::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by everything that can pick a move
// =============================================================================

/// Result of one move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Coord>,
    /// Backed-up material score from the engine's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all Reversi engines must implement.
///
/// This allows swapping the alpha-beta searcher for the random baseline,
/// or anything else that can pick a move.
pub trait Engine: Send {
    /// Pick a move for `to_move` on `board`, thinking `depth` plies ahead.
    ///
    /// Engines that do not search (like the random baseline) may ignore
    /// `depth`. `best_move` is None exactly when `to_move` has no legal
    /// move.
    fn select_move(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
