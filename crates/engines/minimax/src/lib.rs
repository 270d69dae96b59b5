//! Minimax Reversi Engine
//!
//! Alpha-beta pruned minimax over full board copies, scored by material
//! count at the depth limit. This is the engine the interactive session
//! plays with by default.

mod search;

use reversi_core::{Board, Color, Engine, SearchResult};
use tracing::debug;

/// Reversi engine running a depth-limited minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(board, to_move, depth, &mut self.nodes);

        match result {
            Some((mv, score)) => debug!(
                "search done: move ({}, {}) score {} nodes {}",
                mv.row, mv.col, score, self.nodes
            ),
            None => debug!("search done: no legal move, passing"),
        }

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::pick_best_move;
