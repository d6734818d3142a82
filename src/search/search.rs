//! Minimax search
//!
//! Plain depth-limited minimax over cloned boards: every successor of every
//! node is expanded down to the requested depth, without pruning, ordering or
//! caching. Black maximizes the evaluation and White minimizes it.
//!
//! Among equally scored candidates the one examined last is kept. The choice
//! is arbitrary but stable, and callers depend on it for reproducible games.

use tracing::debug;

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Color};
use crate::eval::{Score, MAXIMIZER};
use crate::movegen::{successors, Move, Successor};

/// Outcome of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Minimax value of the root
    pub score: Score,

    /// Board after the chosen move, or the root itself when none was chosen
    pub board: Board,

    /// The chosen move; `None` at depth 0, on a decided board, or when the
    /// side to move is blocked
    pub best_move: Option<Move>,

    /// Depth the search ran to
    pub depth: u32,
}

/// Main search engine
pub struct Search {
    params: SearchParams,
    stats: SearchStats,
}

impl Search {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            stats: SearchStats::new(),
        }
    }

    /// Search with default parameters at the given depth
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchParams::new().depth(depth))
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.params.depth = depth;
    }

    /// Statistics of the last call to [`Search::search`]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Picks a move for `to_move` at the configured depth.
    pub fn search(&mut self, board: &Board, to_move: Color) -> SearchResult {
        let depth = self.params.depth;

        self.stats.reset();
        self.stats.start_timing();
        let (score, best) = self.expand(board, depth, to_move, true);
        self.stats.update_timing();
        self.stats.log_summary();

        match best {
            Some(Successor { mv, board }) => SearchResult {
                score,
                board,
                best_move: Some(mv),
                depth,
            },
            None => SearchResult {
                score,
                board: board.clone(),
                best_move: None,
                depth,
            },
        }
    }

    /// Minimax value of `board` with `to_move` on turn, and the successor
    /// board that achieves it. Terminal boards are returned unchanged.
    pub fn minimax(&mut self, board: &Board, depth: u32, to_move: Color) -> (Score, Board) {
        let (score, best) = self.expand(board, depth, to_move, false);
        let next = match best {
            Some(successor) => successor.board,
            None => board.clone(),
        };
        (score, next)
    }

    fn expand(
        &mut self,
        board: &Board,
        depth: u32,
        to_move: Color,
        root: bool,
    ) -> (Score, Option<Successor>) {
        self.stats.inc_node();

        if depth == 0 || board.winner().is_some() {
            self.stats.inc_leaf();
            return (board.evaluate(), None);
        }

        let maximizing = to_move == MAXIMIZER;
        // A side with no move keeps the starting extremum, i.e. it has lost
        let mut best_score = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };
        let mut best = None;

        let children = successors(board, to_move);
        if root {
            self.stats.root_moves = children.len() as u64;
        }

        for child in children {
            let (score, _) = self.expand(&child.board, depth - 1, to_move.opposite(), false);
            if root && self.params.trace_root {
                debug!(mv = %child.mv, score, "root candidate");
            }

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
            if score == best_score {
                best = Some(child);
            }
        }

        (best_score, best)
    }
}

/// One-shot minimax without keeping statistics around.
pub fn minimax(board: &Board, depth: u32, to_move: Color) -> (Score, Board) {
    let params = SearchParams::new().depth(depth).trace_root(false);
    Search::new(params).minimax(board, depth, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_creation() {
        let search = Search::with_depth(3);
        assert_eq!(search.params().depth, 3);
        assert_eq!(search.stats().nodes, 0);
    }

    #[test]
    fn depth_zero_returns_the_root() {
        let board = Board::new();
        let (score, next) = minimax(&board, 0, Color::Black);
        assert_eq!(score, 0.0);
        assert_eq!(next, board);
    }

    #[test]
    fn blocked_side_scores_as_lost() {
        // Black man on a1 hemmed in by its own man on b2 and the edge;
        // b2 itself is blocked by two white men in a row.
        let board = Board::from_layout("b7/1b6/w1w5/3w4/8/8/8/8").unwrap();
        let mut search = Search::with_depth(1);
        let result = search.search(&board, Color::Black);
        assert_eq!(result.score, Score::NEG_INFINITY);
        assert!(result.best_move.is_none());
        assert_eq!(result.board, board);
    }
}
