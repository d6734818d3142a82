//! Perft: counts the leaves of the move tree to a fixed depth.
//!
//! Used as a regression check on move generation; the sides alternate every
//! ply and a board with a winner stops counting below it.

use crate::board::{Board, Color};
use crate::movegen::successors;

pub fn perft(board: &Board, depth: u32, to_move: Color) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.winner().is_some() {
        return 0;
    }

    let children = successors(board, to_move);
    if depth == 1 {
        return children.len() as u64;
    }
    children
        .iter()
        .map(|child| perft(&child.board, depth - 1, to_move.opposite()))
        .sum()
}

/// Per-move leaf counts at the root, in generation order.
pub fn divide(board: &Board, depth: u32, to_move: Color) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    successors(board, to_move)
        .into_iter()
        .map(|child| {
            let nodes = perft(&child.board, depth - 1, to_move.opposite());
            (child.mv.to_string(), nodes)
        })
        .collect()
}
