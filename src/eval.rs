//! Static evaluation.
//!
//! Material only: one point per remaining piece and half a point per
//! promotion, always from Black's point of view. Black is therefore the
//! maximizing side of the search and White the minimizing one.

use crate::board::{Board, Color};

/// Evaluation score. Values are whole or half points, exact in `f32`.
pub type Score = f32;

/// Side whose advantage makes the score grow.
pub const MAXIMIZER: Color = Color::Black;

const PIECE_VALUE: Score = 1.0;
const KING_BONUS: Score = 0.5;

pub fn evaluate(board: &Board) -> Score {
    let material = Score::from(board.remaining(Color::Black)) - Score::from(board.remaining(Color::White));
    let kings = Score::from(board.kings(Color::Black)) - Score::from(board.kings(Color::White));
    PIECE_VALUE * material + KING_BONUS * kings
}
