//! Error types for the parsing and controller boundaries.
//!
//! The board, generator and search never fail: they assume the controller
//! already gated the input. Only text input and player requests can go wrong.

use thiserror::Error;

use crate::board::{Color, Square};

/// Failure to read squares, colors or layout strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square notation '{0}'")]
    InvalidSquare(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("layout must have 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} covers {width} squares instead of 8")]
    RowWidth { row: usize, width: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
}

/// A player request the controller refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("piece on {square} belongs to {color}, {turn} is to move")]
    NotYourPiece {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[error("{from} cannot move to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("game is over, {0} won")]
    GameOver(Color),
}
