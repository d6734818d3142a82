//! Move generation.
//!
//! A piece scans each of its diagonals two squares deep: an empty neighbour
//! is a plain step, an opponent followed by an empty square is a jump. Every
//! jump restarts the scan from the landing square on both diagonals of the
//! same row direction, carrying the pieces captured so far, which is how
//! multi-jump chains are found. Capturing is optional, so plain steps and
//! jumps of the same piece show up side by side.

use std::fmt;

use indexmap::IndexMap;

use crate::board::{Board, Cell, Color, Piece, Square};

/// Destination square mapped to the pieces jumped on the way, in capture
/// order. Iteration follows discovery order; a later chain reaching the same
/// destination replaces the earlier capture list in place.
pub type ValidMoves = IndexMap<Square, Vec<Piece>>;

// One adjacent opponent plus the landing square behind it
const SCAN_DEPTH: i8 = 2;

const LEFT: i8 = -1;
const RIGHT: i8 = 1;

/// A fully specified move, as produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub to: Square,
    pub captures: Vec<Piece>,
}

impl Move {
    pub fn from(&self) -> Square {
        self.piece.square
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.piece.square, sep, self.to)
    }
}

/// A move together with the board it leads to.
#[derive(Debug, Clone)]
pub struct Successor {
    pub mv: Move,
    pub board: Board,
}

/// Row directions a piece may travel in. Kings scan towards row 0 first.
fn row_directions(piece: &Piece) -> impl Iterator<Item = i8> {
    let up = (piece.king || piece.color == Color::White).then_some(-1);
    let down = (piece.king || piece.color == Color::Black).then_some(1);
    up.into_iter().chain(down)
}

pub fn valid_moves(board: &Board, piece: &Piece) -> ValidMoves {
    let mut moves = ValidMoves::new();
    for row_step in row_directions(piece) {
        for col_step in [LEFT, RIGHT] {
            traverse(board, piece.color, piece.square, row_step, col_step, &[], &mut moves);
        }
    }
    moves
}

/// Scans one diagonal from `origin`. `skipped` holds the captures made to
/// reach `origin`; when it is non-empty only further jumps are recorded.
fn traverse(
    board: &Board,
    color: Color,
    origin: Square,
    row_step: i8,
    col_step: i8,
    skipped: &[Piece],
    moves: &mut ValidMoves,
) {
    let mut jumped: Option<Piece> = None;

    for distance in 1..=SCAN_DEPTH {
        let Some(square) = origin.offset(row_step * distance, col_step * distance) else {
            break;
        };

        match board.get(square) {
            Cell::Empty => {
                let Some(victim) = jumped else {
                    if skipped.is_empty() {
                        moves.insert(square, Vec::new());
                    }
                    break;
                };

                let mut captures = Vec::with_capacity(skipped.len() + 1);
                captures.extend_from_slice(skipped);
                captures.push(victim);
                moves.insert(square, captures.clone());

                for next_col_step in [LEFT, RIGHT] {
                    traverse(board, color, square, row_step, next_col_step, &captures, moves);
                }
                break;
            }
            Cell::Occupied(other) if other.color == color => break,
            Cell::Occupied(other) => {
                if jumped.is_some() {
                    break;
                }
                jumped = Some(other);
            }
        }
    }
}

/// Every move available to `color`, each applied to its own copy of the board.
/// Pieces are taken in row-major order and their moves in mapping order.
pub fn successors(board: &Board, color: Color) -> Vec<Successor> {
    let mut out = Vec::new();
    for piece in board.all_pieces(color) {
        for (to, captures) in valid_moves(board, &piece) {
            let mut next = board.clone();
            next.apply(&piece, to, &captures);
            out.push(Successor {
                mv: Move {
                    piece,
                    to,
                    captures,
                },
                board: next,
            });
        }
    }
    out
}
