//! Board state: an owned 8x8 grid of cells plus per-color counters.
//!
//! Row 0 is Black's home edge and row 7 is White's. Squares are written as a
//! file letter for the column followed by a rank digit for the row, so `b1`
//! is row 0, col 1.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::eval::{self, Score};
use crate::movegen::{self, ValidMoves};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Standard opening layout: twelve men per side on the dark squares.
pub const START_LAYOUT: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row step taken by a man of this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// Row where a man of this color is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::Black => 7,
            Color::White => 0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ParseError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    /// Builds a square from signed coordinates, `None` when off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..ROWS as i8).contains(&row) && (0..COLS as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + rows, self.col as i8 + cols)
    }

    /// Playable squares; the starting layout only uses these.
    pub fn is_dark(self) -> bool {
        self.col % 2 != self.row % 2
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, (b'1' + self.row) as char)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(rank - b'1', file - b'a'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub square: Square,
}

impl Piece {
    pub fn new(color: Color, square: Square) -> Self {
        Self {
            color,
            king: false,
            square,
        }
    }

    pub fn crowned(color: Color, square: Square) -> Self {
        Self {
            color,
            king: true,
            square,
        }
    }

    /// Layout character: `b`/`w` for men, `B`/`W` for kings.
    pub fn symbol(&self) -> char {
        match (self.color, self.king) {
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }

    fn from_symbol(ch: char, square: Square) -> Result<Self, ParseError> {
        match ch {
            'b' => Ok(Piece::new(Color::Black, square)),
            'B' => Ok(Piece::crowned(Color::Black, square)),
            'w' => Ok(Piece::new(Color::White, square)),
            'W' => Ok(Piece::crowned(Color::White, square)),
            other => Err(ParseError::InvalidPiece(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    // Indexed by Color as usize
    remaining: [u8; 2],
    // Promotion events, never decremented when a king is captured
    kings: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout, White's men on rows 5-7 and Black's on rows 0-2.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS as u8 {
            let color = match row {
                0..=2 => Color::Black,
                5..=7 => Color::White,
                _ => continue,
            };
            for col in 0..COLS as u8 {
                let square = Square::new(row, col);
                if square.is_dark() {
                    board.place(Piece::new(color, square));
                }
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            remaining: [0; 2],
            kings: [0; 2],
        }
    }

    /// Setup helper: puts a piece on its square and counts it. A king placed
    /// this way counts as already promoted, and a man placed on its own
    /// promotion row is crowned. Replacing a piece backs out its counts.
    pub fn place(&mut self, mut piece: Piece) {
        if let Some(old) = self.get(piece.square).piece() {
            self.remaining[old.color.index()] -= 1;
            if old.king {
                self.kings[old.color.index()] -= 1;
            }
        }
        if piece.square.row == piece.color.promotion_row() {
            piece.king = true;
        }
        *self.cell_mut(piece.square) = Cell::Occupied(piece);
        self.remaining[piece.color.index()] += 1;
        if piece.king {
            self.kings[piece.color.index()] += 1;
        }
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row as usize][square.col as usize]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(square).piece()
    }

    fn cell_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[square.row as usize][square.col as usize]
    }

    pub fn remaining(&self, color: Color) -> u8 {
        self.remaining[color.index()]
    }

    pub fn kings(&self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    /// Moves the piece standing on `piece.square` to `to`, crowning it on its
    /// promotion row. The destination must be empty; the controller checks
    /// that before calling. Returns the piece as it now stands on `to`.
    pub fn move_piece(&mut self, piece: &Piece, to: Square) -> Option<Piece> {
        let from = piece.square;
        debug_assert!(self.get(to).is_empty() || from == to);

        let moved = self.get(from);
        *self.cell_mut(from) = self.get(to);
        *self.cell_mut(to) = moved;

        let Cell::Occupied(mut landed) = moved else {
            return None;
        };
        landed.square = to;
        if to.row == landed.color.promotion_row() && !landed.king {
            landed.king = true;
            self.kings[landed.color.index()] += 1;
        }
        *self.cell_mut(to) = Cell::Occupied(landed);
        Some(landed)
    }

    /// Clears each piece's square and decrements its side's remaining count.
    /// King counters are left alone.
    pub fn remove_pieces(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            *self.cell_mut(piece.square) = Cell::Empty;
            let count = &mut self.remaining[piece.color.index()];
            *count = count.saturating_sub(1);
        }
    }

    /// `move_piece` followed by `remove_pieces`.
    pub fn apply(&mut self, piece: &Piece, to: Square, captures: &[Piece]) -> Option<Piece> {
        let landed = self.move_piece(piece, to);
        if !captures.is_empty() {
            self.remove_pieces(captures);
        }
        landed
    }

    pub fn evaluate(&self) -> Score {
        eval::evaluate(self)
    }

    /// Pieces of one color in row-major order.
    pub fn all_pieces(&self, color: Color) -> Vec<Piece> {
        self.pieces().filter(|p| p.color == color).collect()
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| cell.piece())
    }

    /// A side wins as soon as the other side has no pieces left.
    pub fn winner(&self) -> Option<Color> {
        if self.remaining(Color::Black) == 0 {
            Some(Color::White)
        } else if self.remaining(Color::White) == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn valid_moves(&self, piece: &Piece) -> ValidMoves {
        movegen::valid_moves(self, piece)
    }

    /// Parses a layout string: eight `/`-separated rows, row 0 first, with
    /// `b`/`B`/`w`/`W` for pieces and digits for runs of empty squares.
    pub fn from_layout(layout: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                    continue;
                }
                if col >= COLS {
                    return Err(ParseError::RowWidth {
                        row,
                        width: col + 1,
                    });
                }
                let square = Square::new(row as u8, col as u8);
                board.place(Piece::from_symbol(ch, square)?);
                col += 1;
            }
            if col != COLS {
                return Err(ParseError::RowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_layout`].
    pub fn layout(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}

// Diagram, row 0 on top
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                match cell {
                    Cell::Empty => write!(f, ". ")?,
                    Cell::Occupied(piece) => write!(f, "{} ", piece.symbol())?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
