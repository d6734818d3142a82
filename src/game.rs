//! Turn controller.
//!
//! Owns the live board, tracks whose turn it is and which piece is selected,
//! and only lets a move through when its destination appears in the move
//! mapping computed for the selected piece. The engine never touches the
//! live board: its chosen successor is installed here.

use tracing::{debug, info};

use crate::board::{Board, Color, Piece, Square};
use crate::error::GameError;
use crate::movegen::{Move, ValidMoves};
use crate::search::{Search, SearchResult};

/// Side that opens a new game
pub const FIRST_TO_MOVE: Color = Color::White;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Piece>,
    valid_moves: ValidMoves,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), FIRST_TO_MOVE)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
            valid_moves: ValidMoves::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Moves of the selected piece, empty when nothing is selected.
    pub fn valid_moves(&self) -> &ValidMoves {
        &self.valid_moves
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Click-style selection. With a piece already selected, `square` is
    /// first tried as its destination; if that fails the selection is dropped
    /// and `square` is selected instead. Returns whether a piece is selected
    /// afterwards.
    pub fn select(&mut self, square: Square) -> bool {
        if self.selected.is_some() {
            if self.move_selected(square).is_ok() {
                return false;
            }
            self.selected = None;
            self.valid_moves.clear();
        }
        self.select_piece(square).is_ok()
    }

    /// Selects the piece on `from` and moves it to `to`.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        self.selected = None;
        self.valid_moves.clear();
        self.select_piece(from)?;
        let played = self.move_selected(to);
        if played.is_err() {
            self.selected = None;
            self.valid_moves.clear();
        }
        played
    }

    fn select_piece(&mut self, square: Square) -> Result<Piece, GameError> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver(winner));
        }
        let piece = self.board.piece_at(square).ok_or(GameError::NoPiece(square))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourPiece {
                square,
                color: piece.color,
                turn: self.turn,
            });
        }
        self.selected = Some(piece);
        self.valid_moves = self.board.valid_moves(&piece);
        Ok(piece)
    }

    fn move_selected(&mut self, to: Square) -> Result<Move, GameError> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver(winner));
        }
        let piece = self.selected.ok_or(GameError::NoPiece(to))?;
        let illegal = GameError::IllegalMove {
            from: piece.square,
            to,
        };
        if !self.board.get(to).is_empty() {
            return Err(illegal);
        }
        let captures = self.valid_moves.get(&to).cloned().ok_or(illegal)?;

        self.board.apply(&piece, to, &captures);
        let mv = Move {
            piece,
            to,
            captures,
        };
        debug!(side = %self.turn, mv = %mv, "move played");

        self.change_turn();
        self.log_winner();
        Ok(mv)
    }

    /// Passes the turn and forgets the selection.
    pub fn change_turn(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
        self.turn = self.turn.opposite();
    }

    /// Installs a board chosen by the search and passes the turn.
    pub fn ai_move(&mut self, board: Board) {
        self.board = board;
        self.change_turn();
        self.log_winner();
    }

    /// Lets `search` play for the side to move. The board is left untouched
    /// when the side to move has nothing to play.
    pub fn engine_move(&mut self, search: &mut Search) -> Result<SearchResult, GameError> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver(winner));
        }
        let result = search.search(&self.board, self.turn);
        if let Some(mv) = &result.best_move {
            debug!(side = %self.turn, mv = %mv, score = result.score, "engine move");
            self.ai_move(result.board.clone());
        }
        Ok(result)
    }

    fn log_winner(&self) {
        if let Some(winner) = self.winner() {
            info!(winner = %winner, "game over");
        }
    }
}
