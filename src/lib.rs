pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod protocol;
pub mod search;

pub use board::{Board, Cell, Color, Piece, Square, START_LAYOUT};
pub use error::{GameError, ParseError};
pub use eval::Score;
pub use game::Game;
pub use movegen::{successors, valid_moves, Move, Successor, ValidMoves};
pub use search::{minimax, Search, SearchParams, SearchResult};

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default
/// `warn`). Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
