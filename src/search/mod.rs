//! Search engine for Damista
//!
//! Exhaustive minimax with its parameters and statistics.

pub mod params;
pub mod search;
pub mod stats;

pub use self::params::SearchParams;
pub use self::search::{minimax, Search, SearchResult};
pub use self::stats::SearchStats;
pub use crate::movegen::Move;
