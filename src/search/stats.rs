//! Search statistics
//!
//! Counts visited and evaluated nodes and times the search.

use std::time::{Duration, Instant};

use tracing::info;

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Every node entered, root included
    pub nodes: u64,

    /// Nodes answered by the static evaluation
    pub leaves: u64,

    /// Successors generated at the root
    pub root_moves: u64,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,

    /// Nodes per second rate
    pub nps: u64,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Update elapsed time and calculate NPS
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_us = self.search_time.as_micros() as u64;
            if elapsed_us > 0 {
                self.nps = self.nodes.saturating_mul(1_000_000) / elapsed_us;
            }
        }
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_leaf(&mut self) {
        self.leaves += 1;
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Emit a one-line summary through the log
    pub fn log_summary(&self) {
        info!(
            nodes = self.nodes,
            leaves = self.leaves,
            root_moves = self.root_moves,
            time_ms = self.search_time.as_millis() as u64,
            nps = self.nps,
            "search finished"
        );
    }
}
