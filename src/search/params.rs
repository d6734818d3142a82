//! Search parameters and configuration

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 4;

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search depth in plies. Every node down to this depth is expanded.
    pub depth: u32,

    /// Log every root candidate and its score at debug level
    pub trace_root: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            trace_root: true,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set search depth in plies
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable per-candidate root logging
    pub fn trace_root(mut self, enable: bool) -> Self {
        self.trace_root = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let params = SearchParams::new().depth(2).trace_root(false);
        assert_eq!(params.depth, 2);
        assert!(!params.trace_root);
        assert_eq!(SearchParams::default().depth, DEFAULT_DEPTH);
    }
}
