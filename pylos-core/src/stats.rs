//! Search statistics tracking.

use std::time::{Duration, Instant};

use tracing::debug;

/// Statistics collected during one search.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Positions whose moves were generated
    pub nodes: u64,

    /// Successors scored with the static evaluator
    pub leaves: u64,

    /// Positions reached with no legal move (scored statically)
    pub dead_ends: u64,

    /// Largest move list seen
    pub max_branching: usize,

    /// Wall time of the last finished search
    pub elapsed: Duration,

    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_node(&mut self, branching: usize) {
        self.nodes += 1;
        self.max_branching = self.max_branching.max(branching);
    }

    #[inline]
    pub fn record_leaf(&mut self) {
        self.leaves += 1;
    }

    #[inline]
    pub fn record_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    /// Stop the clock.
    pub fn finish(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed = start.elapsed();
        }
    }

    /// Get nodes plus leaves per second of the finished search
    pub fn positions_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes + self.leaves) as f64 / secs
        } else {
            0.0
        }
    }

    pub fn log_summary(&self, depth: u8) {
        debug!(
            depth,
            nodes = self.nodes,
            leaves = self.leaves,
            dead_ends = self.dead_ends,
            max_branching = self.max_branching,
            elapsed_ms = self.elapsed.as_millis() as u64,
            rate = self.positions_per_sec().round(),
            "search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SearchStats::new();
        stats.record_node(16);
        stats.record_node(4);
        stats.record_leaf();
        stats.record_dead_end();
        stats.finish();
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.leaves, 1);
        assert_eq!(stats.dead_ends, 1);
        assert_eq!(stats.max_branching, 16);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut stats = SearchStats::new();
        stats.finish();
        let first = stats.elapsed;
        stats.finish();
        assert_eq!(stats.elapsed, first);
    }
}
