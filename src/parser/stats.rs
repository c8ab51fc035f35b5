//! Parsing statistics and result structures.
//!
//! Tracks how much of a document survived the permissive parse: rows the
//! parser had to skip are counted and described here instead of failing
//! the whole document.

use crate::models::Document;

/// Parsing result with the reconstructed document and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Fully constructed document
    pub document: Document,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines read
    pub lines_read: usize,

    /// Number of candidate waypoint rows encountered after the header
    pub waypoint_rows: usize,

    /// Number of waypoints successfully parsed
    pub waypoints_parsed: usize,

    /// Number of rows or sub-records skipped due to local malformations
    pub rows_skipped: usize,

    /// Number of task main records parsed
    pub tasks_parsed: usize,

    /// Per-line skip reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            waypoint_rows: 0,
            waypoints_parsed: 0,
            rows_skipped: 0,
            tasks_parsed: 0,
            errors: Vec::new(),
        }
    }

    /// Waypoint-row success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.waypoint_rows == 0 {
            100.0
        } else {
            (self.waypoints_parsed as f64 / self.waypoint_rows as f64) * 100.0
        }
    }

    /// True when nothing had to be skipped
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
