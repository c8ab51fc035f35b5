//! Error handling for CUP document processing.
//!
//! Provides the four terminal parse failures plus the I/O variant used by
//! the CLI layer. Everything else the parser encounters degrades locally
//! (the offending row, field or key is skipped) and never surfaces here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The waypoint section ended without a header line ever appearing.
    #[error("no waypoint header line found in document")]
    HeaderMissing,

    /// A token could not be decoded as a sexagesimal coordinate.
    #[error("invalid coordinate '{value}': {reason}")]
    InvalidCoordinate { value: String, reason: String },

    /// An Options/ObsZone/STARTS line appeared before any task was declared.
    #[error("task sub-record on line {line} has no preceding task declaration")]
    TaskContextMissing { line: usize },

    /// An ObsZone index points outside the current task's route.
    #[error(
        "observation zone index {index} out of range for task with {turnpoint_count} turnpoints"
    )]
    ObsZoneIndexOutOfRange {
        index: usize,
        turnpoint_count: usize,
    },
}

impl CupError {
    /// Create an invalid-coordinate error with context
    pub fn invalid_coordinate(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CupError>;
