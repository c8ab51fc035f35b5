//! CUP Processor Library
//!
//! A Rust library for reading and writing SeeYou CUP waypoint and task
//! files, the line-oriented CSV-derived format shared by most soaring
//! flight-planning tools.
//!
//! This library provides tools for:
//! - Parsing CUP documents with proper waypoint/task section handling
//! - Tolerating the malformed quoting and placeholder quirks of legacy
//!   producers while building a strictly typed in-memory document
//! - Converting sexagesimal coordinates and unit-suffixed scalar fields
//!   to and from metric storage
//! - Serializing documents back to canonical, round-trip-stable CUP text
//!
//! The engine is synchronous and pure: it consumes decoded text and
//! produces decoded text. File discovery, byte decoding and writing live
//! in the CLI modules only.

pub mod constants;
pub mod coordinates;
pub mod error;
pub mod fields;
pub mod models;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{CupError, Result};
pub use models::{Document, ObservationZone, Task, TaskOptions, Turnpoint, Waypoint};
pub use parser::{parse, parse_with_stats, ParseResult, ParseStats};
pub use serializer::{serialize, Newline};
