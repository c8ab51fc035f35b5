//! CUP document parser.
//!
//! A two-state line machine over already-decoded text. Parsing starts in
//! the waypoint section and switches, permanently and at most once, to
//! the task section when the `-----Related Tasks-----` separator appears.
//!
//! The parser is deliberately tolerant: short rows, malformed optional
//! fields and unrecognized lines are skipped and counted rather than
//! failing the document. Only four conditions are terminal: a missing
//! waypoint header, an invalid coordinate fed to the codec directly, a
//! sub-record with no task to attach to, and an observation-zone index
//! outside its task's route.

mod stats;
mod task;
mod waypoint;

pub use stats::{ParseResult, ParseStats};

use tracing::debug;

use crate::constants::{COMMENT_PREFIX, OBSZONE_PREFIX, OPTIONS_PREFIX, STARTS_PREFIX, TASK_SECTION_SEPARATOR};
use crate::error::{CupError, Result};
use crate::models::Document;
use crate::tokenizer::split_line;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Waypoints,
    Tasks,
}

/// Parse CUP text into a document.
pub fn parse(input: &str) -> Result<Document> {
    parse_with_stats(input).map(|result| result.document)
}

/// Parse CUP text, also reporting what was skipped along the way.
///
/// The input may carry a leading byte-order marker and any mix of LF,
/// CRLF or CR line endings; both are normalized here so upstream byte
/// decoding does not have to.
pub fn parse_with_stats(input: &str) -> Result<ParseResult> {
    let text = input.strip_prefix('\u{feff}').unwrap_or(input);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut document = Document::default();
    let mut stats = ParseStats::new();
    let mut section = Section::Waypoints;
    let mut header_seen = false;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        stats.lines_read += 1;
        let trimmed = line.trim();

        if section == Section::Waypoints && trimmed == TASK_SECTION_SEPARATOR {
            section = Section::Tasks;
            continue;
        }

        match section {
            Section::Waypoints => {
                if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                    continue;
                }
                if !header_seen {
                    // The first real line is the column header. Its content
                    // is not validated, only its presence.
                    header_seen = true;
                    continue;
                }

                stats.waypoint_rows += 1;
                let tokens = split_line(line);
                match waypoint::parse_waypoint_row(&tokens) {
                    Ok(wp) => {
                        document.waypoints.push(wp);
                        stats.waypoints_parsed += 1;
                    }
                    Err(reason) => {
                        debug!("skipping waypoint row {}: {}", line_number, reason);
                        stats.rows_skipped += 1;
                        stats.errors.push(format!("line {}: {}", line_number, reason));
                    }
                }
            }
            Section::Tasks => {
                if trimmed.is_empty() {
                    continue;
                }

                if let Some(payload) = trimmed.strip_prefix(OPTIONS_PREFIX) {
                    let current = document
                        .tasks
                        .last_mut()
                        .ok_or(CupError::TaskContextMissing { line: line_number })?;
                    let newer = task::parse_options(payload);
                    match current.options.as_mut() {
                        Some(existing) => existing.merge(newer),
                        None => current.options = Some(newer),
                    }
                } else if trimmed.starts_with(OBSZONE_PREFIX) {
                    let current = document
                        .tasks
                        .last_mut()
                        .ok_or(CupError::TaskContextMissing { line: line_number })?;
                    let turnpoint_count = current.turnpoints.len();

                    match task::parse_obs_zone(trimmed) {
                        Some((zone_index, zone)) => {
                            let turnpoint = current.turnpoints.get_mut(zone_index).ok_or(
                                CupError::ObsZoneIndexOutOfRange {
                                    index: zone_index,
                                    turnpoint_count,
                                },
                            )?;
                            // Last write wins; no field-level merge for zones.
                            turnpoint.zone = Some(zone);
                        }
                        None => {
                            debug!("skipping obs-zone line {}: unparsable index", line_number);
                            stats.rows_skipped += 1;
                            stats
                                .errors
                                .push(format!("line {}: unparsable obs-zone index", line_number));
                        }
                    }
                } else if let Some(payload) = trimmed.strip_prefix(STARTS_PREFIX) {
                    let current = document
                        .tasks
                        .last_mut()
                        .ok_or(CupError::TaskContextMissing { line: line_number })?;
                    current.starts = task::parse_starts(payload);
                } else if let Some(new_task) = task::parse_main_record(trimmed) {
                    document.tasks.push(new_task);
                    stats.tasks_parsed += 1;
                } else {
                    // Unknown producer extension, ignored for forward
                    // compatibility.
                    debug!("ignoring unrecognized task-section line {}", line_number);
                }
            }
        }
    }

    if !header_seen {
        return Err(CupError::HeaderMissing);
    }

    Ok(ParseResult { document, stats })
}
