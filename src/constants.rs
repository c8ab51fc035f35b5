//! Wire-format constants for the CUP file format.
//!
//! This module collects the literal markers, prefixes and conversion
//! factors shared by the parser and the serializer.

// =============================================================================
// Section markers and line prefixes
// =============================================================================

/// Separator line between the waypoint and task sections
pub const TASK_SECTION_SEPARATOR: &str = "-----Related Tasks-----";

/// Comment prefix in the waypoint section
pub const COMMENT_PREFIX: char = '*';

/// Task-options sub-record prefix
pub const OPTIONS_PREFIX: &str = "Options,";

/// Observation-zone sub-record prefix
pub const OBSZONE_PREFIX: &str = "ObsZone=";

/// Alternate-starts sub-record prefix
pub const STARTS_PREFIX: &str = "STARTS=";

/// Explicit task main-record leader, matched case-insensitively
pub const TASK_RECORD_LEADER: &str = "Task";

// =============================================================================
// Waypoint columns
// =============================================================================

/// Canonical waypoint header emitted by the serializer
pub const CUP_HEADER: &str = "name,code,country,lat,lon,elev,style,rwdir,rwlen,freq,desc";

/// Minimum token count for a waypoint row; shorter rows are skipped
pub const MIN_WAYPOINT_FIELDS: usize = 6;

// =============================================================================
// Task records
// =============================================================================

/// Name assigned to a task whose main record carries an empty name field
pub const DEFAULT_TASK_NAME: &str = "Unnamed";

/// Legacy takeoff/landing placeholder some producers emit in task routes
pub const ROUTE_PLACEHOLDER: &str = "???";

// =============================================================================
// Units
// =============================================================================

/// Feet to meters conversion factor
pub const FEET_TO_METERS: f64 = 0.3048;

/// Meters per kilometer, used by the task-distance codec
pub const METERS_PER_KILOMETER: f64 = 1000.0;
