//! Core data structures for CUP documents.
//!
//! Defines the waypoint, task and document value types produced by the
//! parser and consumed by the serializer. Every optional attribute is a
//! real `Option`: absence means the producer did not supply the field,
//! never that it was zero. Nothing here enforces uniqueness of waypoint
//! titles or validates that a task's route names resolve to waypoints;
//! that is left to higher layers.

use serde::{Deserialize, Serialize};

/// A named navigation point from the waypoint section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Display name, also the join key used by task route references
    pub title: String,
    /// Short identifier
    pub code: String,
    pub country: Option<String>,
    /// Signed decimal degrees, south negative
    pub latitude: f64,
    /// Signed decimal degrees, west negative
    pub longitude: f64,
    pub elevation_meters: Option<f64>,
    /// Producer-defined point-type code, kept opaque
    pub style: Option<String>,
    /// Runway heading in whole degrees, 0..=359
    pub runway_direction: Option<u16>,
    pub runway_length_meters: Option<f64>,
    pub frequency: Option<String>,
    pub description: Option<String>,
}

/// Geometric acceptance region attached to one turnpoint occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationZone {
    pub style: i32,
    /// First radius in meters
    pub r1: Option<f64>,
    /// First angle in degrees
    pub a1: Option<f64>,
    /// Second radius in meters
    pub r2: Option<f64>,
    /// Second angle in degrees
    pub a2: Option<f64>,
    pub is_line: Option<bool>,
}

/// One occurrence of a waypoint within a task route.
///
/// The name is a reference by waypoint title and is not validated against
/// the waypoint list; the same name may appear more than once in a route
/// (a field used as both takeoff and landing is the common case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turnpoint {
    pub waypoint_name: String,
    pub zone: Option<ObservationZone>,
}

impl Turnpoint {
    /// Create a turnpoint with no observation zone attached
    pub fn new(waypoint_name: impl Into<String>) -> Self {
        Self {
            waypoint_name: waypoint_name.into(),
            zone: None,
        }
    }
}

/// Task-level tuning values from an `Options,` sub-record.
///
/// Field names follow the wire keys. Times are kept as opaque strings,
/// distances and altitudes are stored in meters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskOptions {
    /// Start-opening time string (`NoStart`)
    pub no_start: Option<String>,
    /// Designated task time string (`TaskTime`)
    pub task_time: Option<String>,
    /// Distance-basis flag (`WpDis`)
    pub wp_dis: Option<bool>,
    /// Near-distance tolerance in meters (`NearDis`)
    pub near_dis_meters: Option<f64>,
    /// Near-altitude tolerance in meters (`NearAlt`)
    pub near_alt_meters: Option<f64>,
    /// Minimum-distance flag (`MinDis`)
    pub min_dis: Option<bool>,
    /// Random-order flag (`RandomOrder`)
    pub random_order: Option<bool>,
    /// Maximum scored points (`MaxPts`)
    pub max_pts: Option<u32>,
    /// Mandatory leading point count (`BeforePts`)
    pub before_pts: Option<u32>,
    /// Mandatory trailing point count (`AfterPts`)
    pub after_pts: Option<u32>,
    /// Finish bonus (`Bonus`)
    pub bonus: Option<u32>,
}

impl TaskOptions {
    /// True when no field is present at all
    pub fn is_empty(&self) -> bool {
        self == &TaskOptions::default()
    }

    /// Fold a newer options record into this one.
    ///
    /// Present fields of `newer` win; absent fields keep the value already
    /// held, so repeated `Options,` lines refine one task incrementally.
    pub fn merge(&mut self, newer: TaskOptions) {
        if newer.no_start.is_some() {
            self.no_start = newer.no_start;
        }
        if newer.task_time.is_some() {
            self.task_time = newer.task_time;
        }
        if newer.wp_dis.is_some() {
            self.wp_dis = newer.wp_dis;
        }
        if newer.near_dis_meters.is_some() {
            self.near_dis_meters = newer.near_dis_meters;
        }
        if newer.near_alt_meters.is_some() {
            self.near_alt_meters = newer.near_alt_meters;
        }
        if newer.min_dis.is_some() {
            self.min_dis = newer.min_dis;
        }
        if newer.random_order.is_some() {
            self.random_order = newer.random_order;
        }
        if newer.max_pts.is_some() {
            self.max_pts = newer.max_pts;
        }
        if newer.before_pts.is_some() {
            self.before_pts = newer.before_pts;
        }
        if newer.after_pts.is_some() {
            self.after_pts = newer.after_pts;
        }
        if newer.bonus.is_some() {
            self.bonus = newer.bonus;
        }
    }
}

/// A declared flight task: ordered route plus optional tuning records.
///
/// Index 0 of the route is the takeoff, the last index the landing and
/// everything between a turnpoint. The route may be empty or hold a
/// single point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub turnpoints: Vec<Turnpoint>,
    /// Alternate start waypoint titles; empty means none declared
    pub starts: Vec<String>,
    pub options: Option<TaskOptions>,
}

impl Task {
    /// Create a task with the given name and route, no sub-records yet
    pub fn new(name: impl Into<String>, turnpoints: Vec<Turnpoint>) -> Self {
        Self {
            name: name.into(),
            turnpoints,
            starts: Vec::new(),
            options: None,
        }
    }
}

/// A fully parsed CUP document: waypoints and tasks in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub waypoints: Vec<Waypoint>,
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_merge_present_wins() {
        let mut base = TaskOptions {
            no_start: Some("12:30:00".to_string()),
            task_time: Some("03:00:00".to_string()),
            ..Default::default()
        };

        base.merge(TaskOptions {
            task_time: Some("02:00:00".to_string()),
            min_dis: Some(true),
            ..Default::default()
        });

        assert_eq!(base.no_start.as_deref(), Some("12:30:00"));
        assert_eq!(base.task_time.as_deref(), Some("02:00:00"));
        assert_eq!(base.min_dis, Some(true));
        assert_eq!(base.wp_dis, None);
    }

    #[test]
    fn test_options_is_empty() {
        assert!(TaskOptions::default().is_empty());
        assert!(!TaskOptions {
            bonus: Some(0),
            ..Default::default()
        }
        .is_empty());
    }
}
