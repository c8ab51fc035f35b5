//! CUP document serializer.
//!
//! Renders a [`Document`] back to CUP text as the deterministic inverse
//! of the parser: fixed column order, fixed options-key order, fixed
//! quoting discipline. Feeding the output back through the parser
//! reconstructs every present field, and serializing twice yields
//! byte-identical text.

use crate::constants::{CUP_HEADER, TASK_SECTION_SEPARATOR};
use crate::coordinates::{format_latitude, format_longitude};
use crate::fields::{format_angle, format_bool, format_distance, format_length};
use crate::models::{Document, ObservationZone, Task, TaskOptions, Waypoint};

/// Newline convention for rendered output.
///
/// Byte encoding and file placement stay with the caller; the engine
/// only decides what goes between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Render a document to CUP text under the given newline convention.
pub fn serialize(document: &Document, newline: Newline) -> String {
    let nl = newline.as_str();
    let mut out = String::new();

    out.push_str(CUP_HEADER);
    out.push_str(nl);

    for waypoint in &document.waypoints {
        out.push_str(&waypoint_line(waypoint));
        out.push_str(nl);
    }

    if !document.tasks.is_empty() {
        out.push_str(TASK_SECTION_SEPARATOR);
        out.push_str(nl);

        for task in &document.tasks {
            out.push_str(&task_line(task));
            out.push_str(nl);

            if let Some(options) = task.options.as_ref().filter(|o| !o.is_empty()) {
                out.push_str(&options_line(options));
                out.push_str(nl);
            }

            for (index, turnpoint) in task.turnpoints.iter().enumerate() {
                if let Some(zone) = &turnpoint.zone {
                    out.push_str(&obs_zone_line(index, zone));
                    out.push_str(nl);
                }
            }

            if !task.starts.is_empty() {
                out.push_str(&starts_line(&task.starts));
                out.push_str(nl);
            }
        }
    }

    out
}

fn waypoint_line(waypoint: &Waypoint) -> String {
    let fields = [
        quote_always(&waypoint.title),
        quote_always(&waypoint.code),
        quote_if_needed(waypoint.country.as_deref().unwrap_or("")),
        format_latitude(waypoint.latitude),
        format_longitude(waypoint.longitude),
        waypoint
            .elevation_meters
            .map(format_length)
            .unwrap_or_default(),
        quote_if_needed(waypoint.style.as_deref().unwrap_or("")),
        waypoint
            .runway_direction
            .map(|d| d.to_string())
            .unwrap_or_default(),
        waypoint
            .runway_length_meters
            .map(format_length)
            .unwrap_or_default(),
        quote_if_needed(waypoint.frequency.as_deref().unwrap_or("")),
        quote_if_needed(waypoint.description.as_deref().unwrap_or("")),
    ];
    fields.join(",")
}

/// Main record: quoted name, quoted takeoff, interior names, quoted
/// landing. Takeoff and landing columns are always emitted, as empty
/// quoted fields when the route is shorter than two points.
fn task_line(task: &Task) -> String {
    let names: Vec<&str> = task
        .turnpoints
        .iter()
        .map(|t| t.waypoint_name.as_str())
        .collect();

    let mut fields = vec![quote_always(&task.name)];
    fields.push(quote_always(names.first().copied().unwrap_or("")));
    if names.len() > 2 {
        for interior in &names[1..names.len() - 1] {
            fields.push(quote_always(interior));
        }
    }
    fields.push(quote_always(if names.len() >= 2 {
        names[names.len() - 1]
    } else {
        ""
    }));

    fields.join(",")
}

fn options_line(options: &TaskOptions) -> String {
    let mut parts = vec!["Options".to_string()];

    if let Some(v) = &options.no_start {
        parts.push(format!("NoStart={}", v));
    }
    if let Some(v) = &options.task_time {
        parts.push(format!("TaskTime={}", v));
    }
    if let Some(v) = options.wp_dis {
        parts.push(format!("WpDis={}", format_bool(v)));
    }
    if let Some(v) = options.near_dis_meters {
        parts.push(format!("NearDis={}", format_distance(v)));
    }
    if let Some(v) = options.near_alt_meters {
        parts.push(format!("NearAlt={}", format_length(v)));
    }
    if let Some(v) = options.min_dis {
        parts.push(format!("MinDis={}", format_bool(v)));
    }
    if let Some(v) = options.random_order {
        parts.push(format!("RandomOrder={}", format_bool(v)));
    }
    if let Some(v) = options.max_pts {
        parts.push(format!("MaxPts={}", v));
    }
    if let Some(v) = options.before_pts {
        parts.push(format!("BeforePts={}", v));
    }
    if let Some(v) = options.after_pts {
        parts.push(format!("AfterPts={}", v));
    }
    if let Some(v) = options.bonus {
        parts.push(format!("Bonus={}", v));
    }

    parts.join(",")
}

fn obs_zone_line(index: usize, zone: &ObservationZone) -> String {
    let mut line = format!("ObsZone={},Style={}", index, zone.style);

    if let Some(r1) = zone.r1 {
        line.push_str(&format!(",R1={}", format_length(r1)));
    }
    if let Some(a1) = zone.a1 {
        line.push_str(&format!(",A1={}", format_angle(a1)));
    }
    if let Some(r2) = zone.r2 {
        line.push_str(&format!(",R2={}", format_length(r2)));
    }
    if let Some(a2) = zone.a2 {
        line.push_str(&format!(",A2={}", format_angle(a2)));
    }
    if let Some(is_line) = zone.is_line {
        line.push_str(&format!(",Line={}", format_bool(is_line)));
    }

    line
}

fn starts_line(starts: &[String]) -> String {
    let names: Vec<String> = starts
        .iter()
        .map(|name| {
            if name.is_empty() || name.contains(',') || name.contains('"') {
                quote_always(name)
            } else {
                name.clone()
            }
        })
        .collect();
    format!("STARTS={}", names.join(","))
}

fn quote_always(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Text fields other than name and code are only wrapped when they need
/// it: embedded comma or quote, or whitespace at either end.
fn quote_if_needed(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else if value.contains(',') || value.contains('"') || value.trim() != value {
        quote_always(value)
    } else {
        value.to_string()
    }
}
