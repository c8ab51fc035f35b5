//! Task-section record parsing.
//!
//! The task section interleaves main records (a task name and its route)
//! with `Options,`, `ObsZone=` and `STARTS=` sub-records that refine the
//! most recently declared task. This module parses each record kind in
//! isolation; section state and context errors live in the parent module.

use tracing::debug;

use crate::constants::{DEFAULT_TASK_NAME, OBSZONE_PREFIX, ROUTE_PLACEHOLDER, TASK_RECORD_LEADER};
use crate::fields::{parse_angle, parse_bool, parse_distance, parse_int, parse_length};
use crate::models::{ObservationZone, Task, TaskOptions, Turnpoint};
use crate::tokenizer::split_line;

/// Parse a candidate task main record.
///
/// A line leading with `Task` (any case) is always a main record; any
/// other line qualifies only when it splits into at least two fields.
/// This heuristic is best-effort: producer variants exist that it cannot
/// disambiguate, and a rejected line is simply ignored upstream.
pub(super) fn parse_main_record(line: &str) -> Option<Task> {
    let tokens = split_line(line);

    let explicit = tokens[0].eq_ignore_ascii_case(TASK_RECORD_LEADER);
    if !explicit && tokens.len() < 2 {
        return None;
    }

    let (name_field, route) = if explicit {
        let name = tokens.get(1).map(String::as_str).unwrap_or("");
        (name, &tokens[2.min(tokens.len())..])
    } else {
        (tokens[0].as_str(), &tokens[1..])
    };

    let name = if name_field.is_empty() {
        DEFAULT_TASK_NAME.to_string()
    } else {
        name_field.to_string()
    };

    // Legacy producers pad routes with empty or "???" takeoff/landing
    // columns; neither names a waypoint, so neither becomes a turnpoint.
    let turnpoints = route
        .iter()
        .filter(|title| !title.is_empty() && title.as_str() != ROUTE_PLACEHOLDER)
        .map(Turnpoint::new)
        .collect();

    Some(Task::new(name, turnpoints))
}

/// Parse the payload of an `Options,` sub-record into a fresh options bag.
///
/// Unrecognized keys and unparsable values leave their field absent.
pub(super) fn parse_options(payload: &str) -> TaskOptions {
    let mut options = TaskOptions::default();

    for pair in payload.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_ascii_lowercase().as_str() {
            "nostart" => {
                if !value.is_empty() {
                    options.no_start = Some(value.to_string());
                }
            }
            "tasktime" => {
                if !value.is_empty() {
                    options.task_time = Some(value.to_string());
                }
            }
            "wpdis" => options.wp_dis = parse_bool(value),
            "neardis" => options.near_dis_meters = parse_distance(value),
            "nearalt" => options.near_alt_meters = parse_length(value),
            "mindis" => options.min_dis = parse_bool(value),
            "randomorder" => options.random_order = parse_bool(value),
            "maxpts" => options.max_pts = parse_int(value),
            "beforepts" => options.before_pts = parse_int(value),
            "afterpts" => options.after_pts = parse_int(value),
            "bonus" => options.bonus = parse_int(value),
            other => debug!("ignoring unrecognized task option key '{}'", other),
        }
    }

    options
}

/// Parse an `ObsZone=` line into its turnpoint index and zone.
///
/// Returns `None` when the index itself is unparsable; bounds checking
/// against the current task happens in the caller.
pub(super) fn parse_obs_zone(line: &str) -> Option<(usize, ObservationZone)> {
    let mut pieces = line.split(',');

    let index: usize = pieces
        .next()?
        .trim()
        .strip_prefix(OBSZONE_PREFIX)
        .and_then(|t| parse_int(t))?;

    let mut zone = ObservationZone {
        style: 0,
        r1: None,
        a1: None,
        r2: None,
        a2: None,
        is_line: None,
    };

    for pair in pieces {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "style" => zone.style = parse_int(value).unwrap_or(0),
            "r1" => zone.r1 = parse_length(value),
            "a1" => zone.a1 = parse_angle(value),
            "r2" => zone.r2 = parse_length(value),
            "a2" => zone.a2 = parse_angle(value),
            "line" => zone.is_line = parse_bool(value),
            other => debug!("ignoring unrecognized obs-zone key '{}'", other),
        }
    }

    Some((index, zone))
}

/// Parse the payload of a `STARTS=` line into start waypoint titles.
///
/// Names may be quote-wrapped (with doubled internal quotes) when they
/// carry commas or quotes; the tokenizer undoes exactly that wrapping.
pub(super) fn parse_starts(payload: &str) -> Vec<String> {
    if payload.trim().is_empty() {
        return Vec::new();
    }
    split_line(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_record_with_task_leader() {
        let task = parse_main_record("Task,\"Local Hop\",\"BIDD\",\"EHLE\"").unwrap();
        assert_eq!(task.name, "Local Hop");
        let names: Vec<_> = task.turnpoints.iter().map(|t| t.waypoint_name.as_str()).collect();
        assert_eq!(names, vec!["BIDD", "EHLE"]);
    }

    #[test]
    fn test_main_record_without_leader() {
        let task = parse_main_record("\"500k Triangle\",\"A\",\"B\",\"C\",\"A\"").unwrap();
        assert_eq!(task.name, "500k Triangle");
        assert_eq!(task.turnpoints.len(), 4);
    }

    #[test]
    fn test_single_field_line_is_not_a_task() {
        assert!(parse_main_record("just one field").is_none());
    }

    #[test]
    fn test_empty_name_gets_default() {
        let task = parse_main_record("\"\",\"A\",\"B\"").unwrap();
        assert_eq!(task.name, DEFAULT_TASK_NAME);
    }

    #[test]
    fn test_placeholder_and_empty_route_names_dropped() {
        let task = parse_main_record("\"T\",\"???\",\"A\",\"B\",\"\"").unwrap();
        let names: Vec<_> = task.turnpoints.iter().map(|t| t.waypoint_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_options_known_keys() {
        let options =
            parse_options("NoStart=12:13:14,TaskTime=01:45:12,WpDis=False,NearDis=0.7km,NearAlt=300m,MinDis=True,RandomOrder=0,MaxPts=5,BeforePts=1,AfterPts=2,Bonus=200");

        assert_eq!(options.no_start.as_deref(), Some("12:13:14"));
        assert_eq!(options.task_time.as_deref(), Some("01:45:12"));
        assert_eq!(options.wp_dis, Some(false));
        assert_eq!(options.near_dis_meters, Some(700.0));
        assert_eq!(options.near_alt_meters, Some(300.0));
        assert_eq!(options.min_dis, Some(true));
        assert_eq!(options.random_order, Some(false));
        assert_eq!(options.max_pts, Some(5));
        assert_eq!(options.before_pts, Some(1));
        assert_eq!(options.after_pts, Some(2));
        assert_eq!(options.bonus, Some(200));
    }

    #[test]
    fn test_parse_options_ignores_unknown_and_malformed() {
        let options = parse_options("Frobnicate=9,NoStart,MaxPts=many,TaskTime=02:00:00");
        assert_eq!(options.no_start, None);
        assert_eq!(options.max_pts, None);
        assert_eq!(options.task_time.as_deref(), Some("02:00:00"));
    }

    #[test]
    fn test_parse_obs_zone() {
        let (index, zone) =
            parse_obs_zone("ObsZone=2,Style=1,R1=500m,A1=180,Line=1").unwrap();
        assert_eq!(index, 2);
        assert_eq!(zone.style, 1);
        assert_eq!(zone.r1, Some(500.0));
        assert_eq!(zone.a1, Some(180.0));
        assert_eq!(zone.r2, None);
        assert_eq!(zone.is_line, Some(true));
    }

    #[test]
    fn test_obs_zone_style_defaults_to_zero() {
        let (_, zone) = parse_obs_zone("ObsZone=0,R1=3000m").unwrap();
        assert_eq!(zone.style, 0);
    }

    #[test]
    fn test_obs_zone_bad_index_is_none() {
        assert!(parse_obs_zone("ObsZone=x,Style=1").is_none());
    }

    #[test]
    fn test_parse_starts() {
        assert_eq!(parse_starts("Alpha,Bravo"), vec!["Alpha", "Bravo"]);
        assert_eq!(
            parse_starts("\"Field, south\",\"Say \"\"go\"\"\""),
            vec!["Field, south", "Say \"go\""]
        );
        assert!(parse_starts("  ").is_empty());
    }
}
