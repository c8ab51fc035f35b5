//! Waypoint row parsing.
//!
//! Maps a tokenized waypoint-section line onto a [`Waypoint`] by column
//! position. A row that cannot yield a usable waypoint reports why, and
//! the caller skips it; nothing in here aborts the document.

use crate::constants::MIN_WAYPOINT_FIELDS;
use crate::coordinates::{parse_latitude, parse_longitude};
use crate::fields::{parse_int, parse_length};
use crate::models::Waypoint;

/// Column order of a waypoint row.
///
/// name, code, country, lat, lon, elev, style, rwdir, rwlen, freq, desc.
/// Everything past the longitude is optional; extra trailing columns from
/// newer producers are ignored.
pub(super) fn parse_waypoint_row(tokens: &[String]) -> Result<Waypoint, String> {
    if tokens.len() < MIN_WAYPOINT_FIELDS {
        return Err(format!(
            "expected at least {} fields, found {}",
            MIN_WAYPOINT_FIELDS,
            tokens.len()
        ));
    }

    let latitude = parse_latitude(&tokens[3]).map_err(|e| e.to_string())?;
    let longitude = parse_longitude(&tokens[4]).map_err(|e| e.to_string())?;

    Ok(Waypoint {
        title: tokens[0].clone(),
        code: tokens[1].clone(),
        country: non_empty(&tokens[2]),
        latitude,
        longitude,
        elevation_meters: tokens.get(5).and_then(|t| parse_length(t)),
        style: tokens.get(6).and_then(|t| non_empty(t)),
        runway_direction: tokens
            .get(7)
            .and_then(|t| parse_int::<u16>(t))
            .filter(|d| *d < 360),
        runway_length_meters: tokens.get(8).and_then(|t| parse_length(t)),
        frequency: tokens.get(9).and_then(|t| non_empty(t)),
        description: tokens.get(10).and_then(|t| non_empty(t)),
    })
}

fn non_empty(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_row() {
        let row = tokens(&[
            "Lelystad",
            "EHLE",
            "NL",
            "5227.367N",
            "00531.600E",
            "-4m",
            "5",
            "230",
            "1250m",
            "123.455",
            "Tower 123.455",
        ]);
        let wp = parse_waypoint_row(&row).unwrap();

        assert_eq!(wp.title, "Lelystad");
        assert_eq!(wp.code, "EHLE");
        assert_eq!(wp.country.as_deref(), Some("NL"));
        assert!((wp.latitude - 52.456).abs() < 0.001);
        assert!((wp.longitude - 5.5266).abs() < 0.001);
        assert_eq!(wp.elevation_meters, Some(-4.0));
        assert_eq!(wp.style.as_deref(), Some("5"));
        assert_eq!(wp.runway_direction, Some(230));
        assert_eq!(wp.runway_length_meters, Some(1250.0));
        assert_eq!(wp.frequency.as_deref(), Some("123.455"));
        assert_eq!(wp.description.as_deref(), Some("Tower 123.455"));
    }

    #[test]
    fn test_minimal_row_leaves_tail_absent() {
        let row = tokens(&["Hill", "H1", "", "5216.500N", "00541.300E", ""]);
        let wp = parse_waypoint_row(&row).unwrap();

        assert_eq!(wp.country, None);
        assert_eq!(wp.elevation_meters, None);
        assert_eq!(wp.style, None);
        assert_eq!(wp.runway_direction, None);
        assert_eq!(wp.description, None);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let row = tokens(&["Hill", "H1", "", "5216.500N", "00541.300E"]);
        assert!(parse_waypoint_row(&row).is_err());
    }

    #[test]
    fn test_malformed_coordinates_are_rejected() {
        let row = tokens(&["Hill", "H1", "", "garbage", "00541.300E", ""]);
        assert!(parse_waypoint_row(&row).is_err());
    }

    #[test]
    fn test_out_of_range_runway_direction_dropped() {
        let row = tokens(&["A", "B", "", "5216.500N", "00541.300E", "", "", "400"]);
        assert_eq!(parse_waypoint_row(&row).unwrap().runway_direction, None);
    }
}
