//! Scalar field codecs for CUP values.
//!
//! Helpers for the unit-suffixed numeric fields, booleans and plain
//! integers that appear in waypoint rows and task sub-records. Parsers
//! return `Option`: an empty or unparsable token means the field is
//! absent, never zero. Storage is metric; imperial input is converted
//! on the way in.

use crate::constants::{FEET_TO_METERS, METERS_PER_KILOMETER};

/// Parse a length or elevation token into meters.
///
/// `450m` and bare `450` are meters, `1000ft` is converted, anything
/// else is absent.
pub fn parse_length(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let lower = token.to_ascii_lowercase();
    if let Some(feet) = lower.strip_suffix("ft") {
        return feet.trim().parse::<f64>().ok().map(|v| v * FEET_TO_METERS);
    }
    if let Some(meters) = lower.strip_suffix('m') {
        return meters.trim().parse::<f64>().ok();
    }
    token.parse::<f64>().ok()
}

/// Render a length in meters, rounded to the whole meter
pub fn format_length(meters: f64) -> String {
    format!("{}m", meters.round() as i64)
}

/// Parse a task-distance token into meters.
///
/// Only a `km` suffix marks kilometers; everything else falls back to
/// the length rules.
pub fn parse_distance(token: &str) -> Option<f64> {
    let token = token.trim();
    let lower = token.to_ascii_lowercase();
    if let Some(km) = lower.strip_suffix("km") {
        return km.trim().parse::<f64>().ok().map(|v| v * METERS_PER_KILOMETER);
    }
    parse_length(token)
}

/// Render a task distance in meters as kilometers.
///
/// Decimal precision follows magnitude: three decimals below 10 km, two
/// below 100 km, one above.
pub fn format_distance(meters: f64) -> String {
    let km = meters / METERS_PER_KILOMETER;
    let precision = if km.abs() < 10.0 {
        3
    } else if km.abs() < 100.0 {
        2
    } else {
        1
    };
    format!("{:.*}km", precision, km)
}

/// Parse a boolean token: `1`/`true` and `0`/`false`, case-insensitive
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Render a boolean as the wire digits
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Parse a plain integer field of any integer width
pub fn parse_int<T: std::str::FromStr>(token: &str) -> Option<T> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

/// Parse an angle in degrees
pub fn parse_angle(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

/// Render an angle rounded to the nearest whole degree
pub fn format_angle(degrees: f64) -> String {
    format!("{}", degrees.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("450m"), Some(450.0));
        assert_eq!(parse_length("450"), Some(450.0));
        let feet = parse_length("1000ft").unwrap();
        assert!((feet - 304.8).abs() < 0.001);
        assert_eq!(parse_length("12FT"), parse_length("12ft"));
    }

    #[test]
    fn test_parse_length_absent_on_bad_input() {
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("   "), None);
        assert_eq!(parse_length("tallish"), None);
        assert_eq!(parse_length("12q"), None);
    }

    #[test]
    fn test_format_length_rounds_to_meter() {
        assert_eq!(format_length(304.8), "305m");
        assert_eq!(format_length(450.0), "450m");
        assert_eq!(format_length(449.4), "449m");
    }

    #[test]
    fn test_distance_codec() {
        assert_eq!(parse_distance("0.7km"), Some(700.0));
        assert_eq!(parse_distance("700m"), Some(700.0));
        assert_eq!(format_distance(700.0), "0.700km");
        assert_eq!(format_distance(55_500.0), "55.50km");
        assert_eq!(format_distance(150_000.0), "150.0km");
    }

    #[test]
    fn test_bool_codec() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
        assert_eq!(format_bool(true), "1");
        assert_eq!(format_bool(false), "0");
    }

    #[test]
    fn test_int_and_angle() {
        assert_eq!(parse_int::<u32>(" 42 "), Some(42));
        assert_eq!(parse_int::<u32>("-1"), None);
        assert_eq!(parse_int::<i32>("-1"), Some(-1));
        assert_eq!(parse_angle("180"), Some(180.0));
        assert_eq!(format_angle(179.6), "180");
    }
}
