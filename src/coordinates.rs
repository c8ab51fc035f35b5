//! Sexagesimal coordinate codec.
//!
//! CUP files store latitude as `DDMM.mmm` and longitude as `DDDMM.mmm`,
//! each followed by a hemisphere letter. Parsing accepts `.` or `,` as the
//! decimal separator; formatting always emits `.` with exactly three minute
//! decimals, so `format(parse(x)) == x` for any token the parser accepts
//! and values round-trip to a thousandth of a minute.

use crate::error::{CupError, Result};

/// Parse a latitude token such as `5216.500N` into signed decimal degrees
pub fn parse_latitude(token: &str) -> Result<f64> {
    parse_coordinate(token, 2, 'N', 'S')
}

/// Parse a longitude token such as `00541.300E` into signed decimal degrees
pub fn parse_longitude(token: &str) -> Result<f64> {
    parse_coordinate(token, 3, 'E', 'W')
}

/// Render signed decimal degrees as a latitude token (`DDMM.mmmN`)
pub fn format_latitude(value: f64) -> String {
    format_coordinate(value, 2, 'N', 'S')
}

/// Render signed decimal degrees as a longitude token (`DDDMM.mmmE`)
pub fn format_longitude(value: f64) -> String {
    format_coordinate(value, 3, 'E', 'W')
}

fn parse_coordinate(token: &str, degree_width: usize, positive: char, negative: char) -> Result<f64> {
    let token = token.trim();
    let hemisphere = token
        .chars()
        .last()
        .ok_or_else(|| CupError::invalid_coordinate(token, "empty token"))?;

    let sign = match hemisphere.to_ascii_uppercase() {
        h if h == positive => 1.0,
        h if h == negative => -1.0,
        _ => {
            return Err(CupError::invalid_coordinate(
                token,
                format!("expected '{}' or '{}' hemisphere suffix", positive, negative),
            ));
        }
    };

    let body = &token[..token.len() - hemisphere.len_utf8()];
    if body.len() < degree_width + 2 {
        return Err(CupError::invalid_coordinate(token, "body too short"));
    }

    // get() rather than indexing: a multi-byte character straddling the
    // fixed degree width must fail as a parse error, not a panic.
    let degrees: u32 = body
        .get(..degree_width)
        .and_then(|d| d.parse().ok())
        .ok_or_else(|| CupError::invalid_coordinate(token, "unparsable degrees"))?;
    let minutes: f64 = body
        .get(degree_width..)
        .and_then(|m| m.replace(',', ".").parse().ok())
        .ok_or_else(|| CupError::invalid_coordinate(token, "unparsable minutes"))?;

    Ok(sign * (degrees as f64 + minutes / 60.0))
}

fn format_coordinate(value: f64, degree_width: usize, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let magnitude = value.abs();
    let mut degrees = magnitude.trunc() as u32;
    let mut minutes = (magnitude - degrees as f64) * 60.0;

    // Round to the emitted precision first so 59.9996 carries into degrees.
    minutes = (minutes * 1000.0).round() / 1000.0;
    if minutes >= 60.0 {
        degrees += 1;
        minutes = 0.0;
    }

    format!(
        "{:0width$}{:06.3}{}",
        degrees,
        minutes,
        hemisphere,
        width = degree_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latitude() {
        let lat = parse_latitude("5216.500N").unwrap();
        assert!((lat - 52.275).abs() < 0.001);

        let south = parse_latitude("5216.500S").unwrap();
        assert!((south + 52.275).abs() < 0.001);
    }

    #[test]
    fn test_parse_longitude() {
        let lon = parse_longitude("00541.300E").unwrap();
        assert!((lon - 5.688).abs() < 0.001);

        let west = parse_longitude("00541.300W").unwrap();
        assert!((west + 5.688).abs() < 0.001);
    }

    #[test]
    fn test_comma_decimal_separator() {
        let lat = parse_latitude("5216,500N").unwrap();
        assert!((lat - 52.275).abs() < 0.001);
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        assert!(parse_latitude("5216.500").is_err()); // no hemisphere
        assert!(parse_latitude("52N").is_err()); // body too short
        assert!(parse_latitude("ABCD.500N").is_err()); // unparsable degrees
        assert!(parse_longitude("005xx.300E").is_err()); // unparsable minutes
        assert!(parse_longitude("").is_err());
    }

    #[test]
    fn test_format_is_parse_inverse() {
        assert_eq!(format_latitude(parse_latitude("5216.500N").unwrap()), "5216.500N");
        assert_eq!(
            format_longitude(parse_longitude("00541.300E").unwrap()),
            "00541.300E"
        );
        assert_eq!(format_latitude(parse_latitude("0030.000S").unwrap()), "0030.000S");
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_latitude(5.25), "0515.000N");
        assert_eq!(format_longitude(-5.25), "00515.000W");
    }

    #[test]
    fn test_format_carries_rounded_minutes() {
        // 51.999999° is 59.99994 minutes, which rounds up to the next degree.
        assert_eq!(format_latitude(51.999999), "5200.000N");
    }
}
