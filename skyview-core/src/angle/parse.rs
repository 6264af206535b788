//! Parsing right ascension and declination from user input.
//!
//! Both parsers try a sexagesimal pattern first and fall back to decimal
//! degrees:
//!
//! ```text
//! parse_ra:   12h 30m 45s   12h30m45.5s   12:30:45   12 30 45   187.6875
//! parse_dec:  +45° 30' 15"  -30d15m30s    -30:15:30  45 30 15   -30.25
//! ```
//!
//! Minutes and seconds must be below 60 and hours below 24. The declination
//! sign is read from the text, so `-0° 30' 00"` parses as -0.5° even though
//! the degree field is zero.

use super::Angle;
use crate::constants::DEG_PER_HOUR;
use crate::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;

static RA_HMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(\d{1,2})\s*(?:h|ʰ|:|\s)\s*(\d{1,2})\s*(?:m|ᵐ|:|\s)\s*(\d{1,2}(?:\.\d+)?)\s*(?:s|ˢ)?\s*$"#,
    )
    .expect("RA pattern is valid")
});

static DEC_DMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*([+-]?\d{1,2})\s*(?:°|d|:|\s)\s*(\d{1,2})\s*(?:'|′|m|:|\s)\s*(\d{1,2}(?:\.\d+)?)\s*(?:"|″|''|s)?\s*$"#,
    )
    .expect("Dec pattern is valid")
});

fn field(caps: &regex::Captures<'_>, index: usize, quantity: &str, input: &str) -> CoreResult<f64> {
    let text = caps
        .get(index)
        .ok_or_else(|| CoreError::parse(quantity, input, format!("missing field {index}")))?;
    text.as_str()
        .parse::<f64>()
        .map_err(|e| CoreError::parse(quantity, input, e.to_string()))
}

fn parse_decimal(quantity: &str, input: &str) -> CoreResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::parse(quantity, input, "not sexagesimal or decimal degrees"))
}

pub fn parse_ra(input: &str) -> CoreResult<Angle> {
    const QUANTITY: &str = "right ascension";

    if let Some(caps) = RA_HMS.captures(input) {
        let h = field(&caps, 1, QUANTITY, input)?;
        let m = field(&caps, 2, QUANTITY, input)?;
        let s = field(&caps, 3, QUANTITY, input)?;
        if h >= 24.0 || m >= 60.0 || s >= 60.0 {
            return Err(CoreError::parse(
                QUANTITY,
                input,
                format!("invalid HMS components {h}h {m}m {s}s"),
            ));
        }
        let deg = (h + m / 60.0 + s / 3600.0) * DEG_PER_HOUR;
        return Ok(Angle::from_degrees(deg));
    }

    let deg = parse_decimal(QUANTITY, input)?;
    if !(0.0..360.0).contains(&deg) {
        return Err(CoreError::out_of_range(QUANTITY, "[0, 360)", deg));
    }
    Ok(Angle::from_degrees(deg))
}

pub fn parse_dec(input: &str) -> CoreResult<Angle> {
    const QUANTITY: &str = "declination";

    if let Some(caps) = DEC_DMS.captures(input) {
        let d = field(&caps, 1, QUANTITY, input)?;
        let m = field(&caps, 2, QUANTITY, input)?;
        let s = field(&caps, 3, QUANTITY, input)?;
        if m >= 60.0 || s >= 60.0 {
            return Err(CoreError::parse(
                QUANTITY,
                input,
                format!("invalid DMS components {d}° {m}' {s}\""),
            ));
        }
        let negative = input.trim_start().starts_with('-');
        let magnitude = d.abs() + m / 60.0 + s / 3600.0;
        let deg = if negative { -magnitude } else { magnitude };
        if !(-90.0..=90.0).contains(&deg) {
            return Err(CoreError::out_of_range(QUANTITY, "[-90, 90]", deg));
        }
        return Ok(Angle::from_degrees(deg));
    }

    let deg = parse_decimal(QUANTITY, input)?;
    if !(-90.0..=90.0).contains(&deg) {
        return Err(CoreError::out_of_range(QUANTITY, "[-90, 90]", deg));
    }
    Ok(Angle::from_degrees(deg))
}
