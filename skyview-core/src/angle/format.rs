//! Sexagesimal display for right ascension and declination.
//!
//! - **HMS** (right ascension): `HHh MMm SS.SSs`, zero padded, always in
//!   [0h, 24h).
//! - **DMS** (declination): `±DD° MM' SS.SS"`, sign always shown.
//!
//! Seconds are rounded to `frac_digits` *before* the value is split into
//! fields, so a rounding carry propagates into minutes and hours instead of
//! producing `60.00` seconds. At most [`MAX_FRAC_DIGITS`] digits are
//! printed; a larger `frac_digits` is treated as the maximum.
//!
//! ```
//! use skyview_core::Angle;
//! use skyview_core::angle::{DmsFmt, HmsFmt};
//!
//! let ra = Angle::from_degrees(187.6875);
//! assert_eq!(HmsFmt { frac_digits: 2 }.fmt(ra), "12h 30m 45.00s");
//!
//! let dec = Angle::from_degrees(-30.258333333333333);
//! assert_eq!(DmsFmt { frac_digits: 1 }.fmt(dec), "-30° 15' 30.0\"");
//! ```

use super::Angle;

/// Most fractional seconds digits either formatter prints.
pub const MAX_FRAC_DIGITS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HmsFmt {
    pub frac_digits: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// `value` (hours or degrees, non-negative) split into whole units, whole
/// minutes and seconds rounded to `frac_digits`.
fn split_sexagesimal(value: f64, frac_digits: u8) -> (u64, u64, f64) {
    debug_assert!(frac_digits <= MAX_FRAC_DIGITS);
    let scale = 10_u64.pow(u32::from(frac_digits));
    let ticks = (value * 3600.0 * scale as f64).round() as u64;
    let ticks_per_minute = 60 * scale;
    let ticks_per_unit = 3600 * scale;

    let units = ticks / ticks_per_unit;
    let minutes = (ticks % ticks_per_unit) / ticks_per_minute;
    let seconds = (ticks % ticks_per_minute) as f64 / scale as f64;
    (units, minutes, seconds)
}

fn seconds_width(frac_digits: u8) -> usize {
    if frac_digits == 0 {
        2
    } else {
        3 + frac_digits as usize
    }
}

impl HmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let digits = self.frac_digits.min(MAX_FRAC_DIGITS);
        let hours = a.hours().rem_euclid(24.0);
        let (h, m, s) = split_sexagesimal(hours, digits);
        format!(
            "{:02}h {:02}m {:0width$.prec$}s",
            h % 24,
            m,
            s,
            width = seconds_width(digits),
            prec = digits as usize
        )
    }
}

impl DmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let digits = self.frac_digits.min(MAX_FRAC_DIGITS);
        let deg = a.degrees();
        let (d, m, s) = split_sexagesimal(deg.abs(), digits);
        let rounds_to_zero = d == 0 && m == 0 && s == 0.0;
        let sign = if deg < 0.0 && !rounds_to_zero { '-' } else { '+' };
        format!(
            "{sign}{:02}° {:02}' {:0width$.prec$}\"",
            d,
            m,
            s,
            width = seconds_width(digits),
            prec = digits as usize
        )
    }
}
