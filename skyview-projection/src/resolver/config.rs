use std::fmt;

pub use skyview_core::angle::MAX_FRAC_DIGITS;

use super::engine::Frame;

/// Time scale the reported coordinates refer to. Carried through as a tag;
/// the engine owns the actual epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TimeScale {
    #[default]
    Utc,
    Tt,
    Tdb,
}

impl TimeScale {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Utc => "UTC",
            Self::Tt => "TT",
            Self::Tdb => "TDB",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Output settings for [`ClickResolver`](super::ClickResolver).
///
/// The default reports ICRF coordinates tagged UTC with two fractional
/// seconds digits on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    pub frame: Frame,
    pub time_scale: TimeScale,
    ra_frac_digits: u8,
    dec_frac_digits: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            frame: Frame::Icrf,
            time_scale: TimeScale::Utc,
            ra_frac_digits: 2,
            dec_frac_digits: 2,
        }
    }
}

impl ResolverConfig {
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_time_scale(mut self, time_scale: TimeScale) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Fractional seconds digits for RA and Dec, capped at
    /// [`MAX_FRAC_DIGITS`].
    pub fn with_precision(mut self, ra_frac_digits: u8, dec_frac_digits: u8) -> Self {
        self.ra_frac_digits = ra_frac_digits.min(MAX_FRAC_DIGITS);
        self.dec_frac_digits = dec_frac_digits.min(MAX_FRAC_DIGITS);
        self
    }

    /// Fractional seconds digits for RA. A deserialized value past
    /// [`MAX_FRAC_DIGITS`] reads back as the maximum.
    pub fn ra_frac_digits(&self) -> u8 {
        self.ra_frac_digits.min(MAX_FRAC_DIGITS)
    }

    pub fn dec_frac_digits(&self) -> u8 {
        self.dec_frac_digits.min(MAX_FRAC_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.frame, Frame::Icrf);
        assert_eq!(config.time_scale, TimeScale::Utc);
        assert_eq!(config.ra_frac_digits(), 2);
        assert_eq!(config.dec_frac_digits(), 2);
    }

    #[test]
    fn test_builder() {
        let config = ResolverConfig::default()
            .with_frame(Frame::Jnow)
            .with_time_scale(TimeScale::Tt)
            .with_precision(1, 0);
        assert_eq!(config.frame, Frame::Jnow);
        assert_eq!(config.time_scale, TimeScale::Tt);
        assert_eq!((config.ra_frac_digits(), config.dec_frac_digits()), (1, 0));
    }

    #[test]
    fn test_precision_capped() {
        let config = ResolverConfig::default().with_precision(200, 7);
        assert_eq!(config.ra_frac_digits(), MAX_FRAC_DIGITS);
        assert_eq!(config.dec_frac_digits(), MAX_FRAC_DIGITS);
    }

    #[test]
    fn test_precision_capped_when_read() {
        let config = ResolverConfig {
            ra_frac_digits: 25,
            dec_frac_digits: u8::MAX,
            ..ResolverConfig::default()
        };
        assert_eq!(config.ra_frac_digits(), MAX_FRAC_DIGITS);
        assert_eq!(config.dec_frac_digits(), MAX_FRAC_DIGITS);
    }

    #[test]
    fn test_time_scale_tags() {
        assert_eq!(TimeScale::default().to_string(), "UTC");
        assert_eq!(TimeScale::Tdb.tag(), "TDB");
    }
}
