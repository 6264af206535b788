mod core;
mod format;
mod normalize;
mod parse;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::Angle;
pub use format::{DmsFmt, HmsFmt, MAX_FRAC_DIGITS};
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_0_360, wrap_pm_pi};
pub use parse::{parse_dec, parse_ra};
