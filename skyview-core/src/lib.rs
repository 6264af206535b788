//! Numeric foundation for the skyview crates.
//!
//! `skyview-core` holds the small pieces every other crate in the workspace
//! leans on: a typed [`Angle`], angle wrapping, sexagesimal display and
//! parsing for right ascension and declination, and the [`Vector3`] used for
//! view-space and celestial directions.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], normalization, HMS/DMS formatting and parsing |
//! | [`matrix`] | [`Vector3`] Cartesian directions |
//! | [`constants`] | π multiples and unit conversions |
//! | [`errors`] | [`CoreError`] and [`CoreResult`] |
//! | [`test_helpers`] | ULP comparison used by the test suites |
//!
//! # Example
//!
//! ```
//! use skyview_core::angle::{parse_ra, HmsFmt};
//!
//! let ra = parse_ra("12h 30m 45s").unwrap();
//! assert_eq!(HmsFmt { frac_digits: 2 }.fmt(ra), "12h 30m 45.00s");
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use angle::Angle;
pub use errors::{CoreError, CoreResult, MathErrorKind};
pub use matrix::Vector3;

pub mod test_helpers;
