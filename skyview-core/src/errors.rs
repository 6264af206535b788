//! Error types for the shared angle and vector layer.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`Parse`](CoreError::Parse) | [`parse_ra`](crate::angle::parse_ra), [`parse_dec`](crate::angle::parse_dec) when no format matches |
//! | [`OutOfRange`](CoreError::OutOfRange) | Parsed components or values outside their astronomical range |
//! | [`MathError`](CoreError::MathError) | Degenerate numeric input such as a zero-length vector |
//!
//! ```
//! use skyview_core::{CoreError, MathErrorKind};
//!
//! let err = CoreError::math_error("normalize", MathErrorKind::ZeroLength, "vector has zero length");
//! assert!(err.to_string().contains("normalize"));
//! ```

use thiserror::Error;

/// Classification of numeric failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A vector or scale that must be non-zero is (numerically) zero.
    ZeroLength,
    /// Result or input is NaN or infinite.
    NotFinite,
    /// Value outside the domain of the operation.
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Cannot parse {quantity} from '{input}': {message}")]
    Parse {
        quantity: String,
        input: String,
        message: String,
    },

    #[error("{quantity} out of range {range}: {value}")]
    OutOfRange {
        quantity: String,
        range: String,
        value: f64,
    },

    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn parse(quantity: &str, input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            quantity: quantity.to_string(),
            input: input.to_string(),
            message: message.into(),
        }
    }

    pub fn out_of_range(quantity: &str, range: &str, value: f64) -> Self {
        Self::OutOfRange {
            quantity: quantity.to_string(),
            range: range.to_string(),
            value,
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, message: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}
