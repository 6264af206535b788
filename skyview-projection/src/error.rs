use skyview_core::CoreError;
use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Why a direction or screen point could not be mapped.
///
/// The contract functions [`view_vector_to_ndc`](crate::view_vector_to_ndc)
/// and [`ndc_to_view_vector`](crate::ndc_to_view_vector) collapse every
/// variant to `None`; the detailed API on
/// [`ProjectionContext`](crate::ProjectionContext) keeps the reason.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid view vector: {source}")]
    InvalidVector {
        #[from]
        source: CoreError,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Singularity in projection: {message}")]
    Singularity { message: String },

    #[error("Point outside projection domain: {message}")]
    OutOfBounds { message: String },

    #[error("Degenerate projection scale: {message}")]
    DegenerateScale { message: String },
}

impl ProjectionError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn singularity(message: impl Into<String>) -> Self {
        Self::Singularity {
            message: message.into(),
        }
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            message: message.into(),
        }
    }

    pub fn degenerate_scale(message: impl Into<String>) -> Self {
        Self::DegenerateScale {
            message: message.into(),
        }
    }
}

/// Failure reported by a [`SkyEngine`](crate::resolver::SkyEngine) primitive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Engine not ready: {message}")]
    NotReady { message: String },

    #[error("Engine primitive {primitive} failed: {message}")]
    Primitive { primitive: String, message: String },

    #[error("Engine primitive {primitive} returned a non-finite value")]
    NonFinite { primitive: String },
}

impl EngineError {
    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::NotReady {
            message: message.into(),
        }
    }

    pub fn primitive(primitive: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Primitive {
            primitive: primitive.into(),
            message: message.into(),
        }
    }

    pub fn non_finite(primitive: impl Into<String>) -> Self {
        Self::NonFinite {
            primitive: primitive.into(),
        }
    }
}
