use skyview_core::Vector3;

use crate::coordinate::NdcPoint;
use crate::error::{ProjectionError, ProjectionResult};
use crate::mode::ProjectionMode;

/// The camera looks down `-Z`.
pub const VIEW_FORWARD: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Smallest field of view accepted; anything smaller (or non-finite) is
/// raised to this.
pub const MIN_FOV: f64 = 1e-6;

/// A normalization maximum below this makes the projection degenerate.
pub const SCALE_EPSILON: f64 = 1e-9;

/// Tolerance on domain edges (|φ| ≤ π/2, |λ| ≤ π, the Hammer ellipse).
pub const DOMAIN_EPSILON: f64 = 1e-9;

/// Distance kept from the poles where a map formula diverges.
pub const POLE_EPSILON: f64 = 1e-6;

/// Everything a projection needs besides the point itself.
///
/// Built fresh from the engine state for every call. Construction sanitizes
/// the inputs: the field of view is clamped to at least [`MIN_FOV`] and an
/// aspect ratio that is non-finite or not positive becomes 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionContext {
    mode: ProjectionMode,
    fov: f64,
    aspect: f64,
}

impl ProjectionContext {
    pub fn new(mode: ProjectionMode, fov: f64, aspect: f64) -> Self {
        let fov = if fov.is_finite() { fov.max(MIN_FOV) } else { MIN_FOV };
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Self { mode, fov, aspect }
    }

    /// Same as [`new`](Self::new) with the mode looked up by its numeric id.
    pub fn from_id(id: i32, fov: f64, aspect: f64) -> Self {
        Self::new(ProjectionMode::from_id(id), fov, aspect)
    }

    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Full field of view in radians.
    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn half_fov(&self) -> f64 {
        self.fov / 2.0
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Forward projection of a view-space direction (any non-zero length).
    pub fn project(&self, view: &Vector3) -> ProjectionResult<NdcPoint> {
        match self.mode {
            ProjectionMode::Azimuthal(az) => az.project(view, self),
            ProjectionMode::Map(map) => map.project(view, self),
        }
    }

    /// Inverse projection; the returned direction has unit length.
    pub fn deproject(&self, ndc: NdcPoint) -> ProjectionResult<Vector3> {
        if !ndc.is_finite() {
            return Err(ProjectionError::invalid_input(format!(
                "non-finite NDC point ({}, {})",
                ndc.x(),
                ndc.y()
            )));
        }
        match self.mode {
            ProjectionMode::Azimuthal(az) => az.deproject(ndc, self),
            ProjectionMode::Map(map) => map.deproject(ndc, self),
        }
    }
}
