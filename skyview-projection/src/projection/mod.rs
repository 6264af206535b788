//! Forward and inverse projections between view-space directions and NDC.
//!
//! The two families live in their own modules: [`Azimuthal`] modes work on
//! the angle from the view axis, [`MapProjection`] modes on a
//! longitude/latitude pair read around the camera. Both normalize by the
//! field of view so that the edge of the field lands on NDC ±1, with the
//! horizontal axis divided by the aspect ratio.
//!
//! [`view_vector_to_ndc`] and [`ndc_to_view_vector`] are the entry points
//! used by the click resolver and the overlay layer: they never fail loudly
//! and return `None` for anything that has no image.

use log::trace;
use skyview_core::Vector3;

use crate::context::ProjectionContext;
use crate::coordinate::NdcPoint;

mod azimuthal;
mod cylindrical;
mod map;
mod pseudocylindrical;

pub use azimuthal::Azimuthal;
pub use map::{map_to_view, view_to_map, MapProjection};

/// NDC position of a view-space direction, or `None` when the direction is
/// zero, non-finite, behind a hemisphere-limited projection or at a
/// singularity of the active mode.
pub fn view_vector_to_ndc(view: &Vector3, ctx: &ProjectionContext) -> Option<NdcPoint> {
    match ctx.project(view) {
        Ok(ndc) => Some(ndc),
        Err(err) => {
            trace!("{} rejected view vector {view}: {err}", ctx.mode());
            None
        }
    }
}

/// Unit view-space direction under an NDC point, or `None` when the point
/// lies outside the mode's valid image.
pub fn ndc_to_view_vector(ndc_x: f64, ndc_y: f64, ctx: &ProjectionContext) -> Option<Vector3> {
    match ctx.deproject(NdcPoint::new(ndc_x, ndc_y)) {
        Ok(view) => Some(view),
        Err(err) => {
            trace!("{} rejected NDC ({ndc_x}, {ndc_y}): {err}", ctx.mode());
            None
        }
    }
}
