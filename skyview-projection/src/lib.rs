//! View-space projections and click resolution for a sky renderer.
//!
//! The renderer draws the sky through one of ten projections selected by a
//! numeric id. This crate carries the same math on the CPU side so that
//! overlays and pointer input agree with what is on screen:
//!
//! - [`view_vector_to_ndc`] places a view-space direction on the screen,
//! - [`ndc_to_view_vector`] finds the direction under a screen point,
//! - [`resolver::ClickResolver`] turns a pointer event into RA/Dec by way of
//!   a [`resolver::SkyEngine`].
//!
//! # View space
//!
//! Right-handed, the camera looking down `-Z` ([`VIEW_FORWARD`]), `+X` to the
//! right and `+Y` up. NDC spans [-1, 1] on both axes with the horizontal
//! axis divided by the canvas aspect ratio.
//!
//! # Example
//!
//! ```
//! use skyview_core::Vector3;
//! use skyview_projection::{ndc_to_view_vector, view_vector_to_ndc, ProjectionContext};
//!
//! let ctx = ProjectionContext::from_id(1, std::f64::consts::FRAC_PI_2, 16.0 / 9.0);
//! let v = Vector3::new(0.2, -0.1, -1.0);
//! let ndc = view_vector_to_ndc(&v, &ctx).unwrap();
//! let back = ndc_to_view_vector(ndc.x(), ndc.y(), &ctx).unwrap();
//! assert!((back - v.normalize()).magnitude() < 1e-12);
//! ```

pub mod context;
pub mod coordinate;
pub mod error;
pub mod mode;
pub mod projection;
pub mod resolver;

pub use context::{
    ProjectionContext, DOMAIN_EPSILON, MIN_FOV, POLE_EPSILON, SCALE_EPSILON, VIEW_FORWARD,
};
pub use coordinate::{CanvasRect, MapCoord, NdcPoint, PixelPoint, PlaneCoord};
pub use error::{EngineError, ProjectionError, ProjectionResult};
pub use mode::ProjectionMode;
pub use projection::{ndc_to_view_vector, view_vector_to_ndc, Azimuthal, MapProjection};
pub use resolver::{resolve_click_coordinates, ClickCoordinates, ClickResolver};
