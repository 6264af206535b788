//! Screen click to celestial coordinates.
//!
//! A click goes through five steps, each of which can end the resolution
//! with `None`:
//!
//! 1. client pixel to NDC using the canvas rectangle,
//! 2. NDC to a view-space direction under the engine's current projection,
//! 3. view frame to the configured celestial frame (engine),
//! 4. Cartesian to `(ra, dec)` (engine),
//! 5. RA wrapped into [0, 360) and both axes formatted sexagesimally.
//!
//! Failures are logged and swallowed; a click that does not resolve is an
//! ordinary outcome, not an error.
//!
//! ```
//! use skyview_core::Vector3;
//! use skyview_projection::resolver::{resolve_click_coordinates, Frame, SkyEngine};
//! use skyview_projection::{CanvasRect, EngineError};
//!
//! struct Identity;
//!
//! impl SkyEngine for Identity {
//!     fn fov(&self) -> f64 { 1.0 }
//!     fn projection(&self) -> i32 { 1 }
//!     fn convert_frame(&self, _: Frame, _: Frame, v: Vector3) -> Result<Vector3, EngineError> {
//!         Ok(v)
//!     }
//!     fn cartesian_to_spherical(&self, v: Vector3) -> Result<(f64, f64), EngineError> {
//!         Ok(v.to_spherical())
//!     }
//! }
//!
//! let canvas = CanvasRect::new(0.0, 0.0, 800.0, 600.0);
//! let coords = resolve_click_coordinates(&Identity, &canvas, 400.0, 300.0).unwrap();
//! assert!((coords.dec_deg + 90.0).abs() < 1e-9);
//! assert_eq!(coords.frame, Frame::Icrf);
//! ```

use log::{debug, warn};
use skyview_core::angle::{wrap_0_360, DmsFmt, HmsFmt};
use skyview_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skyview_core::{Angle, Vector3};

use crate::context::ProjectionContext;
use crate::coordinate::{CanvasRect, NdcPoint, PixelPoint};
use crate::error::EngineError;
use crate::projection::{ndc_to_view_vector, view_vector_to_ndc};

mod config;
mod engine;

pub use config::{ResolverConfig, TimeScale, MAX_FRAC_DIGITS};
pub use engine::{Frame, SkyEngine};

/// Whether the clicked point was inside the visible NDC square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoordinateQuality {
    Precise,
    Extrapolated,
}

/// Celestial position under a click.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickCoordinates {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, as returned by the engine.
    pub dec_deg: f64,
    /// `HHh MMm SS.SSs`
    pub ra_str: String,
    /// `±DD° MM' SS.SS"`
    pub dec_str: String,
    pub frame: Frame,
    pub time_scale: TimeScale,
    pub quality: CoordinateQuality,
}

impl ClickCoordinates {
    pub fn ra(&self) -> Angle {
        Angle::from_degrees(self.ra_deg)
    }

    pub fn dec(&self) -> Angle {
        Angle::from_degrees(self.dec_deg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickResolver {
    config: ResolverConfig,
}

impl ClickResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Celestial coordinates under `(client_x, client_y)`.
    ///
    /// The canvas rectangle must be the one current at the time of the
    /// event. Returns `None` for a degenerate canvas, a point outside the
    /// active projection's image, or any engine failure.
    pub fn resolve<E: SkyEngine + ?Sized>(
        &self,
        engine: &E,
        canvas: &CanvasRect,
        client_x: f64,
        client_y: f64,
    ) -> Option<ClickCoordinates> {
        if !canvas.is_valid() {
            warn!(
                "cannot resolve click on canvas {}x{}",
                canvas.width(),
                canvas.height()
            );
            return None;
        }

        let ndc = canvas.client_to_ndc(client_x, client_y);
        let ctx = context_for(engine, canvas);
        let view = ndc_to_view_vector(ndc.x(), ndc.y(), &ctx)?;

        match self.resolve_view(engine, view, ndc) {
            Ok(coords) => Some(coords),
            Err(err) => {
                debug!("click at ({client_x}, {client_y}) not resolved: {err}");
                None
            }
        }
    }

    /// Client pixel at which a celestial position currently appears.
    ///
    /// `ra_deg`/`dec_deg` are in the configured frame. The result may lie
    /// outside the canvas; `None` means the position has no image under the
    /// active projection.
    pub fn locate<E: SkyEngine + ?Sized>(
        &self,
        engine: &E,
        canvas: &CanvasRect,
        ra_deg: f64,
        dec_deg: f64,
    ) -> Option<PixelPoint> {
        if !canvas.is_valid() {
            warn!(
                "cannot locate position on canvas {}x{}",
                canvas.width(),
                canvas.height()
            );
            return None;
        }

        let celestial = Vector3::from_spherical(ra_deg * DEG_TO_RAD, dec_deg * DEG_TO_RAD);
        let view = match engine.convert_frame(self.config.frame, Frame::View, celestial) {
            Ok(view) => view,
            Err(err) => {
                debug!("position ({ra_deg}, {dec_deg}) not located: {err}");
                return None;
            }
        };

        let ctx = context_for(engine, canvas);
        let ndc = view_vector_to_ndc(&view, &ctx)?;
        Some(canvas.ndc_to_client(ndc))
    }

    fn resolve_view<E: SkyEngine + ?Sized>(
        &self,
        engine: &E,
        view: Vector3,
        ndc: NdcPoint,
    ) -> Result<ClickCoordinates, EngineError> {
        let celestial = engine.convert_frame(Frame::View, self.config.frame, view)?;
        if !celestial.is_finite() {
            return Err(EngineError::non_finite("convert_frame"));
        }

        let (ra, dec) = engine.cartesian_to_spherical(celestial)?;
        if !(ra.is_finite() && dec.is_finite()) {
            return Err(EngineError::non_finite("cartesian_to_spherical"));
        }

        let ra_deg = wrap_0_360(engine.normalize_angle(ra) * RAD_TO_DEG);
        let dec_deg = dec * RAD_TO_DEG;

        let ra_str = HmsFmt {
            frac_digits: self.config.ra_frac_digits(),
        }
        .fmt(Angle::from_degrees(ra_deg));
        let dec_str = DmsFmt {
            frac_digits: self.config.dec_frac_digits(),
        }
        .fmt(Angle::from_degrees(dec_deg));

        let quality = if ndc.is_on_screen() {
            CoordinateQuality::Precise
        } else {
            CoordinateQuality::Extrapolated
        };

        Ok(ClickCoordinates {
            ra_deg,
            dec_deg,
            ra_str,
            dec_str,
            frame: self.config.frame,
            time_scale: self.config.time_scale,
            quality,
        })
    }
}

fn context_for<E: SkyEngine + ?Sized>(engine: &E, canvas: &CanvasRect) -> ProjectionContext {
    ProjectionContext::from_id(engine.projection(), engine.fov(), canvas.aspect())
}

/// [`ClickResolver::resolve`] with the default configuration.
pub fn resolve_click_coordinates<E: SkyEngine + ?Sized>(
    engine: &E,
    canvas: &CanvasRect,
    client_x: f64,
    client_y: f64,
) -> Option<ClickCoordinates> {
    ClickResolver::default().resolve(engine, canvas, client_x, client_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyview_core::constants::QUARTER_PI;
    use std::cell::Cell;

    /// Identity frames with an optional canned `(ra, dec)` answer.
    struct StubEngine {
        projection: i32,
        spherical: Option<(f64, f64)>,
        fail_convert: bool,
        calls: Cell<u32>,
    }

    impl StubEngine {
        fn new(projection: i32) -> Self {
            Self {
                projection,
                spherical: None,
                fail_convert: false,
                calls: Cell::new(0),
            }
        }
    }

    impl SkyEngine for StubEngine {
        fn fov(&self) -> f64 {
            std::f64::consts::FRAC_PI_3
        }

        fn projection(&self) -> i32 {
            self.projection
        }

        fn convert_frame(&self, _: Frame, _: Frame, v: Vector3) -> Result<Vector3, EngineError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_convert {
                return Err(EngineError::not_ready("no observer"));
            }
            Ok(v)
        }

        fn cartesian_to_spherical(&self, v: Vector3) -> Result<(f64, f64), EngineError> {
            Ok(self.spherical.unwrap_or_else(|| v.to_spherical()))
        }
    }

    fn canvas() -> CanvasRect {
        CanvasRect::new(0.0, 0.0, 640.0, 480.0)
    }

    #[test]
    fn test_negative_ra_wrapped() {
        let mut engine = StubEngine::new(0);
        engine.spherical = Some((-QUARTER_PI, 0.0));
        let coords = resolve_click_coordinates(&engine, &canvas(), 320.0, 240.0).unwrap();
        assert!((coords.ra_deg - 315.0).abs() < 1e-9);
        assert_eq!(coords.ra_str, "21h 00m 00.00s");
        assert_eq!(coords.dec_str, "+00° 00' 00.00\"");
    }

    #[test]
    fn test_engine_error_is_none() {
        let mut engine = StubEngine::new(0);
        engine.fail_convert = true;
        assert!(resolve_click_coordinates(&engine, &canvas(), 100.0, 100.0).is_none());
        assert_eq!(engine.calls.get(), 1);
    }

    #[test]
    fn test_non_finite_engine_output_is_none() {
        let mut engine = StubEngine::new(0);
        engine.spherical = Some((f64::NAN, 0.0));
        assert!(resolve_click_coordinates(&engine, &canvas(), 320.0, 240.0).is_none());
    }

    #[test]
    fn test_degenerate_canvas_skips_engine() {
        let engine = StubEngine::new(0);
        let flat = CanvasRect::new(0.0, 0.0, 640.0, 0.0);
        assert!(resolve_click_coordinates(&engine, &flat, 10.0, 10.0).is_none());
        assert!(ClickResolver::default()
            .locate(&engine, &flat, 10.0, 10.0)
            .is_none());
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn test_unprojectable_click_skips_engine() {
        // Orthographic with a 180° field: the canvas corner is off the disk.
        struct WideOrtho;
        impl SkyEngine for WideOrtho {
            fn fov(&self) -> f64 {
                std::f64::consts::PI
            }
            fn projection(&self) -> i32 {
                8
            }
            fn convert_frame(&self, _: Frame, _: Frame, _: Vector3) -> Result<Vector3, EngineError> {
                Err(EngineError::primitive("convert_frame", "should not be called"))
            }
            fn cartesian_to_spherical(&self, _: Vector3) -> Result<(f64, f64), EngineError> {
                Err(EngineError::primitive("c2s", "should not be called"))
            }
        }
        let square = CanvasRect::new(0.0, 0.0, 500.0, 500.0);
        assert!(resolve_click_coordinates(&WideOrtho, &square, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_config_carried_into_result() {
        let engine = StubEngine::new(1);
        let resolver = ClickResolver::new(
            ResolverConfig::default()
                .with_frame(Frame::Jnow)
                .with_time_scale(TimeScale::Tdb)
                .with_precision(0, 1),
        );
        let coords = resolver.resolve(&engine, &canvas(), 320.0, 240.0).unwrap();
        assert_eq!(coords.frame, Frame::Jnow);
        assert_eq!(coords.time_scale, TimeScale::Tdb);
        assert_eq!(coords.dec_str, "-90° 00' 00.0\"");
        assert!(coords.ra_str.ends_with("00s"));
    }

    #[test]
    fn test_quality_flags() {
        let engine = StubEngine::new(1);
        let inside = resolve_click_coordinates(&engine, &canvas(), 600.0, 20.0).unwrap();
        assert_eq!(inside.quality, CoordinateQuality::Precise);

        let outside = resolve_click_coordinates(&engine, &canvas(), 700.0, 240.0).unwrap();
        assert_eq!(outside.quality, CoordinateQuality::Extrapolated);
    }
}
