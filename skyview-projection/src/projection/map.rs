use skyview_core::constants::PI;
use skyview_core::math::asin_safe;
use skyview_core::Vector3;

use super::cylindrical::{deproject_cylindrical, deproject_mercator, deproject_miller, LAT_LIMIT};
use super::cylindrical::{project_cylindrical, project_mercator, project_miller};
use super::pseudocylindrical::{deproject_hammer, deproject_sinusoidal};
use super::pseudocylindrical::{project_hammer, project_sinusoidal};
use crate::context::{ProjectionContext, SCALE_EPSILON};
use crate::coordinate::{MapCoord, NdcPoint, PlaneCoord};
use crate::error::{ProjectionError, ProjectionResult};

/// World-map style projections. A view direction is read as a
/// longitude/latitude pair around the camera, run through the map formula
/// and scaled so the field of view spans the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapProjection {
    Hammer,
    Cylindrical,
    Mercator,
    Sinusoidal,
    Miller,
}

/// `φ = asin(y)`, `λ = atan2(x, -z)` for a unit view vector.
pub fn view_to_map(v: &Vector3) -> MapCoord {
    MapCoord::new(v.x.atan2(-v.z), asin_safe(v.y))
}

pub fn map_to_view(coord: MapCoord) -> Vector3 {
    let (sin_lon, cos_lon) = coord.lon().sin_cos();
    let (sin_lat, cos_lat) = coord.lat().sin_cos();
    Vector3::new(cos_lat * sin_lon, sin_lat, -cos_lat * cos_lon)
}

impl MapProjection {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hammer => "Hammer",
            Self::Cylindrical => "cylindrical",
            Self::Mercator => "Mercator",
            Self::Sinusoidal => "sinusoidal",
            Self::Miller => "Miller",
        }
    }

    pub fn forward(self, coord: MapCoord) -> ProjectionResult<PlaneCoord> {
        match self {
            Self::Hammer => project_hammer(coord),
            Self::Cylindrical => project_cylindrical(coord),
            Self::Mercator => project_mercator(coord),
            Self::Sinusoidal => project_sinusoidal(coord),
            Self::Miller => project_miller(coord),
        }
    }

    pub fn inverse(self, plane: PlaneCoord) -> ProjectionResult<MapCoord> {
        match self {
            Self::Hammer => deproject_hammer(plane),
            Self::Cylindrical => deproject_cylindrical(plane),
            Self::Mercator => deproject_mercator(plane),
            Self::Sinusoidal => deproject_sinusoidal(plane),
            Self::Miller => deproject_miller(plane),
        }
    }

    /// Plane extents `(x_max, y_max)` that map to NDC ±1: the projection of
    /// `(λ_max, 0)` and `(0, φ_max)` with `λ_max = min(fov/2, π)` and
    /// `φ_max = min(fov/2, π/2 - ε)`.
    pub fn extent(self, half_fov: f64) -> ProjectionResult<(f64, f64)> {
        let lon_max = half_fov.min(PI);
        let lat_max = half_fov.min(LAT_LIMIT);

        let x_max = self.forward(MapCoord::new(lon_max, 0.0))?.x();
        let y_max = self.forward(MapCoord::new(0.0, lat_max))?.y();

        let usable = |m: f64| m.is_finite() && m >= SCALE_EPSILON;
        if !usable(x_max) || !usable(y_max) {
            return Err(ProjectionError::degenerate_scale(format!(
                "{}: extent ({x_max}, {y_max}) for half field {half_fov}",
                self.name()
            )));
        }
        Ok((x_max, y_max))
    }

    pub(crate) fn project(
        self,
        view: &Vector3,
        ctx: &ProjectionContext,
    ) -> ProjectionResult<NdcPoint> {
        let v = view.try_normalize()?;
        let (x_max, y_max) = self.extent(ctx.half_fov())?;
        let plane = self.forward(view_to_map(&v))?;
        Ok(NdcPoint::new(
            plane.x() / x_max / ctx.aspect(),
            plane.y() / y_max,
        ))
    }

    pub(crate) fn deproject(
        self,
        ndc: NdcPoint,
        ctx: &ProjectionContext,
    ) -> ProjectionResult<Vector3> {
        let (x_max, y_max) = self.extent(ctx.half_fov())?;
        let plane = PlaneCoord::new(ndc.x() * ctx.aspect() * x_max, ndc.y() * y_max);
        let coord = self.inverse(plane)?;
        Ok(map_to_view(coord))
    }
}
