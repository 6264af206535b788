use skyview_core::constants::{HALF_PI, PI, SQRT2};
use skyview_core::math::asin_safe;

use crate::context::DOMAIN_EPSILON;
use crate::coordinate::{MapCoord, PlaneCoord};
use crate::error::{ProjectionError, ProjectionResult};

/// Below this `cos φ` the sinusoidal inverse is at a pole.
const POLE_COS_EPSILON: f64 = 1e-10;

/// Hammer denominator guard.
const HAMMER_EPSILON: f64 = 1e-10;

pub(crate) fn project_sinusoidal(coord: MapCoord) -> ProjectionResult<PlaneCoord> {
    let lat = coord.lat();
    Ok(PlaneCoord::new(coord.lon() * lat.cos(), lat))
}

pub(crate) fn deproject_sinusoidal(plane: PlaneCoord) -> ProjectionResult<MapCoord> {
    let lat = plane.y();
    if lat.abs() > HALF_PI + DOMAIN_EPSILON {
        return Err(ProjectionError::out_of_bounds(
            "sinusoidal deprojection: |y| > π/2",
        ));
    }

    let cos_lat = lat.cos();
    if cos_lat.abs() < POLE_COS_EPSILON {
        return Err(ProjectionError::singularity(
            "sinusoidal deprojection: longitude undefined at the pole",
        ));
    }

    let lon = plane.x() / cos_lat;
    if lon.abs() > PI + DOMAIN_EPSILON {
        return Err(ProjectionError::out_of_bounds(
            "sinusoidal deprojection: |longitude| > π",
        ));
    }

    Ok(MapCoord::new(lon, lat))
}

pub(crate) fn project_hammer(coord: MapCoord) -> ProjectionResult<PlaneCoord> {
    let (sin_lat, cos_lat) = coord.lat().sin_cos();
    let (sin_half_lon, cos_half_lon) = (coord.lon() / 2.0).sin_cos();

    let denom = 1.0 + cos_lat * cos_half_lon;
    if denom < HAMMER_EPSILON {
        return Err(ProjectionError::singularity(
            "Hammer projection undefined opposite the center",
        ));
    }

    let gamma = (1.0 / denom).sqrt();
    let x = 2.0 * SQRT2 * cos_lat * sin_half_lon * gamma;
    let y = SQRT2 * sin_lat * gamma;
    Ok(PlaneCoord::new(x, y))
}

pub(crate) fn deproject_hammer(plane: PlaneCoord) -> ProjectionResult<MapCoord> {
    let (x, y) = (plane.x(), plane.y());

    let z_sq = 1.0 - (x / 4.0).powi(2) - (y / 2.0).powi(2);
    if z_sq < 0.0 {
        return Err(ProjectionError::out_of_bounds(
            "Hammer deprojection: point outside the auxiliary sphere",
        ));
    }

    if x * x / 8.0 + y * y / 2.0 > 1.0 + DOMAIN_EPSILON {
        return Err(ProjectionError::out_of_bounds(
            "Hammer deprojection: point outside the ellipse",
        ));
    }

    // |y z| <= 1 for every y once z² >= 0, so only rounding needs clamping.
    let z = z_sq.sqrt();
    let lat = asin_safe(y * z);
    let lon = 2.0 * (z * x).atan2(2.0 * (2.0 * z_sq - 1.0));
    Ok(MapCoord::new(lon, lat))
}
