use skyview_core::constants::{HALF_PI, PI, QUARTER_PI};

use crate::context::{DOMAIN_EPSILON, POLE_EPSILON};
use crate::coordinate::{MapCoord, PlaneCoord};
use crate::error::{ProjectionError, ProjectionResult};

/// Highest latitude a map projection is evaluated at.
pub(crate) const LAT_LIMIT: f64 = HALF_PI - POLE_EPSILON;

pub(crate) fn project_cylindrical(coord: MapCoord) -> ProjectionResult<PlaneCoord> {
    let lat = coord.lat().clamp(-LAT_LIMIT, LAT_LIMIT);
    Ok(PlaneCoord::new(coord.lon(), lat))
}

pub(crate) fn deproject_cylindrical(plane: PlaneCoord) -> ProjectionResult<MapCoord> {
    let lat = plane.y();
    if lat.abs() > HALF_PI + DOMAIN_EPSILON {
        return Err(ProjectionError::out_of_bounds(
            "cylindrical deprojection: |y| > π/2",
        ));
    }
    Ok(MapCoord::new(plane.x(), lat.clamp(-HALF_PI, HALF_PI)))
}

pub(crate) fn project_mercator(coord: MapCoord) -> ProjectionResult<PlaneCoord> {
    let lat = coord.lat();
    if lat.abs() > LAT_LIMIT {
        return Err(ProjectionError::singularity(
            "Mercator projection undefined at the poles",
        ));
    }
    let y = (QUARTER_PI + lat / 2.0).tan().ln();
    Ok(PlaneCoord::new(coord.lon(), y))
}

pub(crate) fn deproject_mercator(plane: PlaneCoord) -> ProjectionResult<MapCoord> {
    let lat = 2.0 * plane.y().exp().atan() - HALF_PI;
    Ok(MapCoord::new(plane.x(), lat))
}

pub(crate) fn project_miller(coord: MapCoord) -> ProjectionResult<PlaneCoord> {
    let y = 1.25 * (QUARTER_PI + 0.4 * coord.lat()).tan().ln();
    if !y.is_finite() {
        return Err(ProjectionError::singularity("Miller projection diverged"));
    }
    Ok(PlaneCoord::new(coord.lon(), y))
}

pub(crate) fn deproject_miller(plane: PlaneCoord) -> ProjectionResult<MapCoord> {
    let lat = 2.5 * (0.8 * plane.y()).exp().atan() - 0.625 * PI;
    if lat.abs() > HALF_PI + DOMAIN_EPSILON {
        return Err(ProjectionError::out_of_bounds(
            "Miller deprojection: latitude beyond the pole",
        ));
    }
    Ok(MapCoord::new(plane.x(), lat.clamp(-HALF_PI, HALF_PI)))
}
