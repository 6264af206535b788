use skyview_core::constants::{HALF_PI, PI};
use skyview_core::math::asin_safe;
use skyview_core::Vector3;

use crate::context::{ProjectionContext, DOMAIN_EPSILON, SCALE_EPSILON, VIEW_FORWARD};
use crate::coordinate::NdcPoint;
use crate::error::{ProjectionError, ProjectionResult};

/// Below this transverse length a unit vector is treated as on-axis.
const AXIS_EPSILON: f64 = 1e-15;

/// Projections that keep the bearing around the view axis and vary only the
/// radial law `r(θ)`, θ being the angle from the view direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Azimuthal {
    /// `r = tan θ`
    Perspective,
    /// `r = 2 tan(θ/2)`
    Stereographic,
    /// `r = 2 sin(θ/2)`
    EqualArea,
    /// `r = θ`
    Fisheye,
    /// `r = sin θ`
    Orthographic,
}

impl Azimuthal {
    pub fn name(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Stereographic => "stereographic",
            Self::EqualArea => "equal-area",
            Self::Fisheye => "fisheye",
            Self::Orthographic => "orthographic",
        }
    }

    pub fn radius(self, theta: f64) -> f64 {
        match self {
            Self::Perspective => theta.tan(),
            Self::Stereographic => 2.0 * (theta / 2.0).tan(),
            Self::EqualArea => 2.0 * (theta / 2.0).sin(),
            Self::Fisheye => theta,
            Self::Orthographic => theta.sin(),
        }
    }

    /// Inverse of [`radius`](Self::radius).
    pub fn angle(self, r: f64) -> ProjectionResult<f64> {
        match self {
            Self::Perspective => Ok(r.atan()),
            Self::Stereographic => Ok(2.0 * (r / 2.0).atan()),
            Self::EqualArea => {
                let half = r / 2.0;
                if half > 1.0 + DOMAIN_EPSILON {
                    return Err(ProjectionError::out_of_bounds(
                        "equal-area: radius beyond the whole sphere",
                    ));
                }
                Ok(2.0 * asin_safe(half))
            }
            Self::Fisheye => {
                if r > PI + DOMAIN_EPSILON {
                    return Err(ProjectionError::out_of_bounds(
                        "fisheye: radius beyond the antipode",
                    ));
                }
                Ok(r.min(PI))
            }
            Self::Orthographic => {
                if r > 1.0 + DOMAIN_EPSILON {
                    return Err(ProjectionError::out_of_bounds(
                        "orthographic: radius outside the unit disk",
                    ));
                }
                Ok(asin_safe(r))
            }
        }
    }

    /// Radius at the edge of the field of view, `r(fov/2)`, with the half
    /// angle limited to what the mode can show.
    pub fn max_radius(self, half_fov: f64) -> ProjectionResult<f64> {
        let theta = match self {
            Self::Perspective if half_fov >= HALF_PI => {
                return Err(ProjectionError::degenerate_scale(
                    "perspective field of view must be below 180°",
                ));
            }
            Self::Stereographic if half_fov >= PI => {
                return Err(ProjectionError::degenerate_scale(
                    "stereographic field of view must be below 360°",
                ));
            }
            Self::Perspective | Self::Stereographic => half_fov,
            Self::EqualArea | Self::Fisheye => half_fov.min(PI),
            Self::Orthographic => half_fov.min(HALF_PI),
        };

        let r_max = self.radius(theta);
        if !r_max.is_finite() || r_max < SCALE_EPSILON {
            return Err(ProjectionError::degenerate_scale(format!(
                "{}: edge radius {r_max} for half field {half_fov}",
                self.name()
            )));
        }
        Ok(r_max)
    }

    pub(crate) fn project(
        self,
        view: &Vector3,
        ctx: &ProjectionContext,
    ) -> ProjectionResult<NdcPoint> {
        let v = view.try_normalize()?;
        let forward = v.dot(&VIEW_FORWARD);

        match self {
            Self::Perspective if forward <= 0.0 => {
                return Err(ProjectionError::singularity(
                    "perspective: direction not in front of the camera",
                ));
            }
            Self::Orthographic if forward < 0.0 => {
                return Err(ProjectionError::out_of_bounds(
                    "orthographic: direction behind the camera",
                ));
            }
            _ => {}
        }

        let r_max = self.max_radius(ctx.half_fov())?;

        let transverse = v.x.hypot(v.y);
        if transverse < AXIS_EPSILON {
            if forward > 0.0 {
                return Ok(NdcPoint::ORIGIN);
            }
            return Err(ProjectionError::singularity(
                "antipode of the view direction has no bearing",
            ));
        }

        let theta = transverse.atan2(forward);
        let rho = self.radius(theta) / r_max;
        if !rho.is_finite() {
            return Err(ProjectionError::singularity(format!(
                "{}: radius diverges at {theta} rad from the axis",
                self.name()
            )));
        }

        Ok(NdcPoint::new(
            v.x / transverse * rho / ctx.aspect(),
            v.y / transverse * rho,
        ))
    }

    pub(crate) fn deproject(
        self,
        ndc: NdcPoint,
        ctx: &ProjectionContext,
    ) -> ProjectionResult<Vector3> {
        let r_max = self.max_radius(ctx.half_fov())?;

        let sx = ndc.x() * ctx.aspect();
        let sy = ndc.y();
        let rho = sx.hypot(sy);
        if rho == 0.0 {
            return Ok(VIEW_FORWARD);
        }

        let theta = self.angle(rho * r_max)?;
        let (sin_theta, cos_theta) = theta.sin_cos();
        Ok(Vector3::new(
            sx / rho * sin_theta,
            sy / rho * sin_theta,
            -cos_theta,
        ))
    }
}
