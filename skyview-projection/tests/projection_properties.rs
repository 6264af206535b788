use approx::assert_abs_diff_eq;
use skyview_core::assert_ulp_lt;
use skyview_core::Vector3;
use skyview_projection::{
    ndc_to_view_vector, view_vector_to_ndc, ProjectionContext, ProjectionMode, POLE_EPSILON,
    VIEW_FORWARD,
};
use std::f64::consts::{FRAC_PI_2, PI};

const FOV: f64 = std::f64::consts::FRAC_PI_3;

fn ctx(mode: ProjectionMode, fov: f64, aspect: f64) -> ProjectionContext {
    ProjectionContext::new(mode, fov, aspect)
}

fn azimuthal_modes() -> impl Iterator<Item = ProjectionMode> {
    ProjectionMode::ALL.into_iter().filter(|m| m.is_azimuthal())
}

#[test]
fn forward_direction_maps_to_center_for_azimuthal_modes() {
    for mode in azimuthal_modes() {
        let ndc = view_vector_to_ndc(&VIEW_FORWARD, &ctx(mode, FOV, 1.0)).unwrap();
        assert_abs_diff_eq!(ndc.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ndc.y(), 0.0, epsilon = 1e-15);
    }
}

#[test]
fn zero_and_non_finite_vectors_are_rejected_in_every_mode() {
    let bad = [
        Vector3::zeros(),
        Vector3::new(f64::NAN, 0.0, -1.0),
        Vector3::new(0.0, f64::INFINITY, -1.0),
    ];
    for mode in ProjectionMode::ALL {
        for v in &bad {
            assert!(view_vector_to_ndc(v, &ctx(mode, FOV, 1.0)).is_none(), "{mode} {v}");
        }
    }
}

#[test]
fn orthographic_rejects_directions_behind_the_camera() {
    let c = ctx(ProjectionMode::ORTHOGRAPHIC, FOV, 1.0);
    assert!(view_vector_to_ndc(&Vector3::new(0.0, 0.0, 1.0), &c).is_none());
    assert!(view_vector_to_ndc(&Vector3::new(0.3, 0.1, 0.5), &c).is_none());
}

#[test]
fn perspective_rejects_the_image_plane_and_behind() {
    let c = ctx(ProjectionMode::PERSPECTIVE, FOV, 1.0);
    assert!(view_vector_to_ndc(&Vector3::new(1.0, 0.0, 0.0), &c).is_none());
    assert!(view_vector_to_ndc(&Vector3::new(0.0, 0.2, 1.0), &c).is_none());
}

#[test]
fn screen_center_looks_forward_in_every_mode() {
    for mode in ProjectionMode::ALL {
        let v = ndc_to_view_vector(0.0, 0.0, &ctx(mode, FOV, 1.0)).unwrap();
        assert!(v.z < 0.0, "{mode}");
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn roundtrip_in_every_mode() {
    let v = Vector3::new(0.1, 0.2, -1.0).normalize();
    for mode in ProjectionMode::ALL {
        let c = ctx(mode, FOV, 1.5);
        let ndc = view_vector_to_ndc(&v, &c).unwrap();
        let back = ndc_to_view_vector(ndc.x(), ndc.y(), &c).unwrap();
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-9);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-9);
    }
}

#[test]
fn unnormalized_input_gives_the_same_point() {
    let v = Vector3::new(0.3, -0.2, -2.0);
    for mode in ProjectionMode::ALL {
        let c = ctx(mode, FOV, 1.2);
        let a = view_vector_to_ndc(&v, &c).unwrap();
        let b = view_vector_to_ndc(&(v * 1000.0), &c).unwrap();
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 1e-12);
    }
}

#[test]
fn half_field_lands_on_the_screen_edge() {
    let half = FOV / 2.0;
    let right = Vector3::new(half.sin(), 0.0, -half.cos());
    let up = Vector3::new(0.0, half.sin(), -half.cos());
    for mode in ProjectionMode::ALL {
        let c = ctx(mode, FOV, 2.0);
        let ndc = view_vector_to_ndc(&right, &c).unwrap();
        assert_abs_diff_eq!(ndc.x(), 0.5, epsilon = 1e-12);
        let ndc = view_vector_to_ndc(&up, &c).unwrap();
        assert_abs_diff_eq!(ndc.y(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn hammer_rejects_points_far_outside_the_ellipse() {
    let c = ctx(ProjectionMode::HAMMER, FOV, 1.0);
    assert!(ndc_to_view_vector(100.0, 100.0, &c).is_none());
}

#[test]
fn latitude_overflow_is_rejected_by_sinusoidal_and_cylindrical() {
    for mode in [ProjectionMode::SINUSOIDAL, ProjectionMode::CYLINDRICAL] {
        let c = ctx(mode, std::f64::consts::PI, 1.0);
        assert!(ndc_to_view_vector(0.0, 1.5, &c).is_none(), "{mode}");
        assert!(ndc_to_view_vector(0.0, -1.5, &c).is_none(), "{mode}");
    }
}

#[test]
fn mercator_rejects_view_space_poles() {
    let c = ctx(ProjectionMode::MERCATOR, FOV, 1.0);
    assert!(view_vector_to_ndc(&Vector3::new(0.0, 1.0, 0.0), &c).is_none());
    assert!(view_vector_to_ndc(&Vector3::new(0.0, -1.0, 0.0), &c).is_none());
}

#[test]
fn unknown_mode_ids_behave_like_perspective() {
    let v = Vector3::new(-0.25, 0.15, -1.0);
    let reference = view_vector_to_ndc(&v, &ProjectionContext::from_id(0, FOV, 1.3)).unwrap();
    for id in [6, 99, -3] {
        let c = ProjectionContext::from_id(id, FOV, 1.3);
        assert_eq!(view_vector_to_ndc(&v, &c), Some(reference), "id {id}");
        assert_eq!(
            ndc_to_view_vector(0.4, -0.2, &c),
            ndc_to_view_vector(0.4, -0.2, &ProjectionContext::from_id(0, FOV, 1.3))
        );
    }
}

#[test]
fn zero_aspect_falls_back_to_one() {
    let v = Vector3::new(0.2, 0.1, -1.0);
    for mode in ProjectionMode::ALL {
        let zero = view_vector_to_ndc(&v, &ctx(mode, FOV, 0.0)).unwrap();
        let one = view_vector_to_ndc(&v, &ctx(mode, FOV, 1.0)).unwrap();
        assert!(zero.is_finite(), "{mode}");
        assert_eq!(zero, one, "{mode}");
    }
}

#[test]
fn zero_fov_does_not_produce_nan() {
    for mode in ProjectionMode::ALL {
        let c = ctx(mode, 0.0, 1.0);
        if let Some(ndc) = view_vector_to_ndc(&VIEW_FORWARD, &c) {
            assert!(ndc.is_finite(), "{mode}");
        }
        if let Some(v) = ndc_to_view_vector(0.0, 0.0, &c) {
            assert!(v.is_finite(), "{mode}");
        }
    }
}

#[test]
fn wide_fields_beyond_the_mode_domain_are_rejected() {
    let v = Vector3::new(0.1, 0.0, -1.0);
    let wide = ctx(ProjectionMode::PERSPECTIVE, std::f64::consts::PI, 1.0);
    assert!(view_vector_to_ndc(&v, &wide).is_none());

    let full = ctx(ProjectionMode::STEREOGRAPHIC, 2.0 * std::f64::consts::PI, 1.0);
    assert!(view_vector_to_ndc(&v, &full).is_none());

    // Fisheye and equal-area cover the whole sphere.
    for mode in [ProjectionMode::FISHEYE, ProjectionMode::EQUAL_AREA] {
        let c = ctx(mode, 2.0 * std::f64::consts::PI, 1.0);
        let back = Vector3::new(0.1, 0.0, 1.0);
        let ndc = view_vector_to_ndc(&back, &c).unwrap();
        assert!(ndc.x() > 0.9 && ndc.x() <= 1.0, "{mode}: {}", ndc.x());
    }
}

/// Modes whose field-of-view domain excludes `fov`.
fn outside_domain(mode: ProjectionMode, fov: f64) -> bool {
    mode == ProjectionMode::PERSPECTIVE
        || (mode == ProjectionMode::STEREOGRAPHIC && fov >= 2.0 * PI)
}

#[test]
fn wide_fields_work_in_every_mode_that_admits_them() {
    let v = Vector3::new(0.1, 0.2, -1.0).normalize();
    for fov in [PI, 1.2 * PI, 2.0 * PI] {
        for mode in ProjectionMode::ALL {
            let c = ctx(mode, fov, 1.0);
            if outside_domain(mode, fov) {
                assert!(ndc_to_view_vector(0.0, 0.0, &c).is_none(), "{mode} {fov}");
                continue;
            }

            let center = ndc_to_view_vector(0.0, 0.0, &c).unwrap();
            assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(center.z, -1.0, epsilon = 1e-12);

            let ndc = view_vector_to_ndc(&v, &c).unwrap();
            let back = ndc_to_view_vector(ndc.x(), ndc.y(), &c).unwrap();
            assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-9);
            assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-9);
        }
    }
}

#[test]
fn mercator_full_sky_reaches_close_to_the_poles() {
    let c = ctx(ProjectionMode::MERCATOR, 2.0 * PI, 1.0);
    let lat = FRAC_PI_2 - 2.0 * POLE_EPSILON;
    let near_pole = Vector3::new(0.0, lat.sin(), -lat.cos());
    let ndc = view_vector_to_ndc(&near_pole, &c).unwrap();
    assert!(ndc.y() > 0.9 && ndc.y() < 1.0, "{}", ndc.y());
}

#[test]
fn cylindrical_is_linear_in_longitude() {
    let c = ctx(ProjectionMode::CYLINDRICAL, 0.8, 1.0);
    let lon: f64 = 0.2;
    let v = Vector3::new(lon.sin(), 0.0, -lon.cos());
    let ndc = view_vector_to_ndc(&v, &c).unwrap();
    assert_ulp_lt!(ndc.x(), 0.5, 4);
    assert_eq!(ndc.y(), 0.0);
}
