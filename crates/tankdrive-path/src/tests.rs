use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tankdrive_core::constants::*;
use tankdrive_core::enums::PathKind;

use crate::easing::{heading_from_direction, smoothstep, wrap_angle};
use crate::{CubicBezier, Curve, RectanglePath, ScenePath};

fn assert_vec_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "expected {expected:?}, got {actual:?}"
    );
}

fn random_point(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
    )
}

// ---- Bézier ----

#[test]
fn test_bezier_endpoints_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let curve = CubicBezier::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        assert_eq!(curve.position(0.0), curve.p0());
        assert_eq!(curve.position(1.0), curve.p3());
    }
}

#[test]
fn test_bezier_midpoint_default_curve() {
    // (P0 + 3 P1 + 3 P2 + P3) / 8
    let curve = CubicBezier::default();
    assert_vec_near(curve.position(0.5), Vec3::new(7.5, 0.0, 0.0), 1e-5);
}

#[test]
fn test_bezier_affine_invariance() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..20 {
        let points = [
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        ];
        let axis = random_point(&mut rng).try_normalize().unwrap_or(Vec3::Y);
        let transform = Mat4::from_scale_rotation_translation(
            Vec3::new(
                rng.gen_range(0.5..2.0),
                rng.gen_range(0.5..2.0),
                rng.gen_range(0.5..2.0),
            ),
            Quat::from_axis_angle(axis, rng.gen_range(-PI..PI)),
            random_point(&mut rng),
        );

        let curve = CubicBezier::from_points(points);
        let mapped = CubicBezier::from_points(points.map(|p| transform.transform_point3(p)));

        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let expected = transform.transform_point3(curve.position(t));
            assert_vec_near(mapped.position(t), expected, 1e-2);
        }
    }
}

#[test]
fn test_bezier_extrapolates_outside_unit_interval() {
    let curve = CubicBezier::default();
    let beyond = curve.position(1.5);
    assert!(beyond.x > curve.p3().x, "t > 1 should extend past P3, got {beyond:?}");
    let before = curve.position(-0.5);
    assert!(before.x < curve.p0().x, "t < 0 should extend before P0, got {before:?}");
}

#[test]
fn test_bezier_direction_follows_tangent() {
    let curve = CubicBezier::default();
    let start = curve.sample(0.0);
    assert_vec_near(start.direction, (curve.p1() - curve.p0()).normalize(), 1e-5);
    let end = curve.sample(1.0);
    assert_vec_near(end.direction, (curve.p3() - curve.p2()).normalize(), 1e-5);
}

#[test]
fn test_bezier_degenerate_tangent_uses_chord() {
    let curve = CubicBezier::new(
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 4.0),
        Vec3::new(4.0, 0.0, 0.0),
    );
    let sample = curve.sample(0.0);
    assert_eq!(sample.position, Vec3::ZERO);
    assert_vec_near(sample.direction, Vec3::X, 1e-6);
}

#[test]
fn test_bezier_parameter_resets_past_end() {
    let curve = CubicBezier::default();
    let step = curve.wrap_parameter(1.0);
    assert_eq!(step.t, 1.0);
    assert!(!step.wrapped);
    let step = curve.wrap_parameter(1.004);
    assert_eq!(step.t, 0.0);
    assert!(step.wrapped);
}

#[test]
fn test_bezier_negative_parameter_pulled_to_start() {
    let curve = CubicBezier::default();
    let step = curve.wrap_parameter(-0.5);
    assert_eq!(step.t, 0.0);
    assert!(!step.wrapped);
    assert_eq!(curve.position(step.t), curve.p0());
}

#[test]
fn test_bezier_length_is_chord() {
    let curve = CubicBezier::default();
    assert_eq!(curve.approximate_length(), 15.0);
}

#[test]
fn test_bezier_set_control_points_replaces_all() {
    let mut curve = CubicBezier::default();
    let points = [Vec3::ONE, Vec3::X, Vec3::Y, Vec3::Z];
    curve.set_control_points(points);
    assert_eq!(curve.control_points(), points);
    assert_eq!(curve.p2(), Vec3::Y);
}

// ---- Rectangle ----

#[test]
fn test_rectangle_quarter_points_hit_corners() {
    let path = RectanglePath::default();
    let [c0, c1, c2, c3] = RECT_CORNERS;
    assert_eq!(path.position(0.0), c0);
    assert_eq!(path.position(0.25), c1);
    assert_eq!(path.position(0.5), c2);
    assert_eq!(path.position(0.75), c3);
    assert_vec_near(path.position(1.0 - 1e-6), c0, 1e-3);
}

#[test]
fn test_rectangle_linear_within_segment() {
    let path = RectanglePath::default();
    assert_vec_near(path.position(0.125), Vec3::new(5.0, 0.0, 0.0), 1e-5);
    assert_vec_near(path.position(0.375), Vec3::new(10.0, 0.0, 5.0), 1e-5);
}

#[test]
fn test_rectangle_out_of_range_falls_back_to_start() {
    let path = RectanglePath::default();
    assert_eq!(path.position(1.0), RECT_CORNERS[0]);
    assert_eq!(path.position(-0.1), RECT_CORNERS[0]);

    let sample = path.sample(1.3);
    assert_eq!(sample.position, RECT_CORNERS[0]);
    assert_vec_near(sample.direction, Vec3::X, 1e-6);
}

#[test]
fn test_rectangle_sample_eases_corners() {
    let path = RectanglePath::default();

    // Raw fraction 0.05 is below the ease window: parked on the corner.
    let early = path.sample(0.05 / 4.0);
    assert_eq!(early.position, RECT_CORNERS[0]);
    assert_vec_near(early.direction, Vec3::X, 1e-5);

    // Mid-edge is unaffected by the symmetric ease.
    let mid = path.sample(0.125);
    assert_vec_near(mid.position, Vec3::new(5.0, 0.0, 0.0), 1e-4);
    assert_vec_near(mid.direction, Vec3::X, 1e-5);
}

#[test]
fn test_rectangle_lookahead_wraps_near_edge_end() {
    let path = RectanglePath::default();
    // Raw fraction 0.95 saturates to the end corner; the probe wraps to the
    // edge start, so the direction faces back along the edge.
    let late = path.sample(0.95 / 4.0);
    assert_eq!(late.position, RECT_CORNERS[1]);
    assert_vec_near(late.direction, -Vec3::X, 1e-5);

    // The reversal begins near 85% of the raw fraction.
    assert_vec_near(path.sample(0.84 / 4.0).direction, Vec3::X, 1e-5);
    assert_vec_near(path.sample(0.86 / 4.0).direction, -Vec3::X, 1e-5);
}

#[test]
fn test_rectangle_heading_per_edge() {
    let path = RectanglePath::default();
    let headings: Vec<f32> = [0.125, 0.375, 0.625, 0.875]
        .iter()
        .map(|&t| heading_from_direction(path.sample(t).direction))
        .collect();
    assert!((headings[0] - 0.0).abs() < 1e-4);
    assert!((headings[1] + FRAC_PI_2).abs() < 1e-4);
    assert!((headings[2].abs() - PI).abs() < 1e-4);
    assert!((headings[3] - FRAC_PI_2).abs() < 1e-4);
}

#[test]
fn test_rectangle_parameter_wraps_modulo_one() {
    let path = RectanglePath::default();
    let step = path.wrap_parameter(0.4);
    assert_eq!(step.t, 0.4);
    assert!(!step.wrapped);
    let step = path.wrap_parameter(1.25);
    assert!((step.t - 0.25).abs() < 1e-6);
    assert!(step.wrapped);
}

#[test]
fn test_rectangle_length_is_perimeter() {
    assert_eq!(RectanglePath::default().approximate_length(), 40.0);
}

// ---- Easing ----

#[test]
fn test_smoothstep_saturates_and_is_symmetric() {
    assert_eq!(smoothstep(0.1, 0.9, 0.0), 0.0);
    assert_eq!(smoothstep(0.1, 0.9, 0.1), 0.0);
    assert_eq!(smoothstep(0.1, 0.9, 0.95), 1.0);
    assert!((smoothstep(0.1, 0.9, 0.5) - 0.5).abs() < 1e-6);
    let a = smoothstep(0.1, 0.9, 0.3);
    let b = smoothstep(0.1, 0.9, 0.7);
    assert!((a + b - 1.0).abs() < 1e-5);
}

#[test]
fn test_wrap_angle_folds_into_half_turn() {
    assert!((wrap_angle(1.5 * PI) + FRAC_PI_2).abs() < 1e-5);
    assert!((wrap_angle(-1.5 * PI) - FRAC_PI_2).abs() < 1e-5);
    assert!((wrap_angle(0.3) - 0.3).abs() < 1e-6);
    // Several turns away still folds in one step.
    assert!((wrap_angle(0.3 + 6.0 * PI) - 0.3).abs() < 1e-4);
}

// ---- ScenePath ----

#[test]
fn test_scene_path_from_json() {
    let json = r#"{"kind":"Bezier","p0":[0,0,0],"p1":[1,1,0],"p2":[2,-1,0],"p3":[3,0,0]}"#;
    let path: ScenePath = serde_json::from_str(json).unwrap();
    assert_eq!(path.kind(), PathKind::Bezier);
    assert_eq!(path.position(1.0), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(path.approximate_length(), 3.0);
}

#[test]
fn test_scene_path_kind_alone_uses_default_points() {
    let bezier: ScenePath = serde_json::from_str(r#"{"kind":"Bezier"}"#).unwrap();
    assert_eq!(bezier, ScenePath::Bezier(CubicBezier::default()));
    assert_eq!(
        CubicBezier::default().control_points(),
        BEZIER_CONTROL_POINTS
    );

    let rectangle: ScenePath = serde_json::from_str(r#"{"kind":"Rectangle"}"#).unwrap();
    assert_eq!(rectangle, ScenePath::Rectangle(RectanglePath::default()));
}

#[test]
fn test_scene_path_control_points_only_on_bezier() {
    let mut rect = ScenePath::default();
    assert_eq!(rect.kind(), PathKind::Rectangle);
    assert!(!rect.set_control_points([Vec3::ZERO; 4]));
    assert_eq!(rect.position(0.25), RECT_CORNERS[1]);

    let mut bezier = ScenePath::Bezier(CubicBezier::default());
    let points = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::X * 3.0];
    assert!(bezier.set_control_points(points));
    assert_eq!(bezier.position(1.0), Vec3::X * 3.0);
}
