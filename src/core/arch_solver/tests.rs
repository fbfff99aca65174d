use super::{rotated_point, sagitta_radius, select_center, solve_arch, SolverResult};
use crate::core::chord::ArchChord;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

fn chord(p0: DVec3, p1: DVec3) -> ArchChord {
    ArchChord::new(p0, p1).expect("Sehne sollte gültig sein")
}

fn standard_chord() -> ArchChord {
    chord(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0))
}

fn assert_vec_eq(actual: DVec3, expected: DVec3) {
    assert!(
        actual.abs_diff_eq(expected, 1e-9),
        "erwartet {expected:?}, erhalten {actual:?}"
    );
}

/// Endpunkt der Sweep-Drehung vom Start um die volle Spanne.
fn swept_end(result: &SolverResult) -> DVec3 {
    let (start, _) = result.oriented_endpoints;
    result.circle_center
        + rotated_point(
            start - result.circle_center,
            result.pivot_normal,
            result.angular_span,
        )
}

// ── Szenarien ──

#[test]
fn semicircle_probe_at_top() {
    let result = solve_arch(&standard_chord(), DVec3::new(2.0, 2.0, 0.0));

    assert!(result.valid);
    assert_relative_eq!(result.radius, 2.0, max_relative = 1e-9);
    assert_relative_eq!(result.angular_span, PI, max_relative = 1e-9);
    assert_vec_eq(result.circle_center, DVec3::new(2.0, 0.0, 0.0));
    assert_vec_eq(result.pivot_normal, DVec3::Z);
    assert_relative_eq!(result.circle_center.distance(DVec3::ZERO), 2.0, max_relative = 1e-9);
    assert_relative_eq!(
        result.circle_center.distance(DVec3::new(4.0, 0.0, 0.0)),
        2.0,
        max_relative = 1e-9
    );
    assert_eq!(
        result.oriented_endpoints,
        (DVec3::new(4.0, 0.0, 0.0), DVec3::ZERO)
    );
}

#[test]
fn nearly_collinear_probe_gives_flat_arc() {
    let result = solve_arch(&standard_chord(), DVec3::new(2.0, 0.01, 0.0));

    assert!(result.valid);
    assert_relative_eq!(result.radius, 0.005 + 16.0 / 0.08, max_relative = 1e-9);
    assert!(result.radius > 100.0);
    assert!(result.angular_span > 0.0);
    assert!(result.angular_span < 0.05, "Spanne {}", result.angular_span);
}

#[test]
fn collinear_probe_is_invalid() {
    let c = standard_chord();
    for probe in [
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(-3.5, 0.0, 0.0),
    ] {
        let result = solve_arch(&c, probe);
        assert!(!result.valid, "Probe {probe:?} sollte ungültig sein");
        assert_eq!(result, SolverResult::invalid());
    }
}

#[test]
fn probe_on_endpoint_is_invalid() {
    let c = standard_chord();
    assert!(!solve_arch(&c, c.p0).valid);
    assert!(!solve_arch(&c, c.p1).valid);
}

#[test]
fn circle_passes_through_probe_on_bisector() {
    let result = solve_arch(&standard_chord(), DVec3::new(2.0, 1.0, 0.0));

    assert!(result.valid);
    assert_relative_eq!(result.radius, 2.5, max_relative = 1e-9);
    assert_vec_eq(result.circle_center, DVec3::new(2.0, -1.5, 0.0));
    assert_relative_eq!(
        result.circle_center.distance(DVec3::new(2.0, 1.0, 0.0)),
        result.radius,
        max_relative = 1e-9
    );
    assert!(result.angular_span < PI);
}

// ── Invarianten ──

#[test]
fn sagitta_round_trip_in_arbitrary_plane() {
    let p0 = DVec3::new(1.0, 2.0, 3.0);
    let p1 = DVec3::new(4.0, -1.0, 5.0);
    let c = chord(p0, p1);
    let up = (p1 - p0).cross(DVec3::new(0.3, 0.2, 1.0)).normalize();

    for h in [0.05, 0.5, 1.0, c.half_width(), 3.0, 7.5, 40.0] {
        let probe = c.center + up * h;
        let result = solve_arch(&c, probe);

        assert!(result.valid, "h = {h}");
        let expected = h / 2.0 + c.width * c.width / (8.0 * h);
        assert_relative_eq!(result.radius, expected, max_relative = 1e-9);
        assert_relative_eq!(result.sagitta, h, max_relative = 1e-9);
        assert_relative_eq!(
            result.circle_center.distance(probe),
            result.radius,
            max_relative = 1e-9
        );
    }
}

#[test]
fn reflex_case_spans_more_than_half_turn() {
    let probe = DVec3::new(2.0, 3.0, 0.0);
    let result = solve_arch(&standard_chord(), probe);

    assert!(result.valid);
    assert!(result.radius > 2.0);
    assert!(result.sagitta > result.radius);
    assert!(result.angular_span > PI);
    assert!(result.angular_span < TAU);
    assert_vec_eq(result.circle_center, DVec3::new(2.0, 5.0 / 6.0, 0.0));
    assert_relative_eq!(
        result.circle_center.distance(probe),
        result.radius,
        max_relative = 1e-9
    );
}

#[test]
fn span_is_open_interval_for_non_collinear_probes() {
    let c = chord(DVec3::new(-1.0, 0.5, 2.0), DVec3::new(3.0, 1.5, -1.0));
    for x in -3..=3 {
        for y in -3..=3 {
            for z in [-2.0, 0.5, 4.0] {
                let probe = DVec3::new(x as f64 * 1.7, y as f64 * 0.9, z);
                let result = solve_arch(&c, probe);
                if !result.valid {
                    continue;
                }
                assert!(result.angular_span > 0.0, "Probe {probe:?}");
                assert!(result.angular_span < TAU, "Probe {probe:?}");
                assert_abs_diff_eq!(result.pivot_normal.length(), 1.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn sweep_from_start_ends_on_second_endpoint() {
    let c = standard_chord();
    for probe in [
        DVec3::new(2.0, 2.0, 0.0),
        DVec3::new(2.0, -0.7, 0.0),
        DVec3::new(2.0, 3.0, 0.0),
        DVec3::new(2.0, -6.0, 0.0),
        DVec3::new(0.5, 1.2, 0.8),
    ] {
        let result = solve_arch(&c, probe);
        assert!(result.valid);
        assert!(
            swept_end(&result).abs_diff_eq(result.oriented_endpoints.1, 1e-9),
            "Probe {probe:?}"
        );
    }
}

#[test]
fn sweep_midpoint_lies_on_probe_side() {
    let c = standard_chord();
    for probe in [
        DVec3::new(2.0, 0.3, 0.0),
        DVec3::new(2.0, -2.0, 0.0),
        DVec3::new(2.0, 9.0, 0.0),
        DVec3::new(2.0, -9.0, 0.0),
    ] {
        let result = solve_arch(&c, probe);
        let (start, _) = result.oriented_endpoints;
        let mid = result.circle_center
            + rotated_point(
                start - result.circle_center,
                result.pivot_normal,
                result.angular_span * 0.5,
            );
        assert!(
            (mid - c.center).dot(probe - c.center) > 0.0,
            "Probe {probe:?}"
        );
    }
}

#[test]
fn solver_is_idempotent() {
    let c = standard_chord();
    let probe = DVec3::new(1.3, 0.4, -0.2);
    assert_eq!(solve_arch(&c, probe), solve_arch(&c, probe));
}

#[test]
fn side_selection_ignores_candidate_labels() {
    let probe = DVec3::new(2.0, 1.0, 0.0);
    let pos = (DVec3::new(2.0, -2.0, 0.0), DVec3::new(2.0, -1.5, 0.0));
    let neg = (DVec3::new(2.0, 2.0, 0.0), DVec3::new(2.0, 1.5, 0.0));

    let chosen = select_center(pos, neg, probe);
    assert_eq!(chosen, select_center(neg, pos, probe));
    assert_eq!(chosen, DVec3::new(2.0, -1.5, 0.0));
}

#[test]
fn mirrored_probe_mirrors_center() {
    let c = standard_chord();
    let above = solve_arch(&c, DVec3::new(2.0, 1.0, 0.0));
    let below = solve_arch(&c, DVec3::new(2.0, -1.0, 0.0));

    assert_relative_eq!(above.radius, below.radius, max_relative = 1e-12);
    assert_relative_eq!(above.angular_span, below.angular_span, max_relative = 1e-12);
    assert_vec_eq(above.circle_center, DVec3::new(2.0, -1.5, 0.0));
    assert_vec_eq(below.circle_center, DVec3::new(2.0, 1.5, 0.0));
}

#[test]
fn sagitta_radius_handles_zero_height() {
    assert_eq!(sagitta_radius(4.0, 0.0), 0.0);
    assert_relative_eq!(sagitta_radius(4.0, 2.0), 2.0);
}
