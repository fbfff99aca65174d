//! Abtastung eines gelösten Kreisbogens als Polylinie (Vorschau) und Scheitelpunkt.

use super::arch_solver::{rotated_point, SolverResult};
use glam::DVec3;

/// Tastet den Bogen in `segments` gleich große Winkelschritte ab.
///
/// Liefert `segments + 1` Punkte vom Start- bis exakt zum End-Endpunkt,
/// oder eine leere Liste bei ungültigem Ergebnis.
pub fn sample_arc(result: &SolverResult, segments: u32) -> Vec<DVec3> {
    if !result.valid {
        return Vec::new();
    }
    sweep_points(
        result.oriented_endpoints,
        result.circle_center,
        result.pivot_normal,
        result.angular_span,
        segments,
    )
}

/// Dreht `endpoints.0` schrittweise um `axis` durch `center` über `span` Radiant.
///
/// Der letzte Punkt ist exakt `endpoints.1`. Leer bei `segments == 0`.
pub fn sweep_points(
    endpoints: (DVec3, DVec3),
    center: DVec3,
    axis: DVec3,
    span: f64,
    segments: u32,
) -> Vec<DVec3> {
    if segments == 0 {
        return Vec::new();
    }
    let (start, end) = endpoints;
    let offset = start - center;
    let step = span / f64::from(segments);

    let mut points: Vec<DVec3> = (0..segments)
        .map(|i| center + rotated_point(offset, axis, step * f64::from(i)))
        .collect();
    points.push(end);
    points
}

/// Scheitelpunkt des Bogens (halbe Winkelspanne ab Start).
pub fn arc_apex(result: &SolverResult) -> Option<DVec3> {
    if !result.valid {
        return None;
    }
    let (start, _) = result.oriented_endpoints;
    Some(
        result.circle_center
            + rotated_point(
                start - result.circle_center,
                result.pivot_normal,
                result.angular_span * 0.5,
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arch_solver::solve_arch;
    use crate::core::chord::ArchChord;
    use approx::assert_relative_eq;

    fn semicircle() -> SolverResult {
        let chord = ArchChord::new(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0))
            .expect("Sehne sollte gültig sein");
        solve_arch(&chord, DVec3::new(2.0, 2.0, 0.0))
    }

    #[test]
    fn samples_segment_count_plus_one_points_on_circle() {
        let result = semicircle();
        let points = sample_arc(&result, 16);

        assert_eq!(points.len(), 17);
        assert_eq!(points[0], result.oriented_endpoints.0);
        assert_eq!(points[16], result.oriented_endpoints.1);
        for p in &points {
            assert_relative_eq!(p.distance(result.circle_center), 2.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn semicircle_apex_is_probe() {
        let apex = arc_apex(&semicircle()).expect("Scheitel sollte existieren");
        assert!(apex.abs_diff_eq(DVec3::new(2.0, 2.0, 0.0), 1e-9));
    }

    #[test]
    fn invalid_result_yields_nothing() {
        let invalid = SolverResult::invalid();
        assert!(sample_arc(&invalid, 8).is_empty());
        assert!(arc_apex(&invalid).is_none());
    }
}
