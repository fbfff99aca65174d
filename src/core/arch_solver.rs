//! Drei-Punkt-Kreisbogen-Solver.
//!
//! Leitet aus einer Sehne (`p0`, `p1`) und einem beweglichen dritten Punkt
//! (`probe`) Kreismittelpunkt, Radius, Winkelspanne und Drehsinn ab.
//! Reine Funktion ohne eigenen Zustand; wird bei jeder Cursor-Bewegung
//! in der dritten Platzierungsstufe neu ausgewertet.

use super::chord::ArchChord;
use glam::{DQuat, DVec3};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Relative Toleranz, unter der die Ebenennormale als entartet gilt.
const NORMAL_EPSILON: f64 = 1e-12;

/// Ergebnis eines Solver-Laufs.
///
/// Bei `valid == false` sind alle übrigen Felder bedeutungslos (Nullwerte).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverResult {
    pub valid: bool,
    /// Einheitsnormale der Ebene durch `p0`, Sehnenmitte und `probe`
    pub pivot_normal: DVec3,
    pub circle_center: DVec3,
    /// Winkelspanne in Radiant, `(0, 2π)` bei gültigem Ergebnis
    pub angular_span: f64,
    /// Endpunkte in Sweep-Reihenfolge: Start, Ende
    pub oriented_endpoints: (DVec3, DVec3),
    pub radius: f64,
    /// Abstand Sehnenmitte → `probe`
    pub sagitta: f64,
}

impl SolverResult {
    /// Ungültiges Ergebnis (Geometrie nicht definiert).
    pub fn invalid() -> Self {
        Self {
            valid: false,
            pivot_normal: DVec3::ZERO,
            circle_center: DVec3::ZERO,
            angular_span: 0.0,
            oriented_endpoints: (DVec3::ZERO, DVec3::ZERO),
            radius: 0.0,
            sagitta: 0.0,
        }
    }
}

/// Löst den Kreisbogen für die gegebene Sehne und den Probe-Punkt.
pub fn solve_arch(chord: &ArchChord, probe: DVec3) -> SolverResult {
    let Some(pivot_normal) = plane_normal(chord.p0, chord.center, probe) else {
        return SolverResult::invalid();
    };
    if chord.touches_endpoint(probe) {
        return SolverResult::invalid();
    }

    let rot_pos = chord.center + rotated_point(chord.alignment, pivot_normal, FRAC_PI_2);
    let rot_neg = chord.center + rotated_point(chord.alignment, pivot_normal, -FRAC_PI_2);

    let sagitta = probe.distance(chord.center);
    let radius = sagitta_radius(chord.width, sagitta);

    let half_width = chord.half_width();
    let scale = (radius - sagitta) / half_width;
    let center_pos = chord.center.lerp(rot_pos, scale);
    let center_neg = chord.center.lerp(rot_neg, scale);

    let mut angular_span = unsigned_angle(chord.p0 - center_pos, chord.p1 - center_pos);
    if angular_span == 0.0 {
        return SolverResult::invalid();
    }
    // Probe jenseits des Kreismittelpunkts → großer Bogen
    if radius > half_width && sagitta > radius {
        angular_span = TAU - angular_span;
    }

    let circle_center = select_center((rot_pos, center_pos), (rot_neg, center_neg), probe);
    let oriented_endpoints =
        orient_endpoints(chord, circle_center, pivot_normal, radius, probe - chord.center);

    SolverResult {
        valid: true,
        pivot_normal,
        circle_center,
        angular_span,
        oriented_endpoints,
        radius,
        sagitta,
    }
}

/// Radius aus Sehnenlänge und Bogenhöhe: `h/2 + w²/(8h)`, `0` bei `h == 0`.
pub fn sagitta_radius(width: f64, sagitta: f64) -> f64 {
    if sagitta == 0.0 {
        return 0.0;
    }
    sagitta / 2.0 + width * width / (8.0 * sagitta)
}

/// Dreht `v` um `axis` (Einheitsvektor) um `angle` Radiant.
pub fn rotated_point(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    DQuat::from_axis_angle(axis, angle) * v
}

/// Wählt den Kreismittelpunkt anhand der Probe-Position.
///
/// Jeder Kandidat ist ein Paar aus ±90°-Referenzpunkt und daraus
/// interpoliertem Mittelpunkt. Gewählt wird der Mittelpunkt, dessen
/// Referenzpunkt weiter von `probe` entfernt liegt; der Bogen wölbt sich
/// dann zur Probe hin. Das Ergebnis hängt nicht von der Reihenfolge der
/// Paare ab (bei exaktem Gleichstand gewinnt `b`).
pub fn select_center(a: (DVec3, DVec3), b: (DVec3, DVec3), probe: DVec3) -> DVec3 {
    let (ref_a, center_a) = a;
    let (ref_b, center_b) = b;
    let dist_a = ref_a.distance_squared(probe);
    let dist_b = ref_b.distance_squared(probe);
    if dist_a > dist_b {
        center_a
    } else {
        center_b
    }
}

/// Normale der Ebene durch drei Punkte: `(v1 - v2) × (v2 - v3)`, normiert.
fn plane_normal(v1: DVec3, v2: DVec3, v3: DVec3) -> Option<DVec3> {
    let a = v1 - v2;
    let b = v2 - v3;
    let cross = a.cross(b);
    let length = cross.length();
    if length <= NORMAL_EPSILON * a.length() * b.length() {
        return None;
    }
    Some(cross / length)
}

/// Vorzeichenloser Winkel zwischen zwei Vektoren in `[0, π]`.
fn unsigned_angle(a: DVec3, b: DVec3) -> f64 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Drehwinkel von `from` nach `to` um `axis` (gegen den Uhrzeigersinn) in `[0, 2π)`.
fn ccw_angle(from: DVec3, to: DVec3, axis: DVec3) -> f64 {
    let angle = axis.dot(from.cross(to)).atan2(from.dot(to));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Ordnet die Endpunkte so, dass eine positive Drehung um `axis` vom
/// ersten zum zweiten Punkt über den Scheitel auf der Probe-Seite läuft.
fn orient_endpoints(
    chord: &ArchChord,
    circle_center: DVec3,
    axis: DVec3,
    radius: f64,
    bulge: DVec3,
) -> (DVec3, DVec3) {
    let side = axis.cross(chord.alignment).normalize();
    let side = if side.dot(bulge) >= 0.0 { side } else { -side };
    let apex = circle_center + side * radius;

    let start = chord.p0 - circle_center;
    let to_end = ccw_angle(start, chord.p1 - circle_center, axis);
    let to_apex = ccw_angle(start, apex - circle_center, axis);
    if to_apex < to_end {
        (chord.p0, chord.p1)
    } else {
        (chord.p1, chord.p0)
    }
}

#[cfg(test)]
mod tests;
