//! Sehne eines Bogens: die ersten beiden bestätigten Punkte samt abgeleiteter Größen.

use glam::DVec3;
use serde::Serialize;

/// Toleranz für "Punkte fallen zusammen" (Welteinheiten).
pub const POINT_EPSILON: f64 = 1e-9;

/// Sehne zwischen den beiden Bogen-Endpunkten.
///
/// Invariante: `p0` und `p1` liegen mehr als [`POINT_EPSILON`] auseinander.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchChord {
    /// Erster bestätigter Punkt
    pub p0: DVec3,
    /// Zweiter bestätigter Punkt
    pub p1: DVec3,
    /// Mittelpunkt der Sehne
    pub center: DVec3,
    /// Sehnenlänge `|p1 - p0|`
    pub width: f64,
    /// Vektor vom Sehnenmittelpunkt zum ersten Punkt
    pub alignment: DVec3,
}

impl ArchChord {
    /// Erstellt eine Sehne aus zwei Punkten.
    ///
    /// Gibt `None` zurück, wenn beide Punkte zusammenfallen.
    pub fn new(p0: DVec3, p1: DVec3) -> Option<Self> {
        let width = p0.distance(p1);
        if width <= POINT_EPSILON {
            return None;
        }
        let center = p0.midpoint(p1);
        Some(Self {
            p0,
            p1,
            center,
            width,
            alignment: p0 - center,
        })
    }

    /// Halbe Sehnenlänge.
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Prüft, ob `point` mit einem der beiden Endpunkte zusammenfällt.
    pub fn touches_endpoint(&self, point: DVec3) -> bool {
        point.distance(self.p0) <= POINT_EPSILON || point.distance(self.p1) <= POINT_EPSILON
    }
}
