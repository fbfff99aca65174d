//! Abstandsmessung für die Anzeige (skaliert, gerundet, mit Einheit).

use glam::DVec3;
use serde::Serialize;

/// Messlinie zwischen zwei Punkten mit formatiertem Text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub from: DVec3,
    pub to: DVec3,
    /// Skalierter Abstand, auf 2 Nachkommastellen gerundet
    pub value: f64,
    pub text: String,
}

/// Misst `from → to` und formatiert das Ergebnis.
///
/// Gibt `None` zurück, wenn der gerundete Wert 0 ist.
pub fn measure(from: DVec3, to: DVec3, scale: f64, suffix: &str) -> Option<Measurement> {
    let value = (from.distance(to) * scale * 100.0).round() / 100.0;
    if value == 0.0 {
        return None;
    }
    Some(Measurement {
        from,
        to,
        value,
        text: format!("{value:.2}{suffix}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scaled_distance_with_suffix() {
        let m = measure(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0), 100.0, " cm")
            .expect("Messung sollte sichtbar sein");
        assert_eq!(m.value, 400.0);
        assert_eq!(m.text, "400.00 cm");
    }

    #[test]
    fn rounds_to_two_decimals() {
        let m = measure(DVec3::ZERO, DVec3::new(0.123456, 0.0, 0.0), 1.0, " m")
            .expect("Messung sollte sichtbar sein");
        assert_eq!(m.text, "0.12 m");
    }

    #[test]
    fn zero_distance_is_hidden() {
        assert!(measure(DVec3::ONE, DVec3::ONE, 100.0, " cm").is_none());
        assert!(measure(DVec3::ZERO, DVec3::new(0.001, 0.0, 0.0), 1.0, "").is_none());
    }
}
