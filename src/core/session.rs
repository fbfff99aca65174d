//! Sitzungszustand eines Bogen-Laufs: bestätigte Punkte, Sehne, letzte Vorschau.

use super::arch_solver::{solve_arch, SolverResult};
use super::chord::ArchChord;
use glam::DVec3;
use serde::Serialize;
use thiserror::Error;

/// Maximale Anzahl bestätigter Punkte (zwei Sehnenpunkte + Höhe).
pub const MAX_POINTS: usize = 3;

/// Verletzungen der Aufrufreihenfolge auf einer [`ArchSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Kapazität erschöpft: bereits {0} Punkte bestätigt")]
    Capacity(usize),
    #[error("Sehne noch nicht festgelegt")]
    ChordNotReady,
    #[error("Sehne entartet: beide Punkte fallen zusammen")]
    DegenerateChord,
    #[error("kein gültiger Vorschau-Bogen für den Commit")]
    NoValidPreview,
    #[error("Bogen bereits festgeschrieben")]
    AlreadyCommitted,
    #[error("Bogen noch nicht festgeschrieben")]
    NotCommitted,
}

/// Eingefrorene Bogen-Geometrie für das Mesh-Backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommittedArc {
    pub endpoints: (DVec3, DVec3),
    pub circle_center: DVec3,
    pub angular_span: f64,
    pub pivot_normal: DVec3,
    pub radius: f64,
}

/// Vorschau inkl. der Probe-Position, für die sie berechnet wurde.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub probe: DVec3,
    pub result: SolverResult,
}

/// Veränderlicher Zustand eines Werkzeug-Laufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchSession {
    points: Vec<DVec3>,
    chord: Option<ArchChord>,
    preview: Option<Preview>,
    committed: Option<CommittedArc>,
}

impl ArchSession {
    /// Erstellt eine leere Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen bestätigten Punkt an.
    pub fn add_point(&mut self, point: DVec3) -> Result<(), SessionError> {
        if self.committed.is_some() {
            return Err(SessionError::AlreadyCommitted);
        }
        if self.points.len() >= MAX_POINTS {
            return Err(SessionError::Capacity(self.points.len()));
        }
        self.points.push(point);
        Ok(())
    }

    /// Leitet Sehnenmitte, Breite und Ausrichtung aus den ersten beiden Punkten ab.
    pub fn on_second_point_confirmed(&mut self) -> Result<ArchChord, SessionError> {
        let [p0, p1] = self.points[..] else {
            return Err(SessionError::ChordNotReady);
        };
        let chord = ArchChord::new(p0, p1).ok_or(SessionError::DegenerateChord)?;
        self.chord = Some(chord);
        Ok(chord)
    }

    /// Berechnet die Vorschau für `probe`. Bestätigte Punkte bleiben unverändert.
    pub fn preview_at(&mut self, probe: DVec3) -> Result<SolverResult, SessionError> {
        if self.committed.is_some() {
            return Err(SessionError::AlreadyCommitted);
        }
        let chord = self.chord.ok_or(SessionError::ChordNotReady)?;
        let result = solve_arch(&chord, probe);
        self.preview = Some(Preview { probe, result });
        Ok(result)
    }

    /// Friert die letzte gültige Vorschau ein und übernimmt die Probe als dritten Punkt.
    pub fn commit_arc(&mut self) -> Result<CommittedArc, SessionError> {
        let preview = self
            .preview
            .filter(|p| p.result.valid)
            .ok_or(SessionError::NoValidPreview)?;
        self.add_point(preview.probe)?;

        let r = preview.result;
        let arc = CommittedArc {
            endpoints: r.oriented_endpoints,
            circle_center: r.circle_center,
            angular_span: r.angular_span,
            pivot_normal: r.pivot_normal,
            radius: r.radius,
        };
        self.committed = Some(arc);
        Ok(arc)
    }

    /// Verwirft alle Punkte, Sehne und Vorschau.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn chord(&self) -> Option<&ArchChord> {
        self.chord.as_ref()
    }

    /// Letzte Vorschau (auch ungültige).
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn committed(&self) -> Option<&CommittedArc> {
        self.committed.as_ref()
    }

    /// Erster bestätigter Punkt.
    pub fn first_point(&self) -> Option<DVec3> {
        self.points.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn session_with_chord() -> ArchSession {
        let mut session = ArchSession::new();
        session.add_point(DVec3::ZERO).expect("Punkt 1");
        session
            .add_point(DVec3::new(4.0, 0.0, 0.0))
            .expect("Punkt 2");
        session
            .on_second_point_confirmed()
            .expect("Sehne sollte gültig sein");
        session
    }

    #[test]
    fn chord_is_derived_from_two_points() {
        let session = session_with_chord();
        let chord = session.chord().expect("Sehne gesetzt");
        assert_eq!(chord.center, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(chord.width, 4.0);
        assert_eq!(chord.alignment, DVec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn chord_requires_exactly_two_points() {
        let mut session = ArchSession::new();
        assert_eq!(
            session.on_second_point_confirmed(),
            Err(SessionError::ChordNotReady)
        );
        session.add_point(DVec3::ONE).expect("Punkt 1");
        assert_eq!(
            session.on_second_point_confirmed(),
            Err(SessionError::ChordNotReady)
        );
        session.add_point(DVec3::ONE).expect("Punkt 2");
        assert_eq!(
            session.on_second_point_confirmed(),
            Err(SessionError::DegenerateChord)
        );
    }

    #[test]
    fn fourth_point_exceeds_capacity() {
        let mut session = ArchSession::new();
        for i in 0..3 {
            session.add_point(DVec3::splat(i as f64)).expect("Punkt");
        }
        assert_eq!(
            session.add_point(DVec3::ONE),
            Err(SessionError::Capacity(3))
        );
    }

    #[test]
    fn preview_does_not_touch_confirmed_points() {
        let mut session = session_with_chord();
        let before = session.points().to_vec();

        let result = session
            .preview_at(DVec3::new(2.0, 2.0, 0.0))
            .expect("Vorschau");

        assert!(result.valid);
        assert_eq!(session.points(), before.as_slice());
        assert_eq!(
            session.preview().map(|p| p.probe),
            Some(DVec3::new(2.0, 2.0, 0.0))
        );
    }

    #[test]
    fn preview_without_chord_is_rejected() {
        let mut session = ArchSession::new();
        assert_eq!(
            session.preview_at(DVec3::ONE),
            Err(SessionError::ChordNotReady)
        );
    }

    #[test]
    fn commit_freezes_latest_valid_preview() {
        let mut session = session_with_chord();
        session
            .preview_at(DVec3::new(2.0, 2.0, 0.0))
            .expect("Vorschau");

        let arc = session.commit_arc().expect("Commit");

        assert_eq!(session.points().len(), 3);
        assert_eq!(session.points()[2], DVec3::new(2.0, 2.0, 0.0));
        assert_eq!(arc.circle_center, DVec3::new(2.0, 0.0, 0.0));
        assert!((arc.angular_span - PI).abs() < 1e-9);
        assert_eq!(session.committed(), Some(&arc));
        assert_eq!(
            session.preview_at(DVec3::ONE),
            Err(SessionError::AlreadyCommitted)
        );
    }

    #[test]
    fn commit_with_invalid_preview_is_rejected() {
        let mut session = session_with_chord();
        assert_eq!(session.commit_arc(), Err(SessionError::NoValidPreview));

        session
            .preview_at(DVec3::new(2.0, 0.0, 0.0))
            .expect("Vorschau");
        assert_eq!(session.commit_arc(), Err(SessionError::NoValidPreview));
        assert_eq!(session.points().len(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = session_with_chord();
        session.preview_at(DVec3::new(2.0, 1.0, 0.0)).expect("Vorschau");
        session.clear();
        assert_eq!(session, ArchSession::new());
    }
}
