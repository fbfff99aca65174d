use glam::DVec3;
use serde::Serialize;

/// Mutierende Commands, die der Controller auf Zustand und Host anwendet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArchCommand {
    /// Letzte bekannte Hilfspunkt-Position nachführen
    TrackGuidePoint { position: DVec3 },
    /// Ersten Sehnenpunkt übernehmen
    ConfirmFirstPoint { position: DVec3 },
    /// Zweiten Sehnenpunkt übernehmen und Sehne ableiten
    ConfirmSecondPoint { position: DVec3 },
    /// Bogen-Vorschau für `probe` neu berechnen
    RefreshPreview { probe: DVec3 },
    /// Gültige Vorschau festschreiben und Bogen bauen lassen
    CommitArc,
    /// Erste Extrusion (Breite/Stärke) bestätigen
    ConfirmFirstExtrude,
    /// Zweite Extrusion (Länge) bestätigen
    ConfirmSecondExtrude,
    Pause,
    /// Pause beenden und wartende Anpassung erneut starten
    Resume,
    IncreaseSegments,
    DecreaseSegments,
    /// Punkte verwerfen, zurück zum ersten Punkt
    ResetPlacement,
    Cancel,
}
