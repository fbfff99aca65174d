//! Schnittstelle zum Host-Mesh-Backend.
//!
//! Der Kern erzeugt und verändert nie selbst Mesh-Daten, sondern gibt
//! Aufträge über [`MeshBackend`] ab und wertet nur das Ergebnis aus.
//! Jeder Aufruf kann fehlschlagen; die Zustandsmaschine rückt nur bei
//! `Ok` weiter.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Opaker Verweis auf ein Objekt des Backends (Hilfspunkt, Kante, Körper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Eingabe für den Spin/Sweep des Bogens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcBuildParams {
    /// Start- und Endpunkt in Sweep-Reihenfolge
    pub endpoints: (DVec3, DVec3),
    pub center: DVec3,
    /// Drehachse (Einheitsvektor)
    pub axis: DVec3,
    /// Winkelspanne in Radiant
    pub angular_span: f64,
    pub segments: u32,
}

/// Interaktive Anpassung, die der Host nach einem Auftrag startet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    /// Hilfspunkt mit dem Cursor ziehen
    GrabGuidePoint,
    /// Bogen extrudieren und um den Kreismittelpunkt skalieren (Breite/Stärke)
    ScaleExtrude,
    /// Entlang der Normalen extrudieren (Länge)
    NormalExtrude,
}

/// Fähigkeiten, die der Kern vom Host-Backend benötigt.
pub trait MeshBackend {
    /// Erzeugt den transienten Hilfspunkt an `at`.
    fn spawn_guide_point(&mut self, at: DVec3) -> anyhow::Result<MeshHandle>;

    /// Verschiebt den Hilfspunkt.
    fn move_guide_point(&mut self, handle: MeshHandle, to: DVec3) -> anyhow::Result<()>;

    /// Startet die interaktive Anpassung für `handle`.
    fn begin_adjustment(&mut self, handle: MeshHandle, adjustment: Adjustment)
        -> anyhow::Result<()>;

    /// Baut die Kantenschleife des Bogens.
    fn build_arc(&mut self, params: &ArcBuildParams) -> anyhow::Result<MeshHandle>;

    /// Erste Extrusion: Kantenschleife extrudieren und skalieren.
    fn extrude_and_scale(&mut self, handle: MeshHandle) -> anyhow::Result<MeshHandle>;

    /// Zweite Extrusion: Fläche entlang der Normalen extrudieren.
    fn extrude_along_normal(&mut self, handle: MeshHandle) -> anyhow::Result<MeshHandle>;

    /// Entfernt ein transientes Objekt (Hilfspunkt oder unfertiges Mesh).
    fn discard_transient(&mut self, handle: MeshHandle) -> anyhow::Result<()>;

    /// Berechnet Flächennormalen des fertigen Meshes nach außen neu.
    fn recalculate_normals(&mut self, handle: MeshHandle) -> anyhow::Result<()>;
}
