//! Anzeige-Schnappschuss nach jedem verarbeiteten Ereignis.
//!
//! Reine Daten für einen externen Renderer/Overlay; der Kern zeichnet nie selbst.

use super::stage::{Stage, ToolOutcome};
use crate::core::Measurement;
use glam::DVec3;
use serde::Serialize;

/// Vorschau-Geometrie des Bogens in der dritten Stufe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewGeometry {
    pub circle_center: DVec3,
    pub radius: f64,
    pub angular_span: f64,
    pub pivot_normal: DVec3,
    pub endpoints: (DVec3, DVec3),
    pub apex: DVec3,
    /// `segment_count + 1` Punkte vom Start- zum Endpunkt
    pub polyline: Vec<DVec3>,
}

/// Titel und Tastenhinweise für die aktuelle Stufe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpText {
    pub title: &'static str,
    pub hints: Vec<&'static str>,
}

/// Zustand für den Renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub stage: Stage,
    pub paused: bool,
    pub segment_count: u32,
    /// Segmentzähler einblenden (pausiert vor der ersten Extrusion)
    pub show_segment_counter: bool,
    pub preview_valid: bool,
    pub preview: Option<PreviewGeometry>,
    pub guide_point: Option<DVec3>,
    pub points: Vec<DVec3>,
    pub measurement: Option<Measurement>,
    pub help: HelpText,
    pub outcome: ToolOutcome,
}
