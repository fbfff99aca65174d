//! Zustand eines Werkzeug-Laufs: Stufe, Pause, Sitzung und Host-Handles.

use super::CommandLog;
use crate::core::ArchSession;
use crate::host::MeshHandle;
use crate::shared::{ArchToolOptions, Stage, ToolOutcome};
use glam::DVec3;

/// Transienter Hilfspunkt im Host und seine letzte bekannte Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidePoint {
    pub handle: MeshHandle,
    pub position: DVec3,
}

/// Veränderlicher Zustand der Zustandsmaschine.
#[derive(Debug)]
pub struct ArchToolState {
    /// Aktive Stufe
    pub stage: Stage,
    /// Pause (orthogonal zur Stufe)
    pub paused: bool,
    /// Segmentanzahl für den Bogen (mindestens 2)
    pub segment_count: u32,
    /// Bestätigte Punkte, Sehne, Vorschau
    pub session: ArchSession,
    /// Hilfspunkt während der Platzierung
    pub guide: Option<GuidePoint>,
    /// Bogen bzw. extrudierter Körper nach dem Commit
    pub mesh: Option<MeshHandle>,
    pub outcome: ToolOutcome,
    /// Beim Start übergebene Optionen (read-only)
    pub options: ArchToolOptions,
    pub command_log: CommandLog,
}

impl ArchToolState {
    /// Erstellt den Startzustand `(AwaitingFirstPoint, nicht pausiert)`.
    pub fn new(options: ArchToolOptions) -> Self {
        let options = options.sanitized();
        Self {
            stage: Stage::AwaitingFirstPoint,
            paused: false,
            segment_count: options.initial_segment_count,
            session: ArchSession::new(),
            guide: None,
            mesh: None,
            outcome: ToolOutcome::Running,
            options,
            command_log: CommandLog::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.stage.is_done()
    }
}
