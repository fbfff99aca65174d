//! Bündel der Host-Kollaborateure eines Werkzeug-Laufs.

use super::environment::{EnvironmentGuard, ToolEnvironment};
use super::mesh_backend::MeshBackend;
use super::snap_cursor::SnapCursor;

/// Einmal beim Start gewählte Host-Implementierungen.
pub struct ToolHost {
    pub backend: Box<dyn MeshBackend>,
    pub cursor: Box<dyn SnapCursor>,
    /// Gesicherte Host-Einstellungen, Wiederherstellung spätestens beim Drop
    pub environment: EnvironmentGuard,
}

impl ToolHost {
    /// Sichert die Umgebung und bündelt Backend und Cursor.
    pub fn acquire(
        backend: Box<dyn MeshBackend>,
        cursor: Box<dyn SnapCursor>,
        environment: Box<dyn ToolEnvironment>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            backend,
            cursor,
            environment: EnvironmentGuard::acquire(environment)?,
        })
    }
}
