//! Drei-Punkt-Bogen-Werkzeug: expliziter Lebenszyklus eines Laufs.
//!
//! `ArchTool::start` sichert die Host-Umgebung und erzeugt den Hilfspunkt,
//! `handle` verarbeitet je ein Eingabe-Ereignis vollständig, der Drop eines
//! noch laufenden Werkzeugs bricht ab und räumt auf.

use super::controller::ArchController;
use super::display;
use super::handlers::lifecycle;
use super::state::ArchToolState;
use super::ArchIntent;
use crate::host::{MeshBackend, MeshHandle, SnapCursor, ToolEnvironment, ToolHost};
use crate::shared::{ArchToolOptions, DisplayState, ToolOutcome};
use anyhow::Context;

/// Ein laufendes Bogen-Werkzeug (genau eine Sitzung).
pub struct ArchTool {
    state: ArchToolState,
    host: ToolHost,
    controller: ArchController,
}

impl ArchTool {
    /// Startet das Werkzeug mit den beim Start gewählten Host-Implementierungen.
    pub fn start(
        options: ArchToolOptions,
        backend: Box<dyn MeshBackend>,
        cursor: Box<dyn SnapCursor>,
        environment: Box<dyn ToolEnvironment>,
    ) -> anyhow::Result<Self> {
        let mut host = ToolHost::acquire(backend, cursor, environment)
            .context("Host-Einstellungen konnten nicht gesichert werden")?;
        let mut state = ArchToolState::new(options);
        lifecycle::start(&mut state, &mut host).context("Hilfspunkt konnte nicht erzeugt werden")?;

        Ok(Self {
            state,
            host,
            controller: ArchController::new(),
        })
    }

    /// Verarbeitet ein Ereignis und liefert den neuen Anzeige-Zustand.
    pub fn handle(&mut self, intent: ArchIntent) -> anyhow::Result<DisplayState> {
        self.controller
            .handle_intent(&mut self.state, &mut self.host, intent)?;
        Ok(self.display_state())
    }

    /// Aktueller Anzeige-Zustand.
    pub fn display_state(&self) -> DisplayState {
        display::build(&self.state, self.host.cursor.current_position())
    }

    pub fn state(&self) -> &ArchToolState {
        &self.state
    }

    pub fn outcome(&self) -> ToolOutcome {
        self.state.outcome
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Handle des fertigen Meshes nach regulärem Abschluss.
    pub fn result_mesh(&self) -> Option<MeshHandle> {
        match self.state.outcome {
            ToolOutcome::Finished => self.state.mesh,
            _ => None,
        }
    }
}

impl Drop for ArchTool {
    fn drop(&mut self) {
        if !self.state.is_done() {
            log::info!("Bogen-Werkzeug verworfen, breche ab");
            lifecycle::cancel(&mut self.state, &mut self.host);
        }
    }
}
