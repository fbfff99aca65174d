//! Start, Abschluss, Abbruch und Fehlerabbruch eines Werkzeug-Laufs.

use super::begin_adjustment_tolerant;
use crate::app::state::{ArchToolState, GuidePoint};
use crate::host::{Adjustment, ToolHost};
use crate::shared::{Stage, ToolOutcome};

/// Erzeugt den Hilfspunkt an der Cursor-Position und startet das Greifen.
pub fn start(state: &mut ArchToolState, host: &mut ToolHost) -> anyhow::Result<()> {
    let position = host.cursor.current_position();
    let handle = host.backend.spawn_guide_point(position)?;
    state.guide = Some(GuidePoint { handle, position });
    begin_adjustment_tolerant(host, handle, Adjustment::GrabGuidePoint);
    log::info!("Bogen-Werkzeug gestartet ({} Segmente)", state.segment_count);
    Ok(())
}

/// Regulärer Abschluss: Normalen neu berechnen, Umgebung wiederherstellen.
pub fn finish(state: &mut ArchToolState, host: &mut ToolHost) {
    if let Some(mesh) = state.mesh {
        if let Err(e) = host.backend.recalculate_normals(mesh) {
            log::warn!("Normalen konnten nicht neu berechnet werden: {:#}", e);
        }
    }
    release(state, host, ToolOutcome::Finished);
}

/// Benutzerabbruch: genau ein transientes Objekt verwerfen (Hilfspunkt
/// während der Platzierung, sonst das unfertige Mesh).
pub fn cancel(state: &mut ArchToolState, host: &mut ToolHost) {
    let transient = state
        .guide
        .take()
        .map(|g| g.handle)
        .or_else(|| state.mesh.take());
    if let Some(handle) = transient {
        if let Err(e) = host.backend.discard_transient(handle) {
            log::warn!("Transientes Objekt nicht entfernt: {:#}", e);
        }
    }
    release(state, host, ToolOutcome::Cancelled);
}

/// Abbruch nach Sequenzfehler: alle transienten Objekte verwerfen.
pub fn fault(state: &mut ArchToolState, host: &mut ToolHost) {
    let handles = state
        .guide
        .take()
        .map(|g| g.handle)
        .into_iter()
        .chain(state.mesh.take());
    for handle in handles {
        if let Err(e) = host.backend.discard_transient(handle) {
            log::warn!("Transientes Objekt nicht entfernt: {:#}", e);
        }
    }
    release(state, host, ToolOutcome::Faulted);
}

fn release(state: &mut ArchToolState, host: &mut ToolHost, outcome: ToolOutcome) {
    if let Err(e) = host.environment.restore() {
        log::warn!("Host-Einstellungen nicht wiederhergestellt: {:#}", e);
    }
    state.stage = Stage::Done;
    state.paused = false;
    state.outcome = outcome;
    log::info!("Bogen-Werkzeug beendet: {:?}", outcome);
}
