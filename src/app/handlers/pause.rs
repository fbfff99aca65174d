//! Handler für Pause, Segmentanzahl und Zurücksetzen der Platzierung.

use crate::app::state::ArchToolState;
use crate::host::{Adjustment, MeshHandle, ToolHost};
use crate::shared::{Stage, MIN_SEGMENT_COUNT};

pub fn pause(state: &mut ArchToolState) {
    state.paused = true;
    log::debug!("Pausiert in {:?}", state.stage);
}

/// Beendet die Pause und startet die Anpassung, auf die die Stufe wartet.
///
/// Schlägt der Host-Aufruf fehl, bleibt das Werkzeug pausiert.
pub fn resume(state: &mut ArchToolState, host: &mut ToolHost) -> anyhow::Result<()> {
    if let Some((handle, adjustment)) = pending_adjustment(state) {
        host.backend.begin_adjustment(handle, adjustment)?;
    }
    state.paused = false;
    log::debug!("Fortgesetzt in {:?}", state.stage);
    Ok(())
}

/// Erhöht die Segmentanzahl um 1.
pub fn increase_segments(state: &mut ArchToolState) {
    state.segment_count = state.segment_count.saturating_add(1);
    log::debug!("Segmente: {}", state.segment_count);
}

/// Verringert die Segmentanzahl um 1 (min. 2).
pub fn decrease_segments(state: &mut ArchToolState) {
    state.segment_count = state
        .segment_count
        .saturating_sub(1)
        .max(MIN_SEGMENT_COUNT);
    log::debug!("Segmente: {}", state.segment_count);
}

/// Verwirft alle Punkte und kehrt zum ersten Punkt zurück.
///
/// Der Hilfspunkt bleibt an seiner letzten Position und wird erneut gegriffen.
pub fn reset_placement(state: &mut ArchToolState, host: &mut ToolHost) -> anyhow::Result<()> {
    if let Some(guide) = state.guide {
        host.backend
            .begin_adjustment(guide.handle, Adjustment::GrabGuidePoint)?;
    }
    state.session.clear();
    state.stage = Stage::AwaitingFirstPoint;
    state.paused = false;
    log::info!("Platzierung zurückgesetzt");
    Ok(())
}

fn pending_adjustment(state: &ArchToolState) -> Option<(MeshHandle, Adjustment)> {
    match state.stage {
        Stage::AwaitingFirstPoint | Stage::AwaitingSecondPoint | Stage::AwaitingThirdPoint => state
            .guide
            .map(|g| (g.handle, Adjustment::GrabGuidePoint)),
        Stage::AwaitingFirstExtrudeConfirm => state.mesh.map(|m| (m, Adjustment::ScaleExtrude)),
        Stage::AwaitingSecondExtrudeConfirm => state.mesh.map(|m| (m, Adjustment::NormalExtrude)),
        Stage::Done => None,
    }
}
