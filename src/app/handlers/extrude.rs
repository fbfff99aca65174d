//! Handler für die beiden Extrusions-Bestätigungen.

use super::begin_adjustment_tolerant;
use crate::app::state::ArchToolState;
use crate::core::SessionError;
use crate::host::{Adjustment, MeshHandle, PivotPoint, SelectMode, SnapTarget, ToolHost};
use crate::shared::Stage;
use anyhow::Context;

/// Erste Bestätigung: Bogen extrudieren und skalieren.
pub fn confirm_first_extrude(
    state: &mut ArchToolState,
    host: &mut ToolHost,
) -> anyhow::Result<()> {
    let mesh = committed_mesh(state)?;
    let solid = host
        .backend
        .extrude_and_scale(mesh)
        .context("Extrudieren+Skalieren fehlgeschlagen")?;
    state.mesh = Some(solid);
    log::info!("Bogenbreite bestätigt");

    if let Err(e) = host.environment.update(|s| {
        s.select_mode = SelectMode::Face;
        s.snap_target = SnapTarget::Closest;
        s.pivot = PivotPoint::MedianPoint;
    }) {
        log::warn!("Einstellungen für Extrusion 2 nicht gesetzt: {:#}", e);
    }
    begin_adjustment_tolerant(host, solid, Adjustment::NormalExtrude);
    state.stage = Stage::AwaitingSecondExtrudeConfirm;
    Ok(())
}

/// Zweite Bestätigung: entlang der Normalen extrudieren und abschließen.
pub fn confirm_second_extrude(
    state: &mut ArchToolState,
    host: &mut ToolHost,
) -> anyhow::Result<()> {
    let mesh = committed_mesh(state)?;
    let solid = host
        .backend
        .extrude_along_normal(mesh)
        .context("Extrusion entlang der Normalen fehlgeschlagen")?;
    state.mesh = Some(solid);
    log::info!("Bogenlänge bestätigt");

    super::lifecycle::finish(state, host);
    Ok(())
}

/// Mesh-Handle des festgeschriebenen Bogens; sonst Sequenzfehler.
fn committed_mesh(state: &ArchToolState) -> Result<MeshHandle, SessionError> {
    state.session.committed().ok_or(SessionError::NotCommitted)?;
    state.mesh.ok_or(SessionError::NotCommitted)
}
