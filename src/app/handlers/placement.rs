//! Handler für die Punkt-Platzierung (Stufen 1–3).

use super::begin_adjustment_tolerant;
use crate::app::state::ArchToolState;
use crate::host::{Adjustment, ArcBuildParams, PivotPoint, SnapTarget, ToolHost};
use crate::shared::Stage;
use anyhow::Context;
use glam::DVec3;

/// Merkt sich die letzte Hilfspunkt-Position (der Host zieht den Punkt selbst).
pub fn track_guide_point(state: &mut ArchToolState, position: DVec3) {
    if let Some(guide) = state.guide.as_mut() {
        guide.position = position;
    }
}

/// Übernimmt den ersten Sehnenpunkt.
pub fn confirm_first_point(
    state: &mut ArchToolState,
    host: &mut ToolHost,
    position: DVec3,
) -> anyhow::Result<()> {
    state.session.add_point(position)?;
    state.stage = Stage::AwaitingSecondPoint;
    log::info!("Erster Punkt gesetzt: {:?}", position);

    if let Some(guide) = state.guide {
        begin_adjustment_tolerant(host, guide.handle, Adjustment::GrabGuidePoint);
    }
    Ok(())
}

/// Übernimmt den zweiten Sehnenpunkt, leitet die Sehne ab und setzt
/// Hilfspunkt und Cursor auf die Sehnenmitte.
pub fn confirm_second_point(
    state: &mut ArchToolState,
    host: &mut ToolHost,
    position: DVec3,
) -> anyhow::Result<()> {
    let mut session = state.session.clone();
    session.add_point(position)?;
    let chord = session.on_second_point_confirmed()?;

    if let Some(guide) = state.guide {
        host.backend
            .move_guide_point(guide.handle, chord.center)
            .context("Hilfspunkt konnte nicht zur Sehnenmitte verschoben werden")?;
    }
    host.cursor.request_warp(chord.center);

    state.session = session;
    if let Some(guide) = state.guide.as_mut() {
        guide.position = chord.center;
        begin_adjustment_tolerant(host, guide.handle, Adjustment::GrabGuidePoint);
    }
    state.stage = Stage::AwaitingThirdPoint;
    log::info!(
        "Zweiter Punkt gesetzt: {:?}, Sehnenbreite {:.4}",
        position,
        chord.width
    );
    Ok(())
}

/// Berechnet die Bogen-Vorschau für die aktuelle Probe-Position.
pub fn refresh_preview(state: &mut ArchToolState, probe: DVec3) -> anyhow::Result<()> {
    let result = state.session.preview_at(probe)?;
    log::debug!(
        "Vorschau bei {:?}: gültig={}, r={:.4}, Spanne={:.4}",
        probe,
        result.valid,
        result.radius,
        result.angular_span
    );
    Ok(())
}

/// Schreibt die gültige Vorschau fest und lässt den Bogen bauen.
///
/// Schlägt `build_arc` fehl, bleiben Stufe und Sitzung unverändert.
pub fn commit_arc(state: &mut ArchToolState, host: &mut ToolHost) -> anyhow::Result<()> {
    let mut session = state.session.clone();
    let arc = session.commit_arc()?;
    let params = ArcBuildParams {
        endpoints: arc.endpoints,
        center: arc.circle_center,
        axis: arc.pivot_normal,
        angular_span: arc.angular_span,
        segments: state.segment_count,
    };
    let handle = host
        .backend
        .build_arc(&params)
        .context("Bogen konnte nicht gebaut werden")?;

    state.session = session;
    state.mesh = Some(handle);
    log::info!(
        "Bogen gebaut: r={:.4}, Spanne={:.4} rad, {} Segmente",
        arc.radius,
        arc.angular_span,
        state.segment_count
    );

    if let Some(guide) = state.guide.take() {
        if let Err(e) = host.backend.discard_transient(guide.handle) {
            log::warn!("Hilfspunkt konnte nicht entfernt werden: {:#}", e);
        }
    }

    if !state.options.extrude_enabled {
        super::lifecycle::finish(state, host);
        return Ok(());
    }

    let center = arc.circle_center;
    if let Err(e) = host.environment.update(|s| {
        s.cursor_location = center;
        s.snap_target = SnapTarget::Active;
        s.pivot = PivotPoint::Cursor;
    }) {
        log::warn!("Einstellungen für Extrusion 1 nicht gesetzt: {:#}", e);
    }
    begin_adjustment_tolerant(host, handle, Adjustment::ScaleExtrude);
    state.stage = Stage::AwaitingFirstExtrudeConfirm;
    Ok(())
}
