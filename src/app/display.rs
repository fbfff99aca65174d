//! Baut den `DisplayState` aus dem aktuellen Werkzeugzustand.

use super::state::ArchToolState;
use crate::core::{arc_apex, measure, sample_arc, Measurement, SolverResult};
use crate::shared::{DisplayState, HelpText, PreviewGeometry, Stage};
use glam::DVec3;

const QUIT_HINT: &str = "ESC, RMB - beenden";

/// Baut die Anzeige für den Renderer; `cursor` ist die aktuelle Cursor-Position.
pub fn build(state: &ArchToolState, cursor: DVec3) -> DisplayState {
    let preview_result = current_preview(state);
    DisplayState {
        stage: state.stage,
        paused: state.paused,
        segment_count: state.segment_count,
        show_segment_counter: state.paused && state.stage.is_placement(),
        preview_valid: preview_result.is_some(),
        preview: preview_result.map(|r| preview_geometry(&r, state.segment_count)),
        guide_point: state.guide.map(|g| g.position),
        points: state.session.points().to_vec(),
        measurement: measurement(state, cursor, preview_result.as_ref()),
        help: help_text(state.stage, state.paused),
        outcome: state.outcome,
    }
}

/// Gültige Vorschau der dritten Stufe.
fn current_preview(state: &ArchToolState) -> Option<SolverResult> {
    if state.stage != Stage::AwaitingThirdPoint {
        return None;
    }
    state
        .session
        .preview()
        .map(|p| p.result)
        .filter(|r| r.valid)
}

fn preview_geometry(result: &SolverResult, segments: u32) -> PreviewGeometry {
    PreviewGeometry {
        circle_center: result.circle_center,
        radius: result.radius,
        angular_span: result.angular_span,
        pivot_normal: result.pivot_normal,
        endpoints: result.oriented_endpoints,
        apex: arc_apex(result).unwrap_or(result.circle_center),
        polyline: sample_arc(result, segments),
    }
}

/// Stufe 2: erster Punkt → Cursor. Stufe 3: Sehnenmitte → Bogenscheitel.
fn measurement(
    state: &ArchToolState,
    cursor: DVec3,
    preview: Option<&SolverResult>,
) -> Option<Measurement> {
    let opts = &state.options;
    let (from, to) = match state.stage {
        Stage::AwaitingSecondPoint => (state.session.first_point()?, cursor),
        Stage::AwaitingThirdPoint => (state.session.chord()?.center, arc_apex(preview?)?),
        _ => return None,
    };
    measure(from, to, opts.measurement_scale, &opts.measurement_suffix)
}

/// Titel und Tastenhinweise je Stufe und Pause.
pub fn help_text(stage: Stage, paused: bool) -> HelpText {
    let (title, hints) = match (stage.is_placement(), stage, paused) {
        (_, Stage::Done, _) => ("Bogen-Werkzeug beendet", vec![]),
        (true, _, false) => (
            "3 Punkte platzieren, um einen Bogen zu erzeugen",
            vec![
                "LMB - Punkt setzen, STRG - Punkt snappen",
                "LEERTASTE - Pause zum Navigieren / Einstellungen ändern",
                QUIT_HINT,
            ],
        ),
        (true, _, true) => (
            "Pausiert, navigieren oder Einstellungen ändern",
            vec![
                "HOCH / MAUSRAD HOCH - Segmente erhöhen, RUNTER / MAUSRAD RUNTER - Segmente verringern",
                "LEERTASTE - Platzierung fortsetzen, R - Platzierung zurücksetzen",
                QUIT_HINT,
            ],
        ),
        (false, Stage::AwaitingFirstExtrudeConfirm, false) => (
            "Bogenbreite / -stärke festlegen",
            vec!["LMB - Breite bestätigen", QUIT_HINT],
        ),
        (false, _, false) => (
            "Bogenlänge festlegen",
            vec!["LMB - Länge bestätigen, STRG - Punkt snappen", QUIT_HINT],
        ),
        (false, _, true) => (
            "Pausiert, zu besserer Position navigieren",
            vec!["LEERTASTE - Extrusion fortsetzen", QUIT_HINT],
        ),
    };
    HelpText { title, hints }
}
