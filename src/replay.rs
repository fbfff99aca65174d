//! Skriptgesteuerte Wiedergabe von Eingabe-Ereignissen.
//!
//! Ein Szenario (TOML) beschreibt Startposition des Cursors, optionale
//! Werkzeug- und Extrusionswerte sowie eine Folge von Schritten. Die
//! Wiedergabe läuft gegen die In-Memory-Kollaborateure und liefert pro
//! Schritt den `DisplayState`.

use crate::app::{ArchIntent, ArchTool, LoggedCommand};
use crate::host::{
    BackendCall, ExtrudeSettings, MemoryCursor, MemoryEnvironment, MemoryMeshBackend,
    ViewSettings,
};
use crate::shared::{ArchToolOptions, DisplayState, ToolOutcome};
use anyhow::Context;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Ein Schritt eines Szenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Cursor auf `to` setzen
    Move { to: DVec3 },
    Confirm,
    Cancel,
    Pause,
    SegmentsUp,
    SegmentsDown,
    Reset,
}

impl Step {
    fn intent(self) -> ArchIntent {
        match self {
            Step::Move { .. } => ArchIntent::CursorMoved,
            Step::Confirm => ArchIntent::ConfirmRequested,
            Step::Cancel => ArchIntent::CancelRequested,
            Step::Pause => ArchIntent::PauseToggled,
            Step::SegmentsUp => ArchIntent::SegmentCountIncreaseRequested,
            Step::SegmentsDown => ArchIntent::SegmentCountDecreaseRequested,
            Step::Reset => ArchIntent::ResetPlacementRequested,
        }
    }
}

/// Szenario-Datei.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Überschreibt die übergebenen Optionen
    #[serde(default)]
    pub options: Option<ArchToolOptions>,
    #[serde(default)]
    pub extrude: ExtrudeSettings,
    /// Cursor-Position beim Start
    #[serde(default)]
    pub start: DVec3,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Ergebnis eines Schritts.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayFrame {
    pub index: usize,
    pub step: Step,
    pub display: DisplayState,
    /// Fehlermeldung, falls der Schritt abgelehnt wurde
    pub error: Option<String>,
}

/// Kennzahlen des fertigen Meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeshSummary {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Gesamtergebnis einer Wiedergabe.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub frames: Vec<ReplayFrame>,
    pub outcome: ToolOutcome,
    pub mesh: Option<MeshSummary>,
    /// Ausgeführte Commands des Laufs (ohne den Abbruch beim Drop)
    pub commands: Vec<LoggedCommand>,
    pub backend_calls: Vec<BackendCall>,
    /// Host-Einstellungen nach dem Lauf
    pub final_settings: ViewSettings,
}

/// Lädt ein Szenario aus einer TOML-Datei.
pub fn load_scenario(path: &std::path::Path) -> anyhow::Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
    parse_scenario(&content).with_context(|| format!("Szenario fehlerhaft: {}", path.display()))
}

/// Parst ein Szenario aus TOML-Text.
pub fn parse_scenario(content: &str) -> anyhow::Result<Scenario> {
    Ok(toml::from_str(content)?)
}

/// Spielt ein Szenario ab. `options` gilt, sofern das Szenario keine eigenen setzt.
pub fn run(scenario: &Scenario, options: ArchToolOptions) -> anyhow::Result<ReplayReport> {
    let options = scenario.options.clone().unwrap_or(options);
    let backend = MemoryMeshBackend::with_settings(scenario.extrude);
    let cursor = MemoryCursor::new(scenario.start);
    let environment = MemoryEnvironment::new(ViewSettings::default());

    let mut tool = ArchTool::start(
        options,
        Box::new(backend.clone()),
        Box::new(cursor.clone()),
        Box::new(environment.clone()),
    )?;
    log::info!("Szenario mit {} Schritten gestartet", scenario.steps.len());

    let mut frames = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().copied().enumerate() {
        if let Step::Move { to } = step {
            cursor.set_position(to);
        }
        let error = match tool.handle(step.intent()) {
            Ok(_) => None,
            Err(e) => {
                log::warn!("Schritt {} ({:?}) fehlgeschlagen: {:#}", index, step, e);
                Some(format!("{:#}", e))
            }
        };
        frames.push(ReplayFrame {
            index,
            step,
            display: tool.display_state(),
            error,
        });
    }

    let mesh = tool
        .result_mesh()
        .and_then(|handle| backend.mesh(handle))
        .map(|m| MeshSummary {
            vertices: m.vertices.len(),
            edges: m.edges.len(),
            faces: m.faces.len(),
        });
    let commands = tool.state().command_log.to_vec();
    // Ein noch laufendes Werkzeug bricht beim Drop ab
    let outcome = if tool.is_done() {
        tool.outcome()
    } else {
        ToolOutcome::Cancelled
    };
    drop(tool);

    Ok(ReplayReport {
        frames,
        outcome,
        mesh,
        commands,
        backend_calls: backend.calls(),
        final_settings: environment.settings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEMICIRCLE: &str = r#"
start = [0.0, 0.0, 0.0]

[[steps]]
action = "confirm"

[[steps]]
action = "move"
to = [4.0, 0.0, 0.0]

[[steps]]
action = "confirm"

[[steps]]
action = "move"
to = [2.0, 2.0, 0.0]

[[steps]]
action = "confirm"

[[steps]]
action = "confirm"

[[steps]]
action = "confirm"
"#;

    #[test]
    fn parses_tagged_steps() {
        let scenario = parse_scenario(SEMICIRCLE).expect("Szenario sollte parsen");
        assert_eq!(scenario.steps.len(), 7);
        assert_eq!(
            scenario.steps[1],
            Step::Move {
                to: DVec3::new(4.0, 0.0, 0.0)
            }
        );
        assert_eq!(scenario.extrude, ExtrudeSettings::default());
        assert!(scenario.options.is_none());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = parse_scenario("[[steps]]\naction = \"jump\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn semicircle_runs_to_finished() {
        let scenario = parse_scenario(SEMICIRCLE).expect("Szenario sollte parsen");
        let report = run(&scenario, ArchToolOptions::default()).expect("Lauf sollte gelingen");

        assert_eq!(report.outcome, ToolOutcome::Finished);
        assert!(report.frames.iter().all(|f| f.error.is_none()));
        assert!(report.mesh.is_some());
        assert_eq!(report.final_settings, ViewSettings::default());
    }

    #[test]
    fn unfinished_scenario_counts_as_cancelled() {
        let scenario = parse_scenario("[[steps]]\naction = \"confirm\"\n")
            .expect("Szenario sollte parsen");
        let report = run(&scenario, ArchToolOptions::default()).expect("Lauf sollte gelingen");

        assert_eq!(report.outcome, ToolOutcome::Cancelled);
        assert!(report.mesh.is_none());
        assert_eq!(report.commands.len(), 1);
    }
}
