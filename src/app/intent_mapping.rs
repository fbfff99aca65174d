//! Mapping von Intents auf mutierende Commands.
//!
//! Hier liegen alle Wächter der Zustandsmaschine (Pause, Stufe, gültige
//! Vorschau). Handler führen Commands nur noch aus.

use super::state::ArchToolState;
use super::{ArchCommand, ArchIntent};
use crate::core::{solve_arch, POINT_EPSILON};
use crate::shared::Stage;
use glam::DVec3;

/// Übersetzt einen `ArchIntent` bei Cursor-Position `cursor` in eine Sequenz ausführbarer `ArchCommand`s.
pub fn map_intent_to_commands(
    state: &ArchToolState,
    intent: ArchIntent,
    cursor: DVec3,
) -> Vec<ArchCommand> {
    if state.stage == Stage::Done {
        return vec![];
    }

    match intent {
        ArchIntent::CancelRequested => vec![ArchCommand::Cancel],
        ArchIntent::PauseToggled => {
            if state.paused {
                vec![ArchCommand::Resume]
            } else {
                vec![ArchCommand::Pause]
            }
        }
        ArchIntent::SegmentCountIncreaseRequested if adjustable(state) => {
            vec![ArchCommand::IncreaseSegments]
        }
        ArchIntent::SegmentCountDecreaseRequested if adjustable(state) => {
            vec![ArchCommand::DecreaseSegments]
        }
        ArchIntent::ResetPlacementRequested if adjustable(state) => {
            vec![ArchCommand::ResetPlacement]
        }
        ArchIntent::SegmentCountIncreaseRequested
        | ArchIntent::SegmentCountDecreaseRequested
        | ArchIntent::ResetPlacementRequested => vec![],

        // Pause unterdrückt Platzierung und Extrusions-Bestätigung
        ArchIntent::CursorMoved | ArchIntent::ConfirmRequested if state.paused => vec![],

        ArchIntent::CursorMoved => match state.stage {
            Stage::AwaitingFirstPoint | Stage::AwaitingSecondPoint => {
                vec![ArchCommand::TrackGuidePoint { position: cursor }]
            }
            Stage::AwaitingThirdPoint => vec![
                ArchCommand::TrackGuidePoint { position: cursor },
                ArchCommand::RefreshPreview { probe: cursor },
            ],
            _ => vec![],
        },
        ArchIntent::ConfirmRequested => map_confirm(state, cursor),
    }
}

/// Segmente/Reset nur pausiert und vor der ersten Extrusion.
fn adjustable(state: &ArchToolState) -> bool {
    state.paused && state.stage.is_placement()
}

fn map_confirm(state: &ArchToolState, cursor: DVec3) -> Vec<ArchCommand> {
    match state.stage {
        Stage::AwaitingFirstPoint => vec![ArchCommand::ConfirmFirstPoint { position: cursor }],
        Stage::AwaitingSecondPoint => {
            let distinct = state
                .session
                .first_point()
                .is_some_and(|first| first.distance(cursor) > POINT_EPSILON);
            if distinct {
                vec![ArchCommand::ConfirmSecondPoint { position: cursor }]
            } else {
                log::debug!("Zweiter Punkt fällt auf den ersten, Bestätigung ignoriert");
                vec![]
            }
        }
        Stage::AwaitingThirdPoint => {
            let valid = state
                .session
                .chord()
                .is_some_and(|chord| solve_arch(chord, cursor).valid);
            let mut commands = vec![ArchCommand::RefreshPreview { probe: cursor }];
            if valid {
                commands.push(ArchCommand::CommitArc);
            } else {
                log::debug!("Vorschau ungültig, Bestätigung ignoriert");
            }
            commands
        }
        Stage::AwaitingFirstExtrudeConfirm => vec![ArchCommand::ConfirmFirstExtrude],
        Stage::AwaitingSecondExtrudeConfirm => vec![ArchCommand::ConfirmSecondExtrude],
        Stage::Done => vec![],
    }
}

#[cfg(test)]
mod tests;
