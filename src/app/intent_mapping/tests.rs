use crate::app::state::ArchToolState;
use crate::app::{ArchCommand, ArchIntent};
use crate::shared::{ArchToolOptions, Stage};
use glam::DVec3;

use super::map_intent_to_commands;

fn state_at(stage: Stage) -> ArchToolState {
    let mut state = ArchToolState::new(ArchToolOptions::default());
    state.stage = stage;
    state
}

fn state_with_chord() -> ArchToolState {
    let mut state = state_at(Stage::AwaitingThirdPoint);
    state.session.add_point(DVec3::ZERO).expect("Punkt 1");
    state
        .session
        .add_point(DVec3::new(4.0, 0.0, 0.0))
        .expect("Punkt 2");
    state
        .session
        .on_second_point_confirmed()
        .expect("Sehne sollte gültig sein");
    state
}

#[test]
fn confirm_in_first_stage_carries_cursor_position() {
    let state = state_at(Stage::AwaitingFirstPoint);
    let cursor = DVec3::new(1.0, 2.0, 3.0);

    let commands = map_intent_to_commands(&state, ArchIntent::ConfirmRequested, cursor);

    assert_eq!(
        commands,
        vec![ArchCommand::ConfirmFirstPoint { position: cursor }]
    );
}

#[test]
fn second_point_on_first_point_is_ignored() {
    let mut state = state_at(Stage::AwaitingSecondPoint);
    state.session.add_point(DVec3::ONE).expect("Punkt 1");

    let commands = map_intent_to_commands(&state, ArchIntent::ConfirmRequested, DVec3::ONE);

    assert!(commands.is_empty());
}

#[test]
fn valid_third_confirm_refreshes_then_commits() {
    let state = state_with_chord();

    let commands = map_intent_to_commands(
        &state,
        ArchIntent::ConfirmRequested,
        DVec3::new(2.0, 2.0, 0.0),
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], ArchCommand::RefreshPreview { .. }));
    assert_eq!(commands[1], ArchCommand::CommitArc);
}

#[test]
fn collinear_third_confirm_does_not_commit() {
    let state = state_with_chord();

    let commands = map_intent_to_commands(
        &state,
        ArchIntent::ConfirmRequested,
        DVec3::new(2.0, 0.0, 0.0),
    );

    assert!(!commands.contains(&ArchCommand::CommitArc));
}

#[test]
fn cursor_move_in_third_stage_refreshes_preview() {
    let state = state_with_chord();
    let probe = DVec3::new(2.0, 1.0, 0.0);

    let commands = map_intent_to_commands(&state, ArchIntent::CursorMoved, probe);

    assert_eq!(
        commands,
        vec![
            ArchCommand::TrackGuidePoint { position: probe },
            ArchCommand::RefreshPreview { probe },
        ]
    );
}

#[test]
fn paused_state_suspends_placement_and_confirm() {
    let mut state = state_with_chord();
    state.paused = true;

    assert!(map_intent_to_commands(&state, ArchIntent::CursorMoved, DVec3::Y).is_empty());
    assert!(map_intent_to_commands(&state, ArchIntent::ConfirmRequested, DVec3::Y).is_empty());
    assert_eq!(
        map_intent_to_commands(&state, ArchIntent::PauseToggled, DVec3::Y),
        vec![ArchCommand::Resume]
    );
}

#[test]
fn segment_and_reset_only_while_paused_before_extrude() {
    let mut state = state_at(Stage::AwaitingSecondPoint);
    let up = ArchIntent::SegmentCountIncreaseRequested;

    assert!(map_intent_to_commands(&state, up, DVec3::ZERO).is_empty());

    state.paused = true;
    assert_eq!(
        map_intent_to_commands(&state, up, DVec3::ZERO),
        vec![ArchCommand::IncreaseSegments]
    );
    assert_eq!(
        map_intent_to_commands(&state, ArchIntent::ResetPlacementRequested, DVec3::ZERO),
        vec![ArchCommand::ResetPlacement]
    );

    state.stage = Stage::AwaitingFirstExtrudeConfirm;
    assert!(map_intent_to_commands(&state, up, DVec3::ZERO).is_empty());
    assert!(
        map_intent_to_commands(&state, ArchIntent::ResetPlacementRequested, DVec3::ZERO)
            .is_empty()
    );
}

#[test]
fn cancel_is_accepted_while_paused() {
    let mut state = state_at(Stage::AwaitingSecondExtrudeConfirm);
    state.paused = true;

    assert_eq!(
        map_intent_to_commands(&state, ArchIntent::CancelRequested, DVec3::ZERO),
        vec![ArchCommand::Cancel]
    );
}

#[test]
fn done_ignores_everything() {
    let state = state_at(Stage::Done);
    for intent in [
        ArchIntent::CursorMoved,
        ArchIntent::ConfirmRequested,
        ArchIntent::CancelRequested,
        ArchIntent::PauseToggled,
        ArchIntent::SegmentCountIncreaseRequested,
        ArchIntent::ResetPlacementRequested,
    ] {
        assert!(map_intent_to_commands(&state, intent, DVec3::ONE).is_empty());
    }
}
