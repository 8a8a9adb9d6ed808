use crate::app::events::PointerButton;
use crate::app::{AppCommand, AppIntent, AppState, InteractionState};
use crate::core::{ControlPolygon, Preset};
use glam::DVec2;

use super::map_intent_to_commands;

fn state_with_three_points() -> AppState {
    let mut state = AppState::new();
    state.scene = ControlPolygon::from_points(vec![
        DVec2::new(100.0, 100.0),
        DVec2::new(200.0, 100.0),
        DVec2::new(300.0, 100.0),
    ]);
    state
}

#[test]
fn primary_press_on_point_begins_drag() {
    let state = state_with_three_points();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(199.0, 101.0),
            button: PointerButton::Primary,
        },
    );

    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 1 }]);
}

#[test]
fn primary_press_on_empty_space_appends_point() {
    let state = state_with_three_points();
    let pos = DVec2::new(150.0, 300.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos,
            button: PointerButton::Primary,
        },
    );

    assert_eq!(commands, vec![AppCommand::AppendControlPoint { pos }]);
}

#[test]
fn secondary_press_on_empty_space_maps_to_nothing() {
    let state = state_with_three_points();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(150.0, 300.0),
            button: PointerButton::Secondary,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn any_press_while_playing_stops_playback_first() {
    let mut state = state_with_three_points();
    state.playback.start();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(201.0, 100.0),
            button: PointerButton::Secondary,
        },
    );
    assert_eq!(
        commands,
        vec![
            AppCommand::StopPlayback,
            AppCommand::RemoveControlPoint { index: 1 }
        ]
    );

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(500.0, 500.0),
            button: PointerButton::Secondary,
        },
    );
    assert_eq!(commands, vec![AppCommand::StopPlayback]);
}

#[test]
fn drag_without_drag_target_only_stops_playback() {
    let mut state = state_with_three_points();

    let commands =
        map_intent_to_commands(&state, AppIntent::PointerDragged { pos: DVec2::ZERO });
    assert!(commands.is_empty());

    state.playback.start();
    let commands =
        map_intent_to_commands(&state, AppIntent::PointerDragged { pos: DVec2::ZERO });
    assert_eq!(commands, vec![AppCommand::StopPlayback]);
}

#[test]
fn drag_moves_the_dragged_index() {
    let mut state = state_with_three_points();
    state.interaction = InteractionState::Dragging { index: 2 };
    let pos = DVec2::new(250.0, 250.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged { pos });

    assert_eq!(commands, vec![AppCommand::MoveControlPoint { index: 2, pos }]);
}

#[test]
fn release_ends_drag_only_for_primary_button() {
    let mut state = state_with_three_points();
    state.interaction = InteractionState::Dragging { index: 0 };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Secondary,
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        },
    );
    assert_eq!(commands, vec![AppCommand::EndDrag]);
}

#[test]
fn parameter_change_is_ignored_while_playing() {
    let mut state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::ParameterChanged { t: 0.2 });
    assert_eq!(commands, vec![AppCommand::SetManualParameter { t: 0.2 }]);

    state.playback.start();
    let commands = map_intent_to_commands(&state, AppIntent::ParameterChanged { t: 0.2 });
    assert!(commands.is_empty());
}

#[test]
fn play_and_pause_follow_the_clicked_label() {
    let mut state = AppState::new();
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PlayRequested),
        vec![AppCommand::StartPlayback]
    );
    assert!(map_intent_to_commands(&state, AppIntent::PauseRequested).is_empty());

    state.playback.start();
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PauseRequested),
        vec![AppCommand::StopPlayback]
    );
    assert!(map_intent_to_commands(&state, AppIntent::PlayRequested).is_empty());
}

#[test]
fn frame_tick_advances_only_while_playing() {
    let mut state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::FrameTick);
    assert!(commands.is_empty());

    state.playback.start();
    let commands = map_intent_to_commands(&state, AppIntent::FrameTick);
    assert_eq!(commands, vec![AppCommand::AdvancePlayback]);
}

#[test]
fn clear_and_preset_end_drag_before_replacing_scene() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearRequested);
    assert_eq!(
        commands,
        vec![AppCommand::EndDrag, AppCommand::ClearControlPoints]
    );

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PresetRequested {
            preset: Preset::QuarticWave,
        },
    );
    assert_eq!(
        commands,
        vec![
            AppCommand::EndDrag,
            AppCommand::LoadPreset {
                preset: Preset::QuarticWave
            }
        ]
    );
}
