//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fällt die Entscheidung Drag / Anhängen / Löschen per Hit-Test,
//! und jede Canvas-Geste stoppt eine laufende Wiedergabe zuerst.

use super::events::PointerButton;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, button } => {
            let mut commands = stop_if_playing(state);
            let picked = state.scene.pick_index(pos, state.options.pick_radius);

            match (button, picked) {
                (PointerButton::Primary, Some(index)) => {
                    commands.push(AppCommand::BeginDrag { index });
                }
                (PointerButton::Primary, None) => {
                    commands.push(AppCommand::AppendControlPoint { pos });
                }
                (PointerButton::Secondary, Some(index)) => {
                    commands.push(AppCommand::RemoveControlPoint { index });
                }
                // Rechtsklick ins Leere, mittlere Taste: keine Wirkung
                (PointerButton::Secondary, None) | (PointerButton::Middle, _) => {}
            }

            commands
        }
        AppIntent::PointerDragged { pos } => {
            let mut commands = stop_if_playing(state);
            if let Some(index) = state.interaction.dragged_index() {
                commands.push(AppCommand::MoveControlPoint { index, pos });
            }
            commands
        }
        AppIntent::PointerReleased { button } => {
            if button == PointerButton::Primary && state.interaction.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::StepSizeChanged { dt } => vec![AppCommand::SetStepSize { dt }],
        AppIntent::ParameterChanged { t } => {
            // t-Slider ist während der Wiedergabe gesperrt
            if state.playback.is_playing() {
                vec![]
            } else {
                vec![AppCommand::SetManualParameter { t }]
            }
        }
        AppIntent::CurvePointVisibilityChanged { visible } => {
            vec![AppCommand::SetCurvePointVisible { visible }]
        }
        AppIntent::LevelsVisibilityChanged { visible } => {
            vec![AppCommand::SetLevelsVisible { visible }]
        }
        // Die Aktion stammt aus der angezeigten Beschriftung, nicht aus der
        // aktuellen Phase: ein Tick im selben Frame darf sie nicht umkehren.
        AppIntent::PlayRequested => {
            if state.playback.is_playing() {
                vec![]
            } else {
                vec![AppCommand::StartPlayback]
            }
        }
        AppIntent::PauseRequested => stop_if_playing(state),
        AppIntent::ClearRequested => vec![AppCommand::EndDrag, AppCommand::ClearControlPoints],
        AppIntent::PresetRequested { preset } => {
            vec![AppCommand::EndDrag, AppCommand::LoadPreset { preset }]
        }
        AppIntent::FrameTick => {
            if state.playback.is_playing() {
                vec![AppCommand::AdvancePlayback]
            } else {
                vec![]
            }
        }
        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
    }
}

fn stop_if_playing(state: &AppState) -> Vec<AppCommand> {
    if state.playback.is_playing() {
        vec![AppCommand::StopPlayback]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests;
