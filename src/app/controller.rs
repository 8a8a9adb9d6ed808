//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Jede Änderung am Kontrollpolygon (erkennbar an der Revision)
    /// stoppt eine laufende Wiedergabe.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let revision_before = state.scene.revision();
        let logged = command.clone();

        match command {
            // === Wiedergabe ===
            AppCommand::StartPlayback => handlers::playback::start(state),
            AppCommand::StopPlayback => handlers::playback::stop(state),
            AppCommand::AdvancePlayback => handlers::playback::advance(state),

            // === Editing ===
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index)?,
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::AppendControlPoint { pos } => handlers::editing::append_point(state, pos),
            AppCommand::MoveControlPoint { index, pos } => {
                handlers::editing::move_point(state, index, pos)?
            }
            AppCommand::RemoveControlPoint { index } => {
                handlers::editing::remove_point(state, index)?
            }
            AppCommand::ClearControlPoints => handlers::editing::clear(state),
            AppCommand::LoadPreset { preset } => handlers::editing::load_preset(state, preset),

            // === View ===
            AppCommand::SetStepSize { dt } => handlers::view::set_step_size(state, dt),
            AppCommand::SetManualParameter { t } => {
                handlers::view::set_manual_parameter(state, t)
            }
            AppCommand::SetCurvePointVisible { visible } => {
                handlers::view::set_curve_point_visible(state, visible)
            }
            AppCommand::SetLevelsVisible { visible } => {
                handlers::view::set_levels_visible(state, visible)
            }
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),
        }

        let revision_after = state.scene.revision();
        state
            .command_log
            .record(&logged, revision_before, revision_after);

        if revision_after != revision_before {
            handlers::playback::scene_mutated(state);
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
