//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, PlaybackPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let frame_time = ctx.input(|i| i.stable_dt);

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Points: {} | Revision: {}",
                state.point_count(),
                state.scene.revision()
            ));

            ui.separator();

            match state.playback.phase() {
                PlaybackPhase::Playing => {
                    ui.label(format!("Playing (drawT = {:.3})", state.playback.draw_t()))
                }
                PlaybackPhase::Stopped => ui.label("Stopped"),
            };

            ui.separator();

            ui.label(format!(
                "Surface: {:.0}×{:.0}",
                state.view.surface_size.x, state.view.surface_size.y
            ));

            if let Some(entry) = state.command_log.last_scene_change() {
                ui.separator();
                ui.label(format!(
                    "Last edit: {} (rev {})",
                    entry.command.name(),
                    entry.revision_after
                ));
            }

            if frame_time > 0.0 {
                ui.separator();
                ui.label(format!("FPS: {:.0}", 1.0 / frame_time));
            }
        });
    });
}
