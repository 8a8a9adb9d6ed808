//! Seitenleiste mit Labels, Slidern, Checkboxen und Buttons.

use crate::app::{AppIntent, AppState};
use crate::core::Preset;
use crate::shared::{FrameLabels, DT_MAX, DT_MIN};

const USAGE_HINT: &str = "Left click: add point\nLeft drag: move point\nRight click: delete point";

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
///
/// Die Labels kommen aus der zuletzt gebauten Render-Szene.
pub fn render_side_panel(
    ctx: &egui::Context,
    state: &AppState,
    labels: &FrameLabels,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let playing = state.playback.is_playing();

    egui::SidePanel::left("control_panel")
        .default_width(240.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("de Casteljau");
            ui.separator();

            ui.label(labels.degree.as_str());
            ui.label(labels.parameter.as_str());
            ui.label(labels.curve_point.as_str());

            ui.separator();

            ui.label("Sampling step dt");
            let mut dt = state.view.dt;
            if ui
                .add(egui::Slider::new(&mut dt, DT_MIN..=DT_MAX).fixed_decimals(3))
                .changed()
            {
                events.push(AppIntent::StepSizeChanged { dt });
            }

            ui.label("Parameter t");
            let mut t = state.view.t_manual;
            if ui
                .add_enabled(
                    !playing,
                    egui::Slider::new(&mut t, 0.0..=1.0).fixed_decimals(3),
                )
                .changed()
            {
                events.push(AppIntent::ParameterChanged { t });
            }

            ui.separator();

            let mut show_curve_point = state.view.show_curve_point;
            if ui
                .checkbox(&mut show_curve_point, "Show point B(t)")
                .changed()
            {
                events.push(AppIntent::CurvePointVisibilityChanged {
                    visible: show_curve_point,
                });
            }

            let mut show_levels = state.view.show_levels;
            if ui
                .checkbox(&mut show_levels, "Show de Casteljau levels")
                .changed()
            {
                events.push(AppIntent::LevelsVisibilityChanged {
                    visible: show_levels,
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                let (play_label, intent) = if playing {
                    ("Pause", AppIntent::PauseRequested)
                } else {
                    ("Play", AppIntent::PlayRequested)
                };
                if ui.button(play_label).clicked() {
                    events.push(intent);
                }
                if ui.button("Clear").clicked() {
                    events.push(AppIntent::ClearRequested);
                }
            });

            ui.horizontal_wrapped(|ui| {
                for preset in Preset::ALL {
                    if ui.button(preset.label()).clicked() {
                        events.push(AppIntent::PresetRequested { preset });
                    }
                }
            });

            ui.separator();
            ui.label(egui::RichText::new(USAGE_HINT).small().weak());
        });

    events
}
