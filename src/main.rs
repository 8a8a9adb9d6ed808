//! Casteljau Bézier Viewer.
//!
//! Interaktive Darstellung von Bézier-Kurven beliebigen Grades,
//! ausgewertet mit dem de-Casteljau-Algorithmus (egui + eframe).

use casteljau_bezier_viewer::{
    build_render_scene, render, ui, AppController, AppIntent, AppState, ViewerOptions,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Casteljau Bézier Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let [surface_width, surface_height] = viewer_options.surface_size;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    surface_width as f32 + SIDE_PANEL_WIDTH,
                    surface_height as f32 + STATUS_BAR_HEIGHT,
                ])
                .with_title("de Casteljau Bézier Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau Bezier Viewer",
            options,
            Box::new(move |_cc| Ok(Box::new(ViewerApp::new(viewer_options)))),
        )
    }
}

/// Platz für Seitenleiste neben der Zeichenfläche.
const SIDE_PANEL_WIDTH: f32 = 256.0;
/// Platz für die Status-Bar unter der Zeichenfläche.
const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(options: ViewerOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::SurfaceResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let scene = build_render_scene(&self.state);

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(ctx, &self.state, &scene.labels));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, rect));

                render::paint_scene(ui.painter(), rect, &scene);
            });

        // Ein Tick pro Frame, nach den Eingaben dieses Frames
        if self.state.playback.is_playing() {
            events.push(AppIntent::FrameTick);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.playback.is_playing() {
            ctx.request_repaint();
        }
    }
}
