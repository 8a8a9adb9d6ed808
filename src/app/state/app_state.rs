use crate::app::CommandLog;
use crate::core::ControlPolygon;
use crate::shared::ViewerOptions;
use glam::DVec2;

use super::{InteractionState, PlaybackState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpolygon P
    pub scene: ControlPolygon,
    /// View-State (dt, manuelles t, Checkboxen, Flächengröße)
    pub view: ViewState,
    /// Animationszustand
    pub playback: PlaybackState,
    /// Canvas-Interaktion (Drag)
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Pick-Radius)
    pub options: ViewerOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Kontrollpolygon
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: ViewerOptions) -> Self {
        let mut view = ViewState::new();
        view.surface_size = DVec2::from_array(options.surface_size);

        Self {
            scene: ControlPolygon::new(),
            view,
            playback: PlaybackState::new(),
            interaction: InteractionState::Idle,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.scene.len()
    }

    /// Kurvengrad n (für UI-Anzeige)
    pub fn degree(&self) -> usize {
        self.scene.degree()
    }

    /// Der Parameter für B(t): drawT beim Abspielen, sonst das manuelle t.
    pub fn visualized_t(&self) -> f64 {
        if self.playback.is_playing() {
            self.playback.draw_t()
        } else {
            self.view.t_manual
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
