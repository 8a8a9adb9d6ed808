//! Use-Case: Widget-Werte und Flächengröße übernehmen.

use crate::app::AppState;
use glam::DVec2;

/// Übernimmt den dt-Slider (geklemmt auf den Slider-Bereich).
pub fn set_step_size(state: &mut AppState, dt: f64) {
    state.view.set_dt(dt);
}

/// Übernimmt den t-Slider. Während der Wiedergabe gesperrt.
pub fn set_manual_parameter(state: &mut AppState, t: f64) {
    if state.playback.is_playing() {
        log::debug!("t-Slider während der Wiedergabe ignoriert");
        return;
    }
    state.view.set_t_manual(t);
}

/// Schaltet die Anzeige von B(t).
pub fn set_curve_point_visible(state: &mut AppState, visible: bool) {
    state.view.show_curve_point = visible;
}

/// Schaltet die Anzeige der de-Casteljau-Zwischenstufen.
pub fn set_levels_visible(state: &mut AppState, visible: bool) {
    state.view.show_levels = visible;
}

/// Aktualisiert die Größe der Zeichenfläche (ungültige Größen werden ignoriert).
pub fn set_surface_size(state: &mut AppState, size: [f64; 2]) {
    let size = DVec2::from_array(size);
    if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
        log::warn!("Ungültige Flächengröße ignoriert: {:?}", size);
        return;
    }
    if size != state.view.surface_size {
        log::debug!("Zeichenfläche: {:.0}×{:.0}", size.x, size.y);
        state.view.surface_size = size;
    }
}
