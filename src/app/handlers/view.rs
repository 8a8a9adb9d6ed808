//! Handler für Widget-Werte und Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Sampler-Schrittweite.
pub fn set_step_size(state: &mut AppState, dt: f64) {
    use_cases::view::set_step_size(state, dt);
}

/// Setzt den manuellen Parameter t.
pub fn set_manual_parameter(state: &mut AppState, t: f64) {
    use_cases::view::set_manual_parameter(state, t);
}

/// Setzt die Sichtbarkeit von B(t).
pub fn set_curve_point_visible(state: &mut AppState, visible: bool) {
    use_cases::view::set_curve_point_visible(state, visible);
}

/// Setzt die Sichtbarkeit der Zwischenstufen.
pub fn set_levels_visible(state: &mut AppState, visible: bool) {
    use_cases::view::set_levels_visible(state, visible);
}

/// Aktualisiert die Flächengröße im State.
pub fn set_surface_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::view::set_surface_size(state, size);
}
