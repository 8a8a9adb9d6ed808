use crate::shared::options::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::shared::{DT_DEFAULT, DT_MAX, DT_MIN, T_MANUAL_DEFAULT};
use glam::DVec2;

/// View-bezogener Anwendungszustand (Widget-Werte und Flächengröße)
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Sampler-Schrittweite dt ∈ [DT_MIN, DT_MAX]
    pub dt: f64,
    /// Manueller Parameter t ∈ [0, 1] (maßgeblich, solange nicht abgespielt wird)
    pub t_manual: f64,
    /// Punkt B(t) anzeigen
    pub show_curve_point: bool,
    /// de-Casteljau-Zwischenstufen anzeigen
    pub show_levels: bool,
    /// Aktuelle Größe der Zeichenfläche (für Presets)
    pub surface_size: DVec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            dt: DT_DEFAULT,
            t_manual: T_MANUAL_DEFAULT,
            show_curve_point: true,
            show_levels: false,
            surface_size: DVec2::new(SURFACE_WIDTH, SURFACE_HEIGHT),
        }
    }

    /// Setzt dt, begrenzt auf den Slider-Bereich.
    pub fn set_dt(&mut self, dt: f64) {
        if dt.is_finite() {
            self.dt = dt.clamp(DT_MIN, DT_MAX);
        }
    }

    /// Setzt den manuellen Parameter, begrenzt auf [0, 1].
    pub fn set_t_manual(&mut self, t: f64) {
        if t.is_finite() {
            self.t_manual = t.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let view = ViewState::new();
        assert_eq!(view.dt, 0.004);
        assert_eq!(view.t_manual, 0.5);
        assert!(view.show_curve_point);
        assert!(!view.show_levels);
        assert_eq!(view.surface_size, DVec2::new(900.0, 600.0));
    }

    #[test]
    fn setters_clamp_and_ignore_nan() {
        let mut view = ViewState::new();
        view.set_dt(0.5);
        assert_eq!(view.dt, DT_MAX);
        view.set_dt(0.0);
        assert_eq!(view.dt, DT_MIN);
        view.set_dt(f64::NAN);
        assert_eq!(view.dt, DT_MIN);

        view.set_t_manual(1.7);
        assert_eq!(view.t_manual, 1.0);
        view.set_t_manual(-0.2);
        assert_eq!(view.t_manual, 0.0);
    }
}
