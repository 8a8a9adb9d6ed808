//! Handler für Kontrollpunkt-Editing und Presets.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Preset;
use glam::DVec2;

/// Hängt einen Kontrollpunkt an.
pub fn append_point(state: &mut AppState, pos: DVec2) {
    use_cases::control_points::append(state, pos);
}

/// Startet einen Drag auf einem vorhandenen Kontrollpunkt.
pub fn begin_drag(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::control_points::begin_drag(state, index)?;
    Ok(())
}

/// Beendet den aktuellen Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::control_points::end_drag(state);
}

/// Verschiebt einen Kontrollpunkt und propagiert Indexfehler.
pub fn move_point(state: &mut AppState, index: usize, pos: DVec2) -> anyhow::Result<()> {
    use_cases::control_points::move_point(state, index, pos)?;
    Ok(())
}

/// Entfernt einen Kontrollpunkt und propagiert Indexfehler.
pub fn remove_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::control_points::remove(state, index)?;
    Ok(())
}

/// Entfernt alle Kontrollpunkte.
pub fn clear(state: &mut AppState) {
    use_cases::control_points::clear(state);
}

/// Lädt ein Preset.
pub fn load_preset(state: &mut AppState, preset: Preset) {
    use_cases::control_points::load_preset(state, preset);
}
