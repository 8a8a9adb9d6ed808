//! Use-Case: Kontrollpunkte anhängen, ziehen, löschen, leeren, Preset laden.
//!
//! Jede Einfügung oder Entfernung beendet einen laufenden Drag, da dessen
//! Index danach auf einen anderen Punkt zeigen könnte.

use crate::app::{AppState, InteractionState};
use crate::core::{Preset, SceneError};
use glam::DVec2;

/// Hängt einen neuen Kontrollpunkt ans Ende des Polygons an.
pub fn append(state: &mut AppState, pos: DVec2) {
    state.interaction = InteractionState::Idle;
    state.scene.append(pos);
    log::debug!(
        "Kontrollpunkt {} bei ({:.1}, {:.1}) angehängt",
        state.scene.len() - 1,
        pos.x,
        pos.y
    );
}

/// Beginnt einen Drag auf dem Kontrollpunkt `index`.
pub fn begin_drag(state: &mut AppState, index: usize) -> Result<(), SceneError> {
    let len = state.scene.len();
    if index >= len {
        return Err(SceneError::IndexOutOfRange { index, len });
    }
    state.interaction = InteractionState::Dragging { index };
    log::debug!("Drag auf Kontrollpunkt {} gestartet", index);
    Ok(())
}

/// Beendet einen laufenden Drag (no-op im Idle-Zustand).
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.interaction.dragged_index() {
        log::debug!("Drag auf Kontrollpunkt {} beendet", index);
    }
    state.interaction = InteractionState::Idle;
}

/// Ersetzt den Kontrollpunkt `index` durch `pos` (Drag-Bewegung).
///
/// Ohne `clamp_drag_to_surface` werden Positionen außerhalb der
/// Zeichenfläche unverändert übernommen.
pub fn move_point(state: &mut AppState, index: usize, pos: DVec2) -> Result<(), SceneError> {
    let target = if state.options.clamp_drag_to_surface {
        pos.clamp(DVec2::ZERO, state.view.surface_size.max(DVec2::ZERO))
    } else {
        pos
    };
    state.scene.replace_at(index, target)
}

/// Entfernt den Kontrollpunkt `index`.
pub fn remove(state: &mut AppState, index: usize) -> Result<(), SceneError> {
    let removed = state.scene.remove_at(index)?;
    state.interaction = InteractionState::Idle;
    log::debug!(
        "Kontrollpunkt {} bei ({:.1}, {:.1}) gelöscht",
        index,
        removed.x,
        removed.y
    );
    Ok(())
}

/// Entfernt alle Kontrollpunkte.
pub fn clear(state: &mut AppState) {
    let count = state.scene.len();
    state.interaction = InteractionState::Idle;
    state.scene.clear();
    log::info!("Kontrollpolygon geleert ({} Punkte entfernt)", count);
}

/// Ersetzt das Kontrollpolygon durch ein Preset, skaliert auf die aktuelle Fläche.
pub fn load_preset(state: &mut AppState, preset: Preset) {
    state.interaction = InteractionState::Idle;
    let points = preset.points(state.view.surface_size);
    let count = points.len();
    state.scene.replace_all(points);
    log::info!(
        "{} geladen: Grad {} ({} Punkte, Fläche {:.0}×{:.0})",
        preset.label(),
        count.saturating_sub(1),
        count,
        state.view.surface_size.x,
        state.view.surface_size.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPolygon;

    fn state_with_three_points() -> AppState {
        let mut state = AppState::new();
        state.scene = ControlPolygon::from_points(vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 100.0),
            DVec2::new(300.0, 100.0),
        ]);
        state
    }

    #[test]
    fn begin_drag_rejects_unknown_index() {
        let mut state = state_with_three_points();
        assert!(begin_drag(&mut state, 3).is_err());
        assert_eq!(state.interaction, InteractionState::Idle);

        begin_drag(&mut state, 2).expect("Index 2 existiert");
        assert_eq!(state.interaction.dragged_index(), Some(2));
    }

    #[test]
    fn remove_invalidates_drag_index() {
        let mut state = state_with_three_points();
        begin_drag(&mut state, 2).expect("Index 2 existiert");
        remove(&mut state, 0).expect("Index 0 existiert");
        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.scene.len(), 2);
    }

    #[test]
    fn move_point_leaves_surface_without_clamping() {
        let mut state = state_with_three_points();
        move_point(&mut state, 0, DVec2::new(-50.0, 2000.0)).expect("Index 0 existiert");
        assert_eq!(state.scene.points()[0], DVec2::new(-50.0, 2000.0));
    }

    #[test]
    fn move_point_clamps_when_enabled() {
        let mut state = state_with_three_points();
        state.options.clamp_drag_to_surface = true;
        move_point(&mut state, 0, DVec2::new(-50.0, 2000.0)).expect("Index 0 existiert");
        assert_eq!(state.scene.points()[0], DVec2::new(0.0, 600.0));
    }

    #[test]
    fn load_preset_uses_current_surface_size() {
        let mut state = AppState::new();
        state.view.surface_size = DVec2::new(1000.0, 500.0);
        load_preset(&mut state, Preset::CubicArch);
        assert_eq!(state.scene.len(), 4);
        assert_eq!(state.scene.points()[0], DVec2::new(100.0, 400.0));
    }
}
