//! Use-Case: Wiedergabe starten, stoppen, pro Frame fortschreiben.

use crate::app::{AppState, TickOutcome};

/// Startet die Wiedergabe von vorn (drawT = 0).
pub fn start(state: &mut AppState) {
    state.playback.start();
    log::info!("Wiedergabe gestartet (dt = {:.4})", state.view.dt);
}

/// Stoppt die Wiedergabe und setzt drawT zurück.
pub fn stop(state: &mut AppState) {
    if state.playback.is_playing() {
        log::info!(
            "Wiedergabe gestoppt bei drawT = {:.3}",
            state.playback.draw_t()
        );
    }
    state.playback.stop();
}

/// Ein Frame-Tick: liest dt bei jedem Tick neu aus dem View-State.
pub fn advance(state: &mut AppState) -> TickOutcome {
    let outcome = state.playback.tick(state.view.dt);
    if outcome == TickOutcome::Finished {
        log::info!("Wiedergabe abgeschlossen (drawT = 1)");
    }
    outcome
}

/// Reaktion auf jede Mutation des Kontrollpolygons: Wiedergabe abbrechen.
pub fn on_scene_mutated(state: &mut AppState) {
    if state.playback.is_playing() {
        log::debug!("Szene geändert während der Wiedergabe → Stopp");
    }
    state.playback.stop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_reads_current_dt_each_tick() {
        let mut state = AppState::new();
        start(&mut state);

        state.view.dt = 0.01;
        advance(&mut state);
        state.view.dt = 0.02;
        advance(&mut state);

        assert!((state.playback.draw_t() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn scene_mutation_resets_playback() {
        let mut state = AppState::new();
        start(&mut state);
        advance(&mut state);
        on_scene_mutated(&mut state);
        assert!(!state.playback.is_playing());
        assert_eq!(state.playback.draw_t(), 0.0);
    }
}
