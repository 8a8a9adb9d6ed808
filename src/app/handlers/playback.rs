//! Handler für die Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet die Wiedergabe.
pub fn start(state: &mut AppState) {
    use_cases::playback::start(state);
}

/// Stoppt die Wiedergabe.
pub fn stop(state: &mut AppState) {
    use_cases::playback::stop(state);
}

/// Schreibt die Wiedergabe um einen Frame fort.
pub fn advance(state: &mut AppState) {
    use_cases::playback::advance(state);
}

/// Bricht die Wiedergabe nach einer Szenen-Mutation ab.
pub fn scene_mutated(state: &mut AppState) {
    use_cases::playback::on_scene_mutated(state);
}
