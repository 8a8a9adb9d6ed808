//! Application State — zentrale Datenhaltung.
//!
//! Aufgeteilt in Teilzustände: Szene (Kontrollpolygon), View (Widget-Werte),
//! Wiedergabe (Animation) und Interaktion (Drag).

mod app_state;
mod interaction;
mod playback;
mod view;

pub use app_state::AppState;
pub use interaction::InteractionState;
pub use playback::{PlaybackPhase, PlaybackState, TickOutcome, FINISH_EPSILON};
pub use view::ViewState;
