//! Use-Cases: fachliche Operationen auf dem AppState.
//!
//! Handler in `handlers/` delegieren hierher; die Use-Cases kapseln
//! die eigentlichen Zustandsübergänge samt Logging.

pub mod control_points;
pub mod playback;
pub mod view;
