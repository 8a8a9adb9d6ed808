//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::ViewerOptions;
pub use options::{DT_DEFAULT, DT_MAX, DT_MIN, PICK_RADIUS, T_MANUAL_DEFAULT};
pub use render_scene::{Disk, FrameLabels, LevelOverlay, Polyline, RenderScene};
