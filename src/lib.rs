//! Casteljau Bézier Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    build_render_scene, AppCommand, AppController, AppIntent, AppState, PointerButton, ViewState,
};
pub use core::{evaluate, levels, sample_up_to, ControlPolygon, Preset, SceneError};
pub use shared::{RenderScene, ViewerOptions};
