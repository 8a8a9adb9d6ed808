//! Core-Domäne: de-Casteljau-Kernel, Kurven-Sampler, Kontrollpolygon, Presets.
//!
//! Reine Funktionen und Datentypen ohne UI-Abhängigkeit.

pub mod casteljau;
pub mod control_polygon;
pub mod preset;
pub mod sampler;

pub use casteljau::{affine_combination, evaluate, levels};
pub use control_polygon::{ControlPolygon, SceneError};
pub use preset::Preset;
pub use sampler::{sample_up_to, SAMPLE_EPSILON};
