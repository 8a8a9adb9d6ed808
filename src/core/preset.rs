//! Vordefinierte Kontrollpolygone, relativ zur Zeichenfläche skaliert.

use glam::DVec2;

/// Kubischer Bogen (Grad 3).
const CUBIC_ARCH: [(f64, f64); 4] = [(0.10, 0.80), (0.25, 0.20), (0.75, 0.20), (0.90, 0.80)];

/// Welle vom Grad 4.
const QUARTIC_WAVE: [(f64, f64); 5] = [
    (0.10, 0.50),
    (0.25, 0.15),
    (0.50, 0.85),
    (0.75, 0.15),
    (0.90, 0.50),
];

/// Zickzack vom Grad 5.
const QUINTIC_ZIGZAG: [(f64, f64); 6] = [
    (0.12, 0.70),
    (0.25, 0.25),
    (0.42, 0.80),
    (0.58, 0.20),
    (0.75, 0.75),
    (0.88, 0.30),
];

/// Auswählbare Presets (Buttons "Example 1..3").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Grad 3, 4 Punkte
    CubicArch,
    /// Grad 4, 5 Punkte
    QuarticWave,
    /// Grad 5, 6 Punkte
    QuinticZigzag,
}

impl Preset {
    /// Alle Presets in Button-Reihenfolge.
    pub const ALL: [Preset; 3] = [Preset::CubicArch, Preset::QuarticWave, Preset::QuinticZigzag];

    /// Beschriftung für den zugehörigen Button.
    pub fn label(self) -> &'static str {
        match self {
            Preset::CubicArch => "Example 1",
            Preset::QuarticWave => "Example 2",
            Preset::QuinticZigzag => "Example 3",
        }
    }

    fn fractions(self) -> &'static [(f64, f64)] {
        match self {
            Preset::CubicArch => &CUBIC_ARCH,
            Preset::QuarticWave => &QUARTIC_WAVE,
            Preset::QuinticZigzag => &QUINTIC_ZIGZAG,
        }
    }

    /// Kontrollpunkte für eine Zeichenfläche der Größe `surface_size` (w, h).
    pub fn points(self, surface_size: DVec2) -> Vec<DVec2> {
        self.fractions()
            .iter()
            .map(|&(fx, fy)| DVec2::new(fx * surface_size.x, fy * surface_size.y))
            .collect()
    }
}
