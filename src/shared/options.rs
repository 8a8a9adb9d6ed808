//! Zentrale Konfiguration für den Bézier-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Standard-Breite der Zeichenfläche (Einheiten = Pixel).
pub const SURFACE_WIDTH: f64 = 900.0;
/// Standard-Höhe der Zeichenfläche.
pub const SURFACE_HEIGHT: f64 = 600.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für Kontrollpunkte in Flächeneinheiten.
pub const PICK_RADIUS: f64 = 10.0;

// ── Widgets ─────────────────────────────────────────────────────────

/// Kleinste Schrittweite dt des Samplers.
pub const DT_MIN: f64 = 0.001;
/// Größte Schrittweite dt des Samplers.
pub const DT_MAX: f64 = 0.02;
/// Standard-Schrittweite dt.
pub const DT_DEFAULT: f64 = 0.004;
/// Standardwert des manuellen t-Sliders.
pub const T_MANUAL_DEFAULT: f64 = 0.5;

// ── Kontrollpolygon ─────────────────────────────────────────────────

/// Farbe des Kontrollpolygons (RGBA: Grau).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Linienstärke des Kontrollpolygons.
pub const CONTROL_POLYGON_WIDTH: f32 = 1.2;
/// Farbe der Kontrollpunkte (RGBA: Schwarz).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Durchmesser der Kontrollpunkte.
pub const CONTROL_POINT_DIAMETER: f32 = 8.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Kurvenfarbe (RGBA: Dodger-Blue).
pub const CURVE_COLOR: [f32; 4] = [0.118, 0.565, 1.0, 1.0];
/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 2.2;
/// Farbe des Punkts B(t) (RGBA: Rot).
pub const CURVE_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Durchmesser des Punkts B(t).
pub const CURVE_POINT_DIAMETER: f32 = 10.0;

// ── de-Casteljau-Stufen ─────────────────────────────────────────────

/// Grundfarbe der Zwischenstufen (RGB, Alpha kommt aus der Stufe).
pub const LEVEL_COLOR: [f32; 3] = [1.0, 0.55, 0.0];
/// Linienstärke der Zwischenstufen.
pub const LEVEL_WIDTH: f32 = 1.2;
/// Punktdurchmesser der Zwischenstufen.
pub const LEVEL_POINT_DIAMETER: f32 = 6.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `casteljau_bezier_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Standardgröße der Zeichenfläche [Breite, Höhe] bis zum ersten Frame
    pub surface_size: [f64; 2],
    /// Hintergrundfarbe
    pub background_color: [f32; 4],

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte
    pub pick_radius: f64,
    /// Drag-Position auf die Zeichenfläche begrenzen
    pub clamp_drag_to_surface: bool,

    // ── Kontrollpolygon ─────────────────────────────────────────
    /// Farbe des Kontrollpolygons
    pub control_polygon_color: [f32; 4],
    /// Linienstärke des Kontrollpolygons
    pub control_polygon_width: f32,
    /// Farbe der Kontrollpunkte
    pub control_point_color: [f32; 4],
    /// Durchmesser der Kontrollpunkte
    pub control_point_diameter: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve
    pub curve_width: f32,
    /// Farbe von B(t)
    pub curve_point_color: [f32; 4],
    /// Durchmesser von B(t)
    pub curve_point_diameter: f32,

    // ── de-Casteljau-Stufen ─────────────────────────────────────
    /// RGB der Zwischenstufen
    pub level_color: [f32; 3],
    /// Linienstärke der Zwischenstufen
    pub level_width: f32,
    /// Punktdurchmesser der Zwischenstufen
    pub level_point_diameter: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            surface_size: [SURFACE_WIDTH, SURFACE_HEIGHT],
            background_color: BACKGROUND_COLOR,

            pick_radius: PICK_RADIUS,
            clamp_drag_to_surface: false,

            control_polygon_color: CONTROL_POLYGON_COLOR,
            control_polygon_width: CONTROL_POLYGON_WIDTH,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_diameter: CONTROL_POINT_DIAMETER,

            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            curve_point_color: CURVE_POINT_COLOR,
            curve_point_diameter: CURVE_POINT_DIAMETER,

            level_color: LEVEL_COLOR,
            level_width: LEVEL_WIDTH,
            level_point_diameter: LEVEL_POINT_DIAMETER,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(options.sanitized())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau_bezier_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("casteljau_bezier_viewer.toml")
    }

    /// Ersetzt unbrauchbare Werte (negativ, NaN) durch die Standardwerte.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.pick_radius.is_finite() && self.pick_radius > 0.0) {
            self.pick_radius = defaults.pick_radius;
        }
        if !self
            .surface_size
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
        {
            self.surface_size = defaults.surface_size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let options = ViewerOptions::from_toml_str("pick_radius = 14.0\n")
            .expect("gültiges TOML muss geladen werden");
        assert_eq!(options.pick_radius, 14.0);
        assert_eq!(options.surface_size, [SURFACE_WIDTH, SURFACE_HEIGHT]);
        assert_eq!(options.curve_width, CURVE_WIDTH);
        assert!(!options.clamp_drag_to_surface);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let options = ViewerOptions::from_toml_str("pick_radius = -3.0\nsurface_size = [0.0, 600.0]\n")
            .expect("gültiges TOML muss geladen werden");
        assert_eq!(options.pick_radius, PICK_RADIUS);
        assert_eq!(options.surface_size, [SURFACE_WIDTH, SURFACE_HEIGHT]);
    }

    #[test]
    fn missing_file_yields_defaults_and_writes_nothing() {
        let path = std::env::temp_dir().join(format!(
            "casteljau_bezier_viewer_missing_{}.toml",
            std::process::id()
        ));
        assert!(!path.exists());

        let options = ViewerOptions::load_from_file(&path);

        assert_eq!(options, ViewerOptions::default());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ViewerOptions::from_toml_str("pick_radius = [").is_err());
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut options = ViewerOptions::default();
        options.clamp_drag_to_surface = true;
        options.level_width = 2.0;
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed = ViewerOptions::from_toml_str(&text).expect("Deserialisierung");
        assert_eq!(parsed, options);
    }
}
