//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Enthält nur Zeichenprimitive in Flächenkoordinaten und die Label-Texte.

use glam::DVec2;

/// Gestrichene Polylinie.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Stützpunkte in Zeichenreihenfolge
    pub points: Vec<DVec2>,
    /// Linienstärke
    pub width: f32,
    /// Farbe (RGBA, 0..1)
    pub color: [f32; 4],
}

/// Gefüllte Kreisscheibe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    /// Mittelpunkt
    pub center: DVec2,
    /// Durchmesser
    pub diameter: f32,
    /// Farbe (RGBA, 0..1)
    pub color: [f32; 4],
}

/// Eine Zwischenstufe L[k] des de-Casteljau-Dreiecks.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOverlay {
    /// Stufenindex k (1..n-1)
    pub level: usize,
    /// Verbindungslinie der Stufenpunkte
    pub polyline: Polyline,
    /// Punkte der Stufe
    pub disks: Vec<Disk>,
}

/// Texte der Anzeige-Labels für einen Frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLabels {
    /// `Degree (n): <n> | Points: <m>`
    pub degree: String,
    /// `t = X.XXX`
    pub parameter: String,
    /// `B(t) = (X.X, Y.Y)` bzw. `B(t) = -`
    pub curve_point: String,
}

/// Read-only Daten für einen Render-Frame.
///
/// Zeichenreihenfolge: Hintergrund, Kontrollpolygon, Kontrollpunkte,
/// Kurve, B(t), Zwischenstufen.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub surface_size: [f64; 2],
    /// Hintergrundfarbe (füllt die gesamte Fläche)
    pub background_color: [f32; 4],
    /// Kontrollpolygon (nur bei mindestens 2 Punkten)
    pub control_polygon: Option<Polyline>,
    /// Kontrollpunkte
    pub control_points: Vec<Disk>,
    /// Abgetastete Kurve über [0, t_end]
    pub curve: Option<Polyline>,
    /// Punkt B(t) (falls aktiviert)
    pub curve_point: Option<Disk>,
    /// de-Casteljau-Zwischenstufen (falls aktiviert)
    pub levels: Vec<LevelOverlay>,
    /// Label-Texte
    pub labels: FrameLabels,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet wird.
    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }
}
