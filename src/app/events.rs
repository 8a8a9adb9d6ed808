//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::Preset;
use glam::DVec2;

/// Maustaste eines Pointer-Events (toolkit-unabhängig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste
    Primary,
    /// Rechte Maustaste
    Secondary,
    /// Mittlere Maustaste
    Middle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste über der Zeichenfläche gedrückt (Flächenkoordinaten)
    PointerPressed { pos: DVec2, button: PointerButton },
    /// Pointer bei gedrückter Taste bewegt
    PointerDragged { pos: DVec2 },
    /// Maustaste losgelassen
    PointerReleased { button: PointerButton },
    /// dt-Slider geändert
    StepSizeChanged { dt: f64 },
    /// t-Slider geändert
    ParameterChanged { t: f64 },
    /// Checkbox "Show point B(t)" umgeschaltet
    CurvePointVisibilityChanged { visible: bool },
    /// Checkbox "Show de Casteljau levels" umgeschaltet
    LevelsVisibilityChanged { visible: bool },
    /// Button mit Beschriftung "Play" gedrückt
    PlayRequested,
    /// Button mit Beschriftung "Pause" gedrückt
    PauseRequested,
    /// Clear-Button gedrückt
    ClearRequested,
    /// Preset-Button gedrückt
    PresetRequested { preset: Preset },
    /// Frame-Tick des Hosts (einmal pro Frame während der Wiedergabe)
    FrameTick,
    /// Größe der Zeichenfläche hat sich geändert
    SurfaceResized { size: [f64; 2] },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Wiedergabe von vorn starten (drawT = 0, t-Slider sperren)
    StartPlayback,
    /// Wiedergabe beenden (drawT = 0, t-Slider freigeben)
    StopPlayback,
    /// drawT um das aktuelle dt erhöhen
    AdvancePlayback,
    /// Drag auf Kontrollpunkt beginnen
    BeginDrag { index: usize },
    /// Drag beenden
    EndDrag,
    /// Kontrollpunkt ans Ende anhängen
    AppendControlPoint { pos: DVec2 },
    /// Kontrollpunkt ersetzen (Drag-Bewegung)
    MoveControlPoint { index: usize, pos: DVec2 },
    /// Kontrollpunkt entfernen
    RemoveControlPoint { index: usize },
    /// Alle Kontrollpunkte entfernen
    ClearControlPoints,
    /// Kontrollpolygon durch Preset ersetzen
    LoadPreset { preset: Preset },
    /// Sampler-Schrittweite setzen
    SetStepSize { dt: f64 },
    /// Manuellen Parameter t setzen
    SetManualParameter { t: f64 },
    /// Anzeige von B(t) setzen
    SetCurvePointVisible { visible: bool },
    /// Anzeige der Zwischenstufen setzen
    SetLevelsVisible { visible: bool },
    /// Größe der Zeichenfläche setzen
    SetSurfaceSize { size: [f64; 2] },
}

impl AppCommand {
    /// Kurzname für die Status-Bar.
    pub fn name(&self) -> &'static str {
        match self {
            AppCommand::StartPlayback => "Play",
            AppCommand::StopPlayback => "Stop",
            AppCommand::AdvancePlayback => "Tick",
            AppCommand::BeginDrag { .. } => "Begin drag",
            AppCommand::EndDrag => "End drag",
            AppCommand::AppendControlPoint { .. } => "Add point",
            AppCommand::MoveControlPoint { .. } => "Move point",
            AppCommand::RemoveControlPoint { .. } => "Delete point",
            AppCommand::ClearControlPoints => "Clear",
            AppCommand::LoadPreset { .. } => "Load preset",
            AppCommand::SetStepSize { .. } => "Set dt",
            AppCommand::SetManualParameter { .. } => "Set t",
            AppCommand::SetCurvePointVisible { .. } => "Toggle B(t)",
            AppCommand::SetLevelsVisible { .. } => "Toggle levels",
            AppCommand::SetSurfaceSize { .. } => "Resize",
        }
    }
}
