//! Wiedergabe-Zustand: treibt drawT pro Frame von 0 Richtung 1.

/// Toleranz für den Abschluss-Test `drawT >= 1 - ε`.
pub const FINISH_EPSILON: f64 = 1e-9;

/// Phase der Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// Keine Wiedergabe, manuelles t ist maßgeblich
    #[default]
    Stopped,
    /// drawT läuft pro Frame-Tick vorwärts
    Playing,
}

/// Ergebnis eines Frame-Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nicht aktiv, nichts geändert
    Idle,
    /// drawT wurde erhöht
    Advanced,
    /// drawT hat 1 erreicht, Wiedergabe beendet
    Finished,
}

/// Animationszustand {playing, drawT}
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    phase: PlaybackPhase,
    draw_t: f64,
}

impl PlaybackState {
    /// Erstellt den Startzustand (Stopped, drawT = 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Gibt `true` zurück, solange abgespielt wird.
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Aktueller Animationsparameter drawT ∈ [0, 1].
    pub fn draw_t(&self) -> f64 {
        self.draw_t
    }

    /// Startet die Wiedergabe von vorn.
    pub fn start(&mut self) {
        self.phase = PlaybackPhase::Playing;
        self.draw_t = 0.0;
    }

    /// Beendet die Wiedergabe und setzt drawT zurück.
    pub fn stop(&mut self) {
        self.phase = PlaybackPhase::Stopped;
        self.draw_t = 0.0;
    }

    /// Ein Frame-Tick: drawT ← min(drawT + dt, 1); bei drawT >= 1 - ε → Stopped.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        self.draw_t = (self.draw_t + dt.max(0.0)).min(1.0);

        if self.draw_t >= 1.0 - FINISH_EPSILON {
            self.stop();
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }
}
