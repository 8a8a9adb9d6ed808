//! Szenenmodell: geordnete Folge von Kontrollpunkten.

use glam::DVec2;
use thiserror::Error;

/// Fehler bei Zugriffen auf das Kontrollpolygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Index liegt außerhalb der aktuellen Punktfolge
    #[error("Kontrollpunkt-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Geordnete Kontrollpunktfolge P einer Bézier-Kurve.
///
/// Die Reihenfolge ist das Kontrollpolygon; Duplikate sind erlaubt.
/// Jede Mutation erhöht `revision` (Dirty-Signal für Controller und Animation).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<DVec2>,
    revision: u64,
}

impl ControlPolygon {
    /// Erstellt ein leeres Kontrollpolygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Kontrollpolygon aus einer Punktfolge.
    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self {
            points,
            revision: 0,
        }
    }

    /// Read-only Sicht auf die Punkte in Polygon-Reihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte m.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kurvengrad n = max(m-1, 0).
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Punkt am Index (falls vorhanden).
    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    /// Zähler aller bisherigen Mutationen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Hängt einen Punkt ans Ende an.
    pub fn append(&mut self, point: DVec2) {
        self.points.push(point);
        self.touch();
    }

    /// Ersetzt den Punkt am Index.
    pub fn replace_at(&mut self, index: usize, point: DVec2) -> Result<(), SceneError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(SceneError::IndexOutOfRange { index, len })?;
        *slot = point;
        self.touch();
        Ok(())
    }

    /// Entfernt den Punkt am Index; nachfolgende Indizes rücken um eins nach.
    pub fn remove_at(&mut self, index: usize) -> Result<DVec2, SceneError> {
        let len = self.points.len();
        if index >= len {
            return Err(SceneError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Leert die Punktfolge. Zählt auch bei bereits leerer Folge als Mutation.
    pub fn clear(&mut self) {
        self.points.clear();
        self.touch();
    }

    /// Ersetzt die komplette Punktfolge atomar (z.B. Preset laden).
    pub fn replace_all(&mut self, points: Vec<DVec2>) {
        self.points = points;
        self.touch();
    }

    /// Kleinster Index i mit |P[i] - pos| <= radius, sonst `None`.
    ///
    /// Bei überlappenden Punkten gewinnt der zuerst platzierte.
    pub fn pick_index(&self, pos: DVec2, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.distance(pos) <= radius)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
