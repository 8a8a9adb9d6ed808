/// Zustand der Canvas-Interaktion: Idle oder Drag auf einem Kontrollpunkt.
///
/// Das Drag-Ziel wird als Index gehalten, nicht als Referenz. Jede Einfügung
/// oder Entfernung im Kontrollpolygon muss den Drag beenden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kontrollpunkt mit diesem Index wird gezogen
    Dragging { index: usize },
}

impl InteractionState {
    /// Index des gezogenen Punkts (falls ein Drag läuft).
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging { index } => Some(*index),
        }
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }
}
