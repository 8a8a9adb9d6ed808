//! Begrenztes Command-Log mit Szenen-Revisionen.
//!
//! Jeder Eintrag hält fest, ob der Command das Kontrollpolygon verändert hat
//! (Revision vorher/nachher). Aufeinanderfolgende Wiedergabe-Ticks werden
//! zu einem Eintrag zusammengefasst, damit die Animation das Log nicht flutet.

use super::AppCommand;

/// Ein ausgeführter Command samt Szenen-Revision.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Der ausgeführte Command
    pub command: AppCommand,
    /// Revision des Kontrollpolygons vor der Ausführung
    pub revision_before: u64,
    /// Revision nach der Ausführung
    pub revision_after: u64,
    /// Anzahl direkt aufeinanderfolgender, zusammengefasster Ausführungen
    pub repeat: u32,
}

impl LoggedCommand {
    /// Gibt `true` zurück, wenn der Command das Kontrollpolygon verändert hat.
    pub fn changed_scene(&self) -> bool {
        self.revision_before != self.revision_after
    }
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// `AdvancePlayback` ohne Szenenänderung erhöht nur den Zähler des
    /// vorherigen gleichartigen Eintrags.
    pub fn record(&mut self, command: &AppCommand, revision_before: u64, revision_after: u64) {
        if *command == AppCommand::AdvancePlayback && revision_before == revision_after {
            if let Some(last) = self.entries.last_mut() {
                if last.command == AppCommand::AdvancePlayback {
                    last.repeat = last.repeat.saturating_add(1);
                    last.revision_after = revision_after;
                    return;
                }
            }
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            command: command.clone(),
            revision_before,
            revision_after,
            repeat: 1,
        });
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Letzter Command, der das Kontrollpolygon verändert hat.
    pub fn last_scene_change(&self) -> Option<&LoggedCommand> {
        self.entries.iter().rev().find(|entry| entry.changed_scene())
    }
}
