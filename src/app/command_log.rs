//! Verlauf der ausgeführten Commands eines Laufs.
//!
//! Jeder Eintrag hält die Stufe fest, in der der Command angewendet wurde.
//! Die Replay-Ausgabe übernimmt den Verlauf in ihren Bericht.

use super::ArchCommand;
use crate::shared::Stage;
use serde::Serialize;
use std::collections::VecDeque;

/// Ein ausgeführter Command und die Stufe davor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedCommand {
    pub stage: Stage,
    pub command: ArchCommand,
}

/// Begrenzter Verlauf; bei voller Kapazität fällt der älteste Eintrag heraus.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Verlauf mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Hält `command` fest, angewendet in `stage`.
    pub fn record(&mut self, stage: Stage, command: &ArchCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            stage,
            command: command.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    /// Kopie des Verlaufs in Ausführungsreihenfolge.
    pub fn to_vec(&self) -> Vec<LoggedCommand> {
        self.entries.iter().cloned().collect()
    }
}
