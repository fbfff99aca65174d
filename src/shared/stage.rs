//! Stufen des Bogen-Werkzeugs und Ergebnis eines Laufs.

use serde::Serialize;

/// Aktive Stufe der Zustandsmaschine. Pause ist orthogonal dazu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum Stage {
    #[default]
    AwaitingFirstPoint,
    AwaitingSecondPoint,
    AwaitingThirdPoint,
    AwaitingFirstExtrudeConfirm,
    AwaitingSecondExtrudeConfirm,
    Done,
}

impl Stage {
    /// `true` solange noch Punkte platziert werden.
    pub fn is_placement(self) -> bool {
        self < Stage::AwaitingFirstExtrudeConfirm
    }

    pub fn is_done(self) -> bool {
        self == Stage::Done
    }
}

/// Ausgang eines Werkzeug-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ToolOutcome {
    /// Werkzeug läuft noch
    #[default]
    Running,
    /// Regulär abgeschlossen
    Finished,
    /// Vom Benutzer abgebrochen
    Cancelled,
    /// Wegen eines Ablauffehlers abgebrochen
    Faulted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_ends_before_first_extrude() {
        assert!(Stage::AwaitingFirstPoint.is_placement());
        assert!(Stage::AwaitingThirdPoint.is_placement());
        assert!(!Stage::AwaitingFirstExtrudeConfirm.is_placement());
        assert!(!Stage::AwaitingSecondExtrudeConfirm.is_placement());
        assert!(!Stage::Done.is_placement());
        assert!(Stage::Done.is_done());
    }
}
