//! Feature-Handler für ArchCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.
//!
//! Regel für Host-Aufrufe: der Auftrag, von dem ein Stufenwechsel abhängt
//! (`build_arc`, Extrusionen), wird zuerst ausgeführt; erst bei `Ok` wird der
//! Zustand verändert. Folgeaufrufe (Hilfspunkt verwerfen, Anpassung starten,
//! Einstellungen) werden bei Fehlern nur geloggt.

pub mod extrude;
pub mod lifecycle;
pub mod pause;
pub mod placement;

use crate::host::{Adjustment, MeshHandle, ToolHost};

/// Startet eine interaktive Anpassung; Fehler werden nur geloggt.
pub(crate) fn begin_adjustment_tolerant(
    host: &mut ToolHost,
    handle: MeshHandle,
    adjustment: Adjustment,
) {
    if let Err(e) = host.backend.begin_adjustment(handle, adjustment) {
        log::warn!("{:?} konnte nicht gestartet werden: {:#}", adjustment, e);
    }
}
