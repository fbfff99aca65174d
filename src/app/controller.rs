//! Controller der Zustandsmaschine: Intent → Commands → Handler.

use super::state::ArchToolState;
use super::{ArchCommand, ArchIntent};
use crate::core::SessionError;
use crate::host::ToolHost;

/// Orchestriert Intents und Handler auf Zustand und Host.
#[derive(Default)]
pub struct ArchController;

impl ArchController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Cursor-Position wird genau einmal pro Intent gelesen.
    pub fn handle_intent(
        &mut self,
        state: &mut ArchToolState,
        host: &mut ToolHost,
        intent: ArchIntent,
    ) -> anyhow::Result<()> {
        let cursor = host.cursor.current_position();
        let commands = super::intent_mapping::map_intent_to_commands(state, intent, cursor);
        if commands.is_empty() {
            log::debug!("{:?} in {:?} ignoriert", intent, state.stage);
        }
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt einen Command aus.
    ///
    /// Sequenzfehler der Sitzung brechen den Lauf ab (`ToolOutcome::Faulted`),
    /// Host-Fehler lassen die Stufe unverändert und werden zurückgegeben.
    pub fn handle_command(
        &mut self,
        state: &mut ArchToolState,
        host: &mut ToolHost,
        command: ArchCommand,
    ) -> anyhow::Result<()> {
        let stage = state.stage;
        let result = Self::dispatch(state, host, &command);
        match &result {
            Ok(()) => state.command_log.record(stage, &command),
            Err(e) if e.downcast_ref::<SessionError>().is_some() => {
                log::error!("Sequenzfehler bei {:?}: {:#}", command, e);
                super::handlers::lifecycle::fault(state, host);
            }
            Err(e) => log::warn!("{:?} vom Host abgelehnt: {:#}", command, e),
        }
        result
    }

    fn dispatch(
        state: &mut ArchToolState,
        host: &mut ToolHost,
        command: &ArchCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match *command {
            // === Platzierung ===
            ArchCommand::TrackGuidePoint { position } => {
                handlers::placement::track_guide_point(state, position)
            }
            ArchCommand::ConfirmFirstPoint { position } => {
                handlers::placement::confirm_first_point(state, host, position)?
            }
            ArchCommand::ConfirmSecondPoint { position } => {
                handlers::placement::confirm_second_point(state, host, position)?
            }
            ArchCommand::RefreshPreview { probe } => {
                handlers::placement::refresh_preview(state, probe)?
            }
            ArchCommand::CommitArc => handlers::placement::commit_arc(state, host)?,

            // === Extrusion ===
            ArchCommand::ConfirmFirstExtrude => {
                handlers::extrude::confirm_first_extrude(state, host)?
            }
            ArchCommand::ConfirmSecondExtrude => {
                handlers::extrude::confirm_second_extrude(state, host)?
            }

            // === Pause & Einstellungen ===
            ArchCommand::Pause => handlers::pause::pause(state),
            ArchCommand::Resume => handlers::pause::resume(state, host)?,
            ArchCommand::IncreaseSegments => handlers::pause::increase_segments(state),
            ArchCommand::DecreaseSegments => handlers::pause::decrease_segments(state),
            ArchCommand::ResetPlacement => handlers::pause::reset_placement(state, host)?,

            // === Lebenszyklus ===
            ArchCommand::Cancel => handlers::lifecycle::cancel(state, host),
        }

        Ok(())
    }
}
