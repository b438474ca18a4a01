//! Engine-Controller für zentrale Event-Verarbeitung.

use super::{HoverCommand, HoverIntent, HoverState};
use crate::host::HoverHost;

/// Orchestriert Host-Events und Use-Cases auf den HoverState.
#[derive(Default)]
pub struct HoverController;

impl HoverController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut HoverState,
        host: &mut HoverHost<'_>,
        intent: HoverIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem HoverState aus und protokolliert sie.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut HoverState,
        host: &mut HoverHost<'_>,
        command: HoverCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;
        let logged = command.clone();

        match command {
            // === Lebenszyklus ===
            HoverCommand::Activate => handlers::lifecycle::activate(state, host),
            HoverCommand::Deactivate => handlers::lifecycle::deactivate(state),

            // === Hover ===
            HoverCommand::RecordMotion { screen_pos, at } => {
                handlers::hover::record_motion(state, screen_pos, at)
            }
            HoverCommand::RunDueQuery { now } => handlers::hover::run_due_query(state, host, now),

            // === Layer & Indizes ===
            HoverCommand::InvalidateLayer { id } => handlers::layers::invalidate(state, &id),
            HoverCommand::DropLayer { id } => handlers::layers::drop_layer(state, &id),
            HoverCommand::RescopeIndexes => handlers::layers::rescope(state, host),
            HoverCommand::RebuildAllIndexes => handlers::layers::rebuild_requested(state, host),

            // === Optionen & Selektion ===
            HoverCommand::ApplyOptions { options } => {
                handlers::options::apply(state, host, options)?
            }
            HoverCommand::ClearAllSelections => handlers::selection::clear_all(state, host),
        }

        // Nur erfolgreich ausgeführte Commands landen im Log
        state.command_log.record(&logged);
        Ok(())
    }
}
