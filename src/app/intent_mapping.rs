//! Mapping von Host-Intents auf mutierende Hover-Commands.

use super::{HoverCommand, HoverIntent, HoverState};
use crate::core::LayerFilterMode;

/// Übersetzt einen `HoverIntent` in eine Sequenz ausführbarer `HoverCommand`s.
///
/// Bewegungen, Ticks, Layer-Änderungen und Index-Neuaufbau werden bei inaktiver
/// Engine verworfen. Ticks ohne fällige Abfrage erzeugen keinen Command.
pub fn map_intent_to_commands(state: &HoverState, intent: HoverIntent) -> Vec<HoverCommand> {
    match intent {
        HoverIntent::ActivateRequested if state.active => vec![],
        HoverIntent::ActivateRequested => vec![HoverCommand::Activate],
        HoverIntent::DeactivateRequested if !state.active => vec![],
        HoverIntent::DeactivateRequested => vec![HoverCommand::Deactivate],

        HoverIntent::PointerMoved { screen_pos, at } if state.active => {
            vec![HoverCommand::RecordMotion { screen_pos, at }]
        }
        HoverIntent::TimerTick { now }
            if state.active && state.next_wakeup().is_some_and(|deadline| now >= deadline) =>
        {
            vec![HoverCommand::RunDueQuery { now }]
        }
        HoverIntent::PointerMoved { .. } | HoverIntent::TimerTick { .. } => vec![],

        HoverIntent::LayersAdded { ids } if state.active => {
            let mut commands: Vec<HoverCommand> = ids
                .into_iter()
                .map(|id| HoverCommand::InvalidateLayer { id })
                .collect();
            commands.push(HoverCommand::RescopeIndexes);
            commands
        }
        HoverIntent::LayersRemoved { ids } if state.active => ids
            .into_iter()
            .map(|id| HoverCommand::DropLayer { id })
            .collect(),
        HoverIntent::LayerFeaturesEdited { id } if state.active => {
            vec![HoverCommand::InvalidateLayer { id }]
        }
        HoverIntent::LayerFlagsChanged { id } if state.active => vec![
            HoverCommand::InvalidateLayer { id },
            HoverCommand::RescopeIndexes,
        ],
        HoverIntent::ActiveLayerChanged
            if state.active
                && state.options.layer_filter_mode == LayerFilterMode::ActiveLayerOnly =>
        {
            vec![HoverCommand::RescopeIndexes]
        }
        HoverIntent::LayersAdded { .. }
        | HoverIntent::LayersRemoved { .. }
        | HoverIntent::LayerFeaturesEdited { .. }
        | HoverIntent::LayerFlagsChanged { .. }
        | HoverIntent::ActiveLayerChanged => vec![],

        HoverIntent::OptionsChanged { options } => vec![HoverCommand::ApplyOptions { options }],
        HoverIntent::RebuildIndexesRequested if state.active => {
            vec![HoverCommand::RebuildAllIndexes]
        }
        HoverIntent::RebuildIndexesRequested => vec![],
        HoverIntent::ClearSelectionRequested => vec![HoverCommand::ClearAllSelections],
    }
}
