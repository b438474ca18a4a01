//! Handler für Layer-Änderungen und Index-Neuaufbau.

use std::collections::HashSet;

use crate::app::{eligibility, HoverState};
use crate::core::{LayerId, LayerInfo};
use crate::host::{HoverHost, LayerRegistry};

/// Teilnehmende Layer gemäß aktuellem Filtermodus.
fn layers_in_scope(state: &HoverState, registry: &dyn LayerRegistry) -> Vec<LayerInfo> {
    let active = registry.active_layer();
    eligibility::eligible_layers(
        registry.layers(),
        state.options.layer_filter_mode,
        active.as_ref(),
    )
}

/// Baut alle Indizes im aktuellen Geltungsbereich sofort neu auf.
pub fn rebuild_all(state: &mut HoverState, host: &mut HoverHost<'_>) -> usize {
    let registry: &dyn LayerRegistry = &*host.layers;
    let layers = layers_in_scope(state, registry);
    state
        .index_store
        .build(layers.iter().map(|layer| (layer, registry.provider(&layer.id))))
}

/// Manueller Neuaufbau mit Rückmeldung an die Statuszeile.
pub fn rebuild_requested(state: &mut HoverState, host: &mut HoverHost<'_>) {
    log::info!("Spatial-Indizes werden manuell neu aufgebaut...");
    let built = rebuild_all(state, host);
    state.status_message = Some(format!("{} Spatial-Index(e) neu aufgebaut", built));
}

/// Markiert den Index eines Layers als veraltet.
pub fn invalidate(state: &mut HoverState, id: &LayerId) {
    state.index_store.invalidate(id);
}

/// Gibt den Index eines entfernten Layers frei.
pub fn drop_layer(state: &mut HoverState, id: &LayerId) {
    if state.index_store.remove(id).is_some() {
        log::debug!("Index für entfernten Layer {} freigegeben", id);
    }
}

/// Verwirft Indizes außerhalb des Geltungsbereichs; neue Layer werden lazy aufgebaut.
pub fn rescope(state: &mut HoverState, host: &mut HoverHost<'_>) {
    let in_scope: HashSet<LayerId> = layers_in_scope(state, &*host.layers)
        .into_iter()
        .map(|layer| layer.id)
        .collect();
    state.index_store.retain_scope(&in_scope);
}
