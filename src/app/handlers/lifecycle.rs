//! Handler für Aktivierung und Deaktivierung der Engine.

use super::layers;
use crate::app::HoverState;
use crate::host::HoverHost;

/// Aktiviert die Engine und baut die Indizes aller teilnehmenden Layer auf.
pub fn activate(state: &mut HoverState, host: &mut HoverHost<'_>) {
    state.debounce.cancel();
    state.active = true;
    let built = layers::rebuild_all(state, host);
    log::info!("Hover-Selektion aktiviert ({} Layer indexiert)", built);
}

/// Deaktiviert die Engine: Timer verwerfen, Zwischenstand und Indizes freigeben.
pub fn deactivate(state: &mut HoverState) {
    state.debounce.cancel();
    state.active = false;
    state.last_query = None;
    state.last_report = None;
    state.index_store.clear();
    log::info!("Hover-Selektion deaktiviert");
}
