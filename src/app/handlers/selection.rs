//! Handler für Selektions-Operationen außerhalb des Hover-Zyklus.

use crate::app::{use_cases, HoverState};
use crate::host::HoverHost;

/// Hebt die Selektion aller Vektor-Layer auf.
pub fn clear_all(state: &mut HoverState, host: &mut HoverHost<'_>) {
    let cleared = use_cases::clear_all_selections(&mut *host.layers);
    if cleared > 0 {
        log::info!("Selektion aufgehoben: {} Features", cleared);
        state.status_message = Some(format!("Selektion aufgehoben ({} Features)", cleared));
    }
}
