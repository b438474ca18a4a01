//! Handler für Options-Änderungen.

use super::layers;
use crate::app::HoverState;
use crate::host::HoverHost;
use crate::shared::HoverOptions;

/// Übernimmt validierte Optionen. Ungültige Optionen ändern den Zustand nicht.
pub fn apply(
    state: &mut HoverState,
    host: &mut HoverHost<'_>,
    options: HoverOptions,
) -> anyhow::Result<()> {
    options.validate()?;

    let filter_changed = options.layer_filter_mode != state.options.layer_filter_mode;
    state.debounce.set_delay(options.hover_delay());
    if !options.show_query_geometry {
        state.last_query = None;
    }
    state.options = options;

    if filter_changed && state.active {
        let built = layers::rebuild_all(state, host);
        log::info!("Filtermodus geändert, {} Layer neu indexiert", built);
    }
    Ok(())
}
