//! Use-Case: Selektion aller Vektor-Layer aufheben.

use crate::host::LayerRegistry;

/// Leert die Selektion jedes Vektor-Layers, unabhängig vom Filtermodus.
///
/// Gibt die Anzahl der abgewählten Features zurück.
pub fn clear_all_selections(registry: &mut dyn LayerRegistry) -> usize {
    let mut cleared = 0;
    for layer in registry.layers() {
        if !layer.is_vector() {
            continue;
        }
        let Some(sink) = registry.selection_mut(&layer.id) else {
            continue;
        };
        let count = sink.selected_ids().len();
        if count > 0 {
            sink.set_selected_ids(Default::default());
            cleared += count;
        }
    }
    cleared
}
