//! Layer-Eligibility-Filter: welche Layer am Hover teilnehmen.

use crate::core::{LayerFilterMode, LayerId, LayerInfo};

/// Prüft, ob ein Layer im gegebenen Filtermodus teilnimmt.
///
/// Nicht-Vektor-Layer nehmen nie teil.
pub fn is_eligible(layer: &LayerInfo, mode: LayerFilterMode, active: Option<&LayerId>) -> bool {
    if !layer.is_vector() || !layer.selectable {
        return false;
    }

    match mode {
        LayerFilterMode::VisibleAndSelectable => layer.visible,
        LayerFilterMode::AllSelectable => true,
        LayerFilterMode::ActiveLayerOnly => active == Some(&layer.id),
    }
}

/// Filtert eine Layer-Liste auf die teilnehmenden Layer (Reihenfolge bleibt).
pub fn eligible_layers(
    layers: Vec<LayerInfo>,
    mode: LayerFilterMode,
    active: Option<&LayerId>,
) -> Vec<LayerInfo> {
    layers
        .into_iter()
        .filter(|layer| is_eligible(layer, mode, active))
        .collect()
}
