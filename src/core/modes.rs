//! Selektions- und Layer-Filtermodi.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::layer::FeatureId;

/// Kombinationsregel für bestehende und neu getroffene Selektion eines Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Vereinigung: `S ∪ M`
    #[default]
    Add,
    /// Ersetzen: `M`
    Replace,
    /// Symmetrische Differenz: `S △ M`
    Toggle,
}

impl SelectionMode {
    /// Berechnet die neue Selektion aus bestehender Selektion `current` und
    /// Treffermenge `matched`.
    ///
    /// `None` bedeutet: Selektion bleibt unverändert (Add/Toggle mit leerer
    /// Treffermenge).
    pub fn combine(
        self,
        current: &HashSet<FeatureId>,
        matched: &HashSet<FeatureId>,
    ) -> Option<HashSet<FeatureId>> {
        match self {
            Self::Add | Self::Toggle if matched.is_empty() => None,
            Self::Add => Some(current.union(matched).copied().collect()),
            Self::Replace => Some(matched.clone()),
            Self::Toggle => Some(current.symmetric_difference(matched).copied().collect()),
        }
    }
}

/// Bestimmt, welche Layer indexiert und abgefragt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerFilterMode {
    /// Sichtbare und selektierbare Layer
    #[default]
    VisibleAndSelectable,
    /// Alle selektierbaren Layer, Sichtbarkeit egal
    AllSelectable,
    /// Nur der aktive Layer (sofern selektierbar)
    ActiveLayerOnly,
}
