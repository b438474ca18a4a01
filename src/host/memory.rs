//! In-Memory-Implementierungen der Kollaborateur-Traits.
//!
//! Werden vom Demo-Binary, den Tests und den Benchmarks genutzt.

use std::collections::{HashMap, HashSet};

use glam::DVec2;
use indexmap::IndexMap;

use super::{CrsTransformer, FeatureProvider, LayerRegistry, SelectionSink, StatusReporter};
use crate::core::{CrsId, Feature, FeatureGeometry, FeatureId, HoverError, LayerId, LayerInfo};

/// Vektor-Layer mit Features und Selektion im Speicher.
#[derive(Debug, Clone)]
pub struct MemoryLayer {
    pub info: LayerInfo,
    features: IndexMap<FeatureId, Feature>,
    selected: HashSet<FeatureId>,
    /// Simuliert einen defekten Provider (Lesefehler)
    pub fail_reads: bool,
}

impl MemoryLayer {
    /// Erstellt einen leeren Layer.
    pub fn new(info: LayerInfo) -> Self {
        Self {
            info,
            features: IndexMap::new(),
            selected: HashSet::new(),
            fail_reads: false,
        }
    }

    /// Builder: fügt ein Feature hinzu.
    pub fn with_feature(mut self, id: FeatureId, geometry: FeatureGeometry) -> Self {
        self.insert_feature(id, geometry);
        self
    }

    pub fn insert_feature(&mut self, id: FeatureId, geometry: FeatureGeometry) {
        self.features.insert(id, Feature::new(id, geometry));
    }

    pub fn remove_feature(&mut self, id: FeatureId) -> Option<Feature> {
        self.selected.remove(&id);
        self.features.shift_remove(&id)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Aktuelle Selektion (read-only).
    pub fn selected(&self) -> &HashSet<FeatureId> {
        &self.selected
    }

    fn read_error(&self) -> HoverError {
        HoverError::Provider {
            layer: self.info.id.clone(),
            reason: "Datenquelle nicht lesbar".to_string(),
        }
    }
}

impl FeatureProvider for MemoryLayer {
    fn features(&self) -> Result<Box<dyn Iterator<Item = Feature> + '_>, HoverError> {
        if self.fail_reads {
            return Err(self.read_error());
        }
        Ok(Box::new(self.features.values().cloned()))
    }

    fn geometry(&self, id: FeatureId) -> Result<Option<FeatureGeometry>, HoverError> {
        if self.fail_reads {
            return Err(self.read_error());
        }
        Ok(self.features.get(&id).map(|f| f.geometry.clone()))
    }
}

impl SelectionSink for MemoryLayer {
    fn selected_ids(&self) -> HashSet<FeatureId> {
        self.selected.clone()
    }

    fn set_selected_ids(&mut self, ids: HashSet<FeatureId>) {
        self.selected = ids;
    }
}

/// Layer-Registry mit deterministischer Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayerRegistry {
    layers: IndexMap<LayerId, MemoryLayer>,
    active: Option<LayerId>,
}

impl MemoryLayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, layer: MemoryLayer) {
        self.layers.insert(layer.info.id.clone(), layer);
    }

    pub fn remove_layer(&mut self, id: &LayerId) -> Option<MemoryLayer> {
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        self.layers.shift_remove(id)
    }

    pub fn layer(&self, id: &LayerId) -> Option<&MemoryLayer> {
        self.layers.get(id)
    }

    pub fn layer_mut(&mut self, id: &LayerId) -> Option<&mut MemoryLayer> {
        self.layers.get_mut(id)
    }

    pub fn set_active(&mut self, id: Option<LayerId>) {
        self.active = id;
    }
}

impl LayerRegistry for MemoryLayerRegistry {
    fn layers(&self) -> Vec<LayerInfo> {
        self.layers.values().map(|l| l.info.clone()).collect()
    }

    fn active_layer(&self) -> Option<LayerId> {
        self.active.clone()
    }

    fn provider(&self, layer: &LayerId) -> Option<&dyn FeatureProvider> {
        self.layers.get(layer).map(|l| l as &dyn FeatureProvider)
    }

    fn selection_mut(&mut self, layer: &LayerId) -> Option<&mut dyn SelectionSink> {
        self.layers
            .get_mut(layer)
            .map(|l| l as &mut dyn SelectionSink)
    }
}

/// Affine KBS-Transformation (Skalierung + Offset) für bekannte KBS-Paare.
///
/// Unbekannte Paare schlagen mit [`HoverError::CrsTransform`] fehl.
#[derive(Debug, Clone, Default)]
pub struct AffineCrsTransformer {
    transforms: HashMap<(CrsId, CrsId), (f64, DVec2)>,
}

impl AffineCrsTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert `to = from * scale + offset` sowie die Umkehrung.
    pub fn register(&mut self, from: CrsId, to: CrsId, scale: f64, offset: DVec2) {
        if scale != 0.0 {
            self.transforms
                .insert((to.clone(), from.clone()), (1.0 / scale, -offset / scale));
        }
        self.transforms.insert((from, to), (scale, offset));
    }
}

impl CrsTransformer for AffineCrsTransformer {
    fn transform(
        &self,
        points: &[DVec2],
        from: &CrsId,
        to: &CrsId,
    ) -> Result<Vec<DVec2>, HoverError> {
        if from == to {
            return Ok(points.to_vec());
        }
        let &(scale, offset) = self
            .transforms
            .get(&(from.clone(), to.clone()))
            .ok_or_else(|| HoverError::CrsTransform {
                from: from.clone(),
                to: to.clone(),
                reason: "keine Transformation bekannt".to_string(),
            })?;

        Ok(points.iter().map(|p| *p * scale + offset).collect())
    }
}

/// Merkt sich alle gemeldeten Selektions-Zählerstände.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    pub reports: Vec<usize>,
}

impl StatusLog {
    pub fn last(&self) -> Option<usize> {
        self.reports.last().copied()
    }
}

impl StatusReporter for StatusLog {
    fn features_selected(&mut self, count: usize) {
        if count > 0 {
            log::debug!("{} Feature(s) selektiert", count);
        }
        self.reports.push(count);
    }
}
