//! Index-Store: ein Spatial-Index pro teilnehmendem Layer.
//!
//! Rebuild-Politik ist lazy: Invalidierung setzt nur das Dirty-Flag, der
//! Neuaufbau passiert vor der nächsten Abfrage gegen diesen Layer. Eine
//! Abfrage sieht damit nie einen strukturell veralteten Index.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::core::{CrsId, EnvelopeIndex, HoverError, LayerId, LayerInfo};
use crate::host::FeatureProvider;

/// Index eines Layers samt Metadaten.
#[derive(Debug, Clone)]
pub struct LayerIndexEntry {
    pub layer_id: LayerId,
    pub index: EnvelopeIndex,
    /// KBS, in dem die Envelopes indexiert sind
    pub crs: CrsId,
    pub built_at: Instant,
    /// Gesetzt, sobald sich der Feature-Bestand des Layers geändert hat
    pub dirty: bool,
}

/// Besitzt alle Layer-Indizes der Engine.
#[derive(Debug, Default)]
pub struct IndexStore {
    entries: HashMap<LayerId, LayerIndexEntry>,
    /// Layer, deren Aufbau fehlgeschlagen ist; bis zur nächsten Invalidierung übersprungen
    failed: HashSet<LayerId>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, layer: &LayerId) -> Option<&LayerIndexEntry> {
        self.entries.get(layer)
    }

    /// Gibt `true` zurück, wenn der letzte Aufbau dieses Layers fehlgeschlagen ist.
    pub fn has_failed(&self, layer: &LayerId) -> bool {
        self.failed.contains(layer)
    }

    /// Baut alle übergebenen Layer sofort neu auf und verwirft alle übrigen Einträge.
    ///
    /// Fehlschläge einzelner Layer brechen den Aufbau nicht ab. Liefert die
    /// Anzahl erfolgreich indexierter Layer.
    pub fn build<'a>(
        &mut self,
        layers: impl IntoIterator<Item = (&'a LayerInfo, Option<&'a dyn FeatureProvider>)>,
    ) -> usize {
        self.clear();
        let mut built = 0;
        for (layer, provider) in layers {
            let Some(provider) = provider else {
                log::warn!("Kein Feature-Provider für Layer {}", layer.name);
                continue;
            };
            if self.rebuild(layer, provider).is_ok() {
                built += 1;
            }
        }
        built
    }

    /// Markiert den Index eines Layers als veraltet und gibt einen
    /// fehlgeschlagenen Layer für einen neuen Versuch frei.
    pub fn invalidate(&mut self, layer: &LayerId) {
        self.failed.remove(layer);
        if let Some(entry) = self.entries.get_mut(layer) {
            entry.dirty = true;
        }
    }

    /// Baut den Index eines Layers synchron neu auf.
    pub fn rebuild(
        &mut self,
        layer: &LayerInfo,
        provider: &dyn FeatureProvider,
    ) -> Result<&LayerIndexEntry, HoverError> {
        match build_index(layer, provider) {
            Ok(index) => {
                log::debug!(
                    "Spatial-Index für Layer {} aufgebaut ({} Features)",
                    layer.name,
                    index.len()
                );
                self.failed.remove(&layer.id);
                let entry = LayerIndexEntry {
                    layer_id: layer.id.clone(),
                    index,
                    crs: layer.crs.clone(),
                    built_at: Instant::now(),
                    dirty: false,
                };
                self.entries.insert(layer.id.clone(), entry);
                self.entries
                    .get(&layer.id)
                    .ok_or_else(|| HoverError::UnknownLayer(layer.id.clone()))
            }
            Err(e) => {
                log::warn!("Layer {} wird nicht indexiert: {}", layer.name, e);
                self.entries.remove(&layer.id);
                self.failed.insert(layer.id.clone());
                Err(e)
            }
        }
    }

    /// Liefert einen aktuellen Index; fehlende oder veraltete Einträge werden
    /// vorher aufgebaut. `None`, wenn der Layer nicht indexiert werden kann.
    pub fn fresh(
        &mut self,
        layer: &LayerInfo,
        provider: &dyn FeatureProvider,
    ) -> Option<&LayerIndexEntry> {
        let stale = self
            .entries
            .get(&layer.id)
            .map_or(true, |entry| entry.dirty || entry.crs != layer.crs);
        if !stale {
            return self.entries.get(&layer.id);
        }
        if self.failed.contains(&layer.id) {
            return None;
        }

        log::debug!("Index für Layer {} wird vor der Abfrage aufgebaut", layer.name);
        self.rebuild(layer, provider).ok()
    }

    /// Entfernt den Eintrag eines Layers (z.B. nach dem Löschen des Layers).
    pub fn remove(&mut self, layer: &LayerId) -> Option<LayerIndexEntry> {
        self.failed.remove(layer);
        self.entries.remove(layer)
    }

    /// Verwirft alle Einträge außerhalb des aktuellen Geltungsbereichs.
    pub fn retain_scope(&mut self, in_scope: &HashSet<LayerId>) {
        self.entries.retain(|id, _| in_scope.contains(id));
        self.failed.retain(|id| in_scope.contains(id));
    }

    /// Gibt alle Indizes frei.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.failed.clear();
    }
}

/// Baut den Envelope-Index eines Layers über dessen Feature-Sequenz.
fn build_index(
    layer: &LayerInfo,
    provider: &dyn FeatureProvider,
) -> Result<EnvelopeIndex, HoverError> {
    if !layer.is_vector() || !layer.geometry_kind.is_indexable() {
        return Err(HoverError::UnsupportedGeometry {
            layer: layer.id.clone(),
        });
    }

    let features = provider.features().map_err(|e| HoverError::IndexBuild {
        layer: layer.id.clone(),
        reason: e.to_string(),
    })?;

    Ok(EnvelopeIndex::from_features(features))
}
