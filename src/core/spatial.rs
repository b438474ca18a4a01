//! Spatial-Index (R-Tree) über Feature-Envelopes.
//!
//! Jedes Feature liegt mit seiner Bounding-Box im Baum. Eine Abfrage liefert
//! genau die Features, deren Envelope die Query-Envelope schneidet
//! (inklusiv), unabhängig von Größe oder Lage der übrigen Features.

use rstar::{RTree, RTreeObject, AABB};

use super::geometry::Envelope;
use super::layer::{Feature, FeatureId};

/// Eintrag im R-Tree: Feature-ID samt Envelope.
#[derive(Debug, Clone, PartialEq)]
struct IndexedFeature {
    id: FeatureId,
    bounds: Envelope,
}

impl RTreeObject for IndexedFeature {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        to_aabb(&self.bounds)
    }
}

fn to_aabb(envelope: &Envelope) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [envelope.min.x, envelope.min.y],
        [envelope.max.x, envelope.max.y],
    )
}

/// Read-only Spatial-Index über den Envelopes eines Layers.
#[derive(Debug, Clone)]
pub struct EnvelopeIndex {
    tree: RTree<IndexedFeature>,
}

impl EnvelopeIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Baut einen Index aus einer Feature-Sequenz. Features ohne Geometrie
    /// (leere Envelope) werden übersprungen.
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let entries: Vec<IndexedFeature> = features
            .into_iter()
            .filter(|feature| !feature.envelope.is_empty())
            .map(|feature| IndexedFeature {
                id: feature.id,
                bounds: feature.envelope,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Gibt die Anzahl indexierter Features zurück.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Gibt `true` zurück, wenn keine Features im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Liefert alle Feature-IDs, deren Envelope die Query-Envelope schneidet.
    ///
    /// Grobfilter: Treffer können geometrisch trotzdem disjunkt sein.
    pub fn intersecting(&self, query: &Envelope) -> Vec<FeatureId> {
        if self.is_empty() || query.is_empty() {
            return Vec::new();
        }

        let mut ids: Vec<FeatureId> = self
            .tree
            .locate_in_envelope_intersecting(&to_aabb(query))
            .map(|entry| entry.id)
            .collect();

        ids.sort_unstable();
        ids
    }
}
