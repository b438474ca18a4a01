//! Verträge zu den externen Kollaborateuren der Hover-Engine.
//!
//! Die Engine besitzt weder Karte, Layer noch Features. Sie liest über diese
//! Traits und schreibt ausschließlich über [`SelectionSink::set_selected_ids`].

use std::collections::HashSet;

use glam::DVec2;

use crate::core::{CrsId, Feature, FeatureGeometry, FeatureId, HoverError, LayerId, LayerInfo};

mod map_view;
pub mod memory;

pub use map_view::MapView;

/// Aktueller Kartenzustand (KBS, Maßstab, Pointer-Umrechnung).
pub trait MapContext {
    /// Arbeits-KBS der Karte.
    fn crs(&self) -> CrsId;
    /// Karteneinheiten pro Bildschirm-Pixel beim aktuellen Zoom.
    fn map_units_per_pixel(&self) -> f64;
    /// Rechnet eine Bildschirmposition in Kartenkoordinaten um.
    fn to_map_coordinates(&self, screen_pos: DVec2) -> DVec2;
}

/// Feature-Zugriff eines einzelnen Layers.
pub trait FeatureProvider {
    /// Lazy-Sequenz aller Features (für den Index-Aufbau).
    fn features(&self) -> Result<Box<dyn Iterator<Item = Feature> + '_>, HoverError>;
    /// Exakte Geometrie eines Features; `None` wenn es nicht (mehr) existiert.
    fn geometry(&self, id: FeatureId) -> Result<Option<FeatureGeometry>, HoverError>;
}

/// Selektionsmenge eines Layers.
pub trait SelectionSink {
    fn selected_ids(&self) -> HashSet<FeatureId>;
    fn set_selected_ids(&mut self, ids: HashSet<FeatureId>);
}

/// Menge der Layer im Projekt.
pub trait LayerRegistry {
    /// Metadaten aller Layer in stabiler Reihenfolge.
    fn layers(&self) -> Vec<LayerInfo>;
    /// Extern festgelegter aktiver Layer.
    fn active_layer(&self) -> Option<LayerId>;
    fn provider(&self, layer: &LayerId) -> Option<&dyn FeatureProvider>;
    fn selection_mut(&mut self, layer: &LayerId) -> Option<&mut dyn SelectionSink>;
}

/// Koordinatentransformation zwischen zwei KBS.
pub trait CrsTransformer {
    fn transform(&self, points: &[DVec2], from: &CrsId, to: &CrsId)
        -> Result<Vec<DVec2>, HoverError>;
}

/// Empfängt die Anzahl selektierter Features nach jedem Zyklus.
pub trait StatusReporter {
    fn features_selected(&mut self, count: usize);
}

/// Bündelt die Kollaborateure für einen Aufruf der Engine.
pub struct HoverHost<'a> {
    pub map: &'a dyn MapContext,
    pub layers: &'a mut dyn LayerRegistry,
    pub crs: &'a dyn CrsTransformer,
    pub status: &'a mut dyn StatusReporter,
}
