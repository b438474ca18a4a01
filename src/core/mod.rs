//! Core-Domänentypen: Geometrie, Spatial-Index, Layer-Modell, Einheiten.

pub mod error;
pub mod geometry;
pub mod layer;
pub mod modes;
pub mod spatial;
pub mod units;

pub use error::HoverError;
pub use geometry::{Envelope, FeatureGeometry, QueryGeometry, QueryRing};
pub use layer::{CrsId, Feature, FeatureId, GeometryKind, LayerId, LayerInfo, LayerKind};
pub use modes::{LayerFilterMode, SelectionMode};
pub use spatial::EnvelopeIndex;
pub use units::{RadiusSetting, RadiusUnit};
