//! Hover-Selektion für Vektor-Layer.
//! Engine-Funktionalität als Library exportiert für Hosts, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{
    HoverCommand, HoverController, HoverCycleReport, HoverIntent, HoverState, IndexStore,
    LayerIndexEntry, LayerOutcome,
};
pub use core::{
    CrsId, Envelope, EnvelopeIndex, Feature, FeatureGeometry, FeatureId, GeometryKind,
    HoverError, LayerFilterMode, LayerId, LayerInfo, LayerKind, QueryGeometry, QueryRing,
    RadiusUnit, SelectionMode,
};
pub use host::{
    CrsTransformer, FeatureProvider, HoverHost, LayerRegistry, MapContext, MapView,
    SelectionSink, StatusReporter,
};
pub use shared::HoverOptions;
