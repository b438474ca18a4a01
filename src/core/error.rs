//! Fehlertypen der Hover-Engine.
//!
//! Keiner dieser Fehler ist fatal: die Engine überspringt bei Fehlern den
//! betroffenen Layer (für den Index-Aufbau bzw. für den aktuellen Zyklus).

use thiserror::Error;

use super::layer::{CrsId, LayerId};

/// Fehler, die an den Grenzen zu externen Kollaborateuren auftreten können.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoverError {
    /// Der Feature-Provider eines Layers ist beim Index-Aufbau fehlgeschlagen.
    #[error("Index-Aufbau für Layer {layer} fehlgeschlagen: {reason}")]
    IndexBuild { layer: LayerId, reason: String },

    /// Der Layer liefert einen Geometrietyp, der nicht indexiert werden kann.
    #[error("Layer {layer} hat keinen indexierbaren Geometrietyp")]
    UnsupportedGeometry { layer: LayerId },

    /// Die Query-Geometrie konnte nicht ins Layer-KBS transformiert werden.
    #[error("KBS-Transformation {from} -> {to} fehlgeschlagen: {reason}")]
    CrsTransform {
        from: CrsId,
        to: CrsId,
        reason: String,
    },

    /// Einzelabruf eines Features beim Provider fehlgeschlagen.
    #[error("Feature-Provider von Layer {layer} meldet Fehler: {reason}")]
    Provider { layer: LayerId, reason: String },

    /// Konfigurationswert außerhalb des gültigen Bereichs.
    #[error("Ungültige Konfiguration: {0}")]
    InvalidConfig(String),

    /// Layer-ID ist in der Registry nicht (mehr) vorhanden.
    #[error("Unbekannter Layer: {0}")]
    UnknownLayer(LayerId),
}
