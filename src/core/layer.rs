//! Layer-Modell: Identitäten, KBS-Kennungen und Layer-Metadaten.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Envelope, FeatureGeometry};

/// Feature-ID innerhalb eines Layers.
pub type FeatureId = u64;

/// Stabile Identität eines Layers in der Registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub String);

impl LayerId {
    /// Erstellt eine Layer-ID aus einem beliebigen String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Kennung eines Koordinatenbezugssystems (z.B. `EPSG:3857`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrsId(pub String);

impl CrsId {
    /// Erstellt eine KBS-Kennung aus einem Authority-Code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CrsId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Art eines Layers. Nur Vektor-Layer nehmen an der Hover-Selektion teil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Vector,
    Raster,
}

/// Geometrietyp eines Vektor-Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
    /// Attributtabelle ohne Geometrie bzw. unbekannter Typ
    NoGeometry,
}

impl GeometryKind {
    /// Gibt `true` zurück, wenn Layer dieses Typs indexiert werden können.
    pub fn is_indexable(self) -> bool {
        !matches!(self, GeometryKind::NoGeometry)
    }
}

/// Metadaten eines Layers, wie sie die Layer-Registry liefert.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo {
    /// Layer-Identität
    pub id: LayerId,
    /// Anzeigename (nur für Logs)
    pub name: String,
    /// Vektor oder Raster
    pub kind: LayerKind,
    /// Geometrietyp (bei Raster-Layern bedeutungslos)
    pub geometry_kind: GeometryKind,
    /// Natives KBS des Layers
    pub crs: CrsId,
    /// Aktuell auf der Karte sichtbar
    pub visible: bool,
    /// Als selektierbar markiert
    pub selectable: bool,
}

impl LayerInfo {
    /// Erstellt einen sichtbaren, selektierbaren Vektor-Layer.
    pub fn vector(id: impl Into<String>, geometry_kind: GeometryKind, crs: CrsId) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id: LayerId(id),
            kind: LayerKind::Vector,
            geometry_kind,
            crs,
            visible: true,
            selectable: true,
        }
    }

    /// Gibt `true` zurück, wenn es sich um einen Vektor-Layer handelt.
    pub fn is_vector(&self) -> bool {
        self.kind == LayerKind::Vector
    }
}

/// Ein Feature, wie es der Feature-Provider beim Iterieren liefert.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub envelope: Envelope,
    pub geometry: FeatureGeometry,
}

impl Feature {
    /// Erstellt ein Feature und leitet die Envelope aus der Geometrie ab.
    pub fn new(id: FeatureId, geometry: FeatureGeometry) -> Self {
        Self {
            id,
            envelope: geometry.envelope(),
            geometry,
        }
    }
}
