//! Umrechnung des konfigurierten Radius in Karteneinheiten.

use serde::{Deserialize, Serialize};

/// Einheit des konfigurierten Hover-Radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusUnit {
    /// Bildschirm-Pixel, abhängig vom aktuellen Maßstab
    #[default]
    Pixels,
    /// Karteneinheiten des Karten-KBS
    MapUnits,
}

/// Konfigurierter Radius in beiden Einheiten; welche gilt, bestimmt `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSetting {
    pub unit: RadiusUnit,
    pub pixels: u32,
    pub map_units: f64,
}

impl RadiusSetting {
    /// Radius in Karteneinheiten für den übergebenen Maßstab.
    ///
    /// Im Pixel-Modus pro Anfrage neu zu berechnen, da sich der Maßstab
    /// mit jedem Zoom ändert.
    pub fn resolve(&self, map_units_per_pixel: f64) -> f64 {
        match self.unit {
            RadiusUnit::Pixels => self.pixels as f64 * map_units_per_pixel,
            RadiusUnit::MapUnits => self.map_units,
        }
    }

    /// Radius in Pixeln für die Darstellung des Cursor-Kreises.
    ///
    /// Im Karteneinheiten-Modus wird zurückgerechnet; bei ungültigem Maßstab
    /// fällt die Berechnung auf den Pixel-Radius zurück.
    pub fn cursor_radius_px(&self, map_units_per_pixel: f64) -> u32 {
        match self.unit {
            RadiusUnit::Pixels => self.pixels.max(1),
            RadiusUnit::MapUnits if map_units_per_pixel > 0.0 => {
                let px = (self.map_units / map_units_per_pixel).round();
                if px.is_finite() {
                    (px.min(u32::MAX as f64) as u32).max(1)
                } else {
                    self.pixels.max(1)
                }
            }
            RadiusUnit::MapUnits => self.pixels.max(1),
        }
    }
}
