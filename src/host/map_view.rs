//! 2D-Kartenansicht mit Pan und Zoom als einfacher [`MapContext`].

use glam::DVec2;

use super::MapContext;
use crate::core::CrsId;

/// Kartenansicht: Zentrum, Zoom und Viewport-Größe in einem festen KBS.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Kartenmittelpunkt in Kartenkoordinaten
    pub center: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
    /// Arbeits-KBS der Karte
    pub crs: CrsId,
}

impl MapView {
    /// Sichtbare Karten-Halbhöhe bei Zoom 1.0.
    pub const BASE_EXTENT: f64 = 1000.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.001;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 1000.0;

    /// Erstellt eine Ansicht um den Ursprung mit Zoom 1.0.
    pub fn new(crs: CrsId, viewport_size: DVec2) -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: 1.0,
            viewport_size,
            crs,
        }
    }

    /// Verschiebt die Ansicht (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Rechnet Kartenkoordinaten in Bildschirm-Pixel um (Y wächst nach unten).
    pub fn map_to_screen(&self, map_pos: DVec2) -> DVec2 {
        let delta = (map_pos - self.center) / self.map_units_per_pixel();
        self.viewport_size * 0.5 + DVec2::new(delta.x, -delta.y)
    }
}

impl MapContext for MapView {
    fn crs(&self) -> CrsId {
        self.crs.clone()
    }

    fn map_units_per_pixel(&self) -> f64 {
        2.0 * Self::BASE_EXTENT / (self.zoom * self.viewport_size.y.max(1.0))
    }

    fn to_map_coordinates(&self, screen_pos: DVec2) -> DVec2 {
        // Y negieren: Bildschirm-Y wächst nach unten, Karten-Y nach oben
        let delta = (screen_pos - self.viewport_size * 0.5) * self.map_units_per_pixel();
        self.center + DVec2::new(delta.x, -delta.y)
    }
}
