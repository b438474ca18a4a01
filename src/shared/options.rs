//! Zentrale Konfiguration der Hover-Selektion.
//!
//! `HoverOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{HoverError, LayerFilterMode, RadiusSetting, RadiusUnit, SelectionMode};

// ── Radius ──────────────────────────────────────────────────────────

/// Standard-Radius in Bildschirm-Pixeln.
pub const RADIUS_PIXELS: u32 = 20;
/// Kleinster erlaubter Pixel-Radius.
pub const RADIUS_PIXELS_MIN: u32 = 1;
/// Größter erlaubter Pixel-Radius.
pub const RADIUS_PIXELS_MAX: u32 = 2000;
/// Standard-Radius in Karteneinheiten.
pub const RADIUS_MAP_UNITS: f64 = 10.0;

// ── Query ───────────────────────────────────────────────────────────

/// Ruhezeit nach der letzten Mausbewegung, bevor abgefragt wird.
pub const HOVER_DELAY_MS: u64 = 15;
/// Anzahl Polygon-Ecken der Kreis-Approximation.
pub const CIRCLE_SEGMENTS: usize = 32;
/// Mindestanzahl Ecken, darunter wird die Approximation zu grob.
pub const CIRCLE_SEGMENTS_MIN: usize = 8;
/// Höchstanzahl Ecken, der Ring wird in jedem Hover-Zyklus neu aufgebaut.
pub const CIRCLE_SEGMENTS_MAX: usize = 256;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Hover-Optionen.
/// Wird als `hover_select.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverOptions {
    /// Einheit des Radius
    pub radius_unit: RadiusUnit,
    /// Radius in Bildschirm-Pixeln (1 bis 2000)
    pub radius_pixels: u32,
    /// Radius in Karteneinheiten (> 0)
    pub radius_map_units: f64,
    /// Welche Layer teilnehmen
    pub layer_filter_mode: LayerFilterMode,
    /// Wie Treffer mit der bestehenden Selektion kombiniert werden
    pub selection_mode: SelectionMode,
    /// Query-Kreis zur Anzeige bereitstellen
    pub show_query_geometry: bool,
    /// Debounce-Intervall in Millisekunden
    #[serde(default = "default_hover_delay_ms")]
    pub hover_delay_ms: u64,
    /// Ecken der Kreis-Approximation
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            radius_unit: RadiusUnit::Pixels,
            radius_pixels: RADIUS_PIXELS,
            radius_map_units: RADIUS_MAP_UNITS,
            layer_filter_mode: LayerFilterMode::VisibleAndSelectable,
            selection_mode: SelectionMode::Add,
            show_query_geometry: true,
            hover_delay_ms: HOVER_DELAY_MS,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

/// Serde-Default für `hover_delay_ms` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_hover_delay_ms() -> u64 {
    HOVER_DELAY_MS
}

/// Serde-Default für `circle_segments`.
fn default_circle_segments() -> usize {
    CIRCLE_SEGMENTS
}

impl HoverOptions {
    /// Prüft die Wertebereiche. Ungültige Optionen erreichen die Engine nie.
    pub fn validate(&self) -> Result<(), HoverError> {
        if !(RADIUS_PIXELS_MIN..=RADIUS_PIXELS_MAX).contains(&self.radius_pixels) {
            return Err(HoverError::InvalidConfig(format!(
                "radius_pixels muss zwischen {} und {} liegen, ist {}",
                RADIUS_PIXELS_MIN, RADIUS_PIXELS_MAX, self.radius_pixels
            )));
        }
        if !(self.radius_map_units.is_finite() && self.radius_map_units > 0.0) {
            return Err(HoverError::InvalidConfig(format!(
                "radius_map_units muss positiv sein, ist {}",
                self.radius_map_units
            )));
        }
        if !(CIRCLE_SEGMENTS_MIN..=CIRCLE_SEGMENTS_MAX).contains(&self.circle_segments) {
            return Err(HoverError::InvalidConfig(format!(
                "circle_segments muss zwischen {} und {} liegen, ist {}",
                CIRCLE_SEGMENTS_MIN, CIRCLE_SEGMENTS_MAX, self.circle_segments
            )));
        }
        Ok(())
    }

    /// Radius-Einstellung für den Unit-Converter.
    pub fn radius(&self) -> RadiusSetting {
        RadiusSetting {
            unit: self.radius_unit,
            pixels: self.radius_pixels,
            map_units: self.radius_map_units,
        }
    }

    /// Debounce-Intervall als `Duration`.
    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(opts) => match opts.validate() {
                Ok(()) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hover_select"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hover_select.toml")
    }
}
