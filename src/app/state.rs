//! Zustand einer Hover-Engine-Instanz.

use std::time::Instant;

use super::use_cases::HoverCycleReport;
use super::{CommandLog, DebounceGate, IndexStore};
use crate::core::QueryGeometry;
use crate::shared::HoverOptions;

/// Hauptzustand der Hover-Engine
pub struct HoverState {
    /// Laufzeit-Optionen (Radius, Modi, Feedback)
    pub options: HoverOptions,
    /// Ob die Engine aktiv ist und Bewegungen verarbeitet
    pub active: bool,
    /// Debounce-Gate für Mausbewegungen
    pub debounce: DebounceGate,
    /// Spatial-Indizes der teilnehmenden Layer
    pub index_store: IndexStore,
    /// Zuletzt verwendeter Query-Kreis (nur bei aktivem visuellen Feedback)
    pub last_query: Option<QueryGeometry>,
    /// Ergebnis des letzten Hover-Zyklus
    pub last_report: Option<HoverCycleReport>,
    /// Kurzmeldung für die Statuszeile des Hosts
    pub status_message: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl HoverState {
    /// Erstellt einen inaktiven Zustand mit den übergebenen Optionen.
    pub fn new(options: HoverOptions) -> Self {
        Self {
            debounce: DebounceGate::new(options.hover_delay()),
            options,
            active: false,
            index_store: IndexStore::new(),
            last_query: None,
            last_report: None,
            status_message: None,
            command_log: CommandLog::new(),
        }
    }

    /// Deadline des laufenden Debounce-Timers (für das Host-Event-Loop).
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }

    /// Cursor-Radius in Pixeln für den aktuellen Maßstab.
    pub fn cursor_radius_px(&self, map_units_per_pixel: f64) -> u32 {
        self.options.radius().cursor_radius_px(map_units_per_pixel)
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(HoverOptions::default())
    }
}
