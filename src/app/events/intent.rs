use std::time::Instant;

use glam::DVec2;

use crate::core::LayerId;
use crate::shared::HoverOptions;

/// Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum HoverIntent {
    /// Werkzeug eingeschaltet
    ActivateRequested,
    /// Werkzeug ausgeschaltet
    DeactivateRequested,
    /// Mauszeiger auf der Karte bewegt (Bildschirm-Pixel)
    PointerMoved { screen_pos: DVec2, at: Instant },
    /// Timer-Tick des Host-Event-Loops
    TimerTick { now: Instant },
    /// Layer wurden zum Projekt hinzugefügt
    LayersAdded { ids: Vec<LayerId> },
    /// Layer wurden aus dem Projekt entfernt
    LayersRemoved { ids: Vec<LayerId> },
    /// Features eines Layers wurden hinzugefügt, gelöscht oder verändert
    LayerFeaturesEdited { id: LayerId },
    /// Sichtbarkeit oder Selektierbarkeit eines Layers geändert
    LayerFlagsChanged { id: LayerId },
    /// Extern aktiver Layer hat gewechselt
    ActiveLayerChanged,
    /// Optionen im Einstellungs-Panel geändert
    OptionsChanged { options: HoverOptions },
    /// Manueller Neuaufbau aller Indizes
    RebuildIndexesRequested,
    /// Selektion aller Layer aufheben
    ClearSelectionRequested,
}
