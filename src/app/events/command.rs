use std::time::Instant;

use glam::DVec2;

use crate::core::LayerId;
use crate::shared::HoverOptions;

/// Mutierende Commands auf den HoverState.
#[derive(Debug, Clone)]
pub enum HoverCommand {
    /// Engine aktivieren und Indizes aufbauen
    Activate,
    /// Timer verwerfen, Zustand und Indizes freigeben
    Deactivate,
    /// Position an das Debounce-Gate übergeben
    RecordMotion { screen_pos: DVec2, at: Instant },
    /// Hover-Zyklus ausführen, falls das Debounce-Gate abgelaufen ist
    RunDueQuery { now: Instant },
    /// Index eines Layers als veraltet markieren
    InvalidateLayer { id: LayerId },
    /// Index eines entfernten Layers freigeben
    DropLayer { id: LayerId },
    /// Index-Umfang an den aktuellen Filtermodus anpassen
    RescopeIndexes,
    /// Neue Optionen übernehmen
    ApplyOptions { options: HoverOptions },
    /// Alle Indizes sofort neu aufbauen
    RebuildAllIndexes,
    /// Selektion aller Vektor-Layer leeren
    ClearAllSelections,
}
