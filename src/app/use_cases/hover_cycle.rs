//! Use-Case: ein Hover-Zyklus nach abgelaufenem Debounce.
//!
//! Ablauf pro Zyklus: Radius auflösen → Query-Kreis bauen → pro Layer
//! projizieren → Index-Kandidaten → exakte Prüfung → Selektionsmodus anwenden
//! → Gesamtzahl an den Status-Reporter melden.

use std::collections::HashSet;

use glam::DVec2;
use indexmap::IndexMap;

use crate::app::state::HoverState;
use crate::app::{eligibility, planner, IndexStore};
use crate::core::{FeatureId, LayerId, LayerInfo, QueryRing, SelectionMode};
use crate::host::{FeatureProvider, HoverHost, LayerRegistry};

/// Ergebnis eines Layers innerhalb eines Zyklus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerOutcome {
    /// Envelope-Kandidaten aus dem Index (Grobfilter)
    pub candidates: Vec<FeatureId>,
    /// Exakt bestätigte Treffer, immer Teilmenge der Kandidaten
    pub matched: HashSet<FeatureId>,
    /// Ob die Selektion des Layers geändert wurde
    pub selection_changed: bool,
}

/// Zusammenfassung eines Hover-Zyklus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverCycleReport {
    /// Verarbeitete Layer in Registry-Reihenfolge
    pub layers: IndexMap<LayerId, LayerOutcome>,
    /// Layer, die in diesem Zyklus übersprungen wurden (KBS-Fehler, kein Index)
    pub skipped: Vec<LayerId>,
    /// Summe der Treffer über alle verarbeiteten Layer
    pub total_matched: usize,
}

/// Führt einen vollständigen Hover-Zyklus an der Bildschirmposition aus.
pub fn run_hover_cycle(
    state: &mut HoverState,
    host: &mut HoverHost<'_>,
    screen_pos: DVec2,
) -> HoverCycleReport {
    let mut report = HoverCycleReport::default();

    let map_pos = host.map.to_map_coordinates(screen_pos);
    let radius = state
        .options
        .radius()
        .resolve(host.map.map_units_per_pixel());
    if !(radius.is_finite() && radius > 0.0) {
        log::warn!("Ungültiger Query-Radius {}, Zyklus übersprungen", radius);
        state.last_query = None;
        return report;
    }

    let query = planner::plan(map_pos, radius, state.options.circle_segments);
    let map_crs = host.map.crs();
    let active = host.layers.active_layer();
    let layers = eligibility::eligible_layers(
        host.layers.layers(),
        state.options.layer_filter_mode,
        active.as_ref(),
    );

    // Aktiver Layer kann ohne explizites Event wechseln: Geltungsbereich pro Zyklus nachziehen
    let in_scope: HashSet<LayerId> = layers.iter().map(|l| l.id.clone()).collect();
    state.index_store.retain_scope(&in_scope);

    for layer in &layers {
        let ring = match planner::project(&query, &map_crs, &layer.crs, host.crs) {
            Ok(ring) => ring,
            Err(e) => {
                log::warn!("Layer {} in diesem Zyklus übersprungen: {}", layer.name, e);
                report.skipped.push(layer.id.clone());
                continue;
            }
        };

        let Some(mut outcome) = collect_matches(&mut state.index_store, &*host.layers, layer, &ring)
        else {
            report.skipped.push(layer.id.clone());
            continue;
        };

        outcome.selection_changed = apply_selection(
            &mut *host.layers,
            &layer.id,
            &outcome.matched,
            state.options.selection_mode,
        );
        report.total_matched += outcome.matched.len();
        report.layers.insert(layer.id.clone(), outcome);
    }

    host.status.features_selected(report.total_matched);
    state.last_query = state.options.show_query_geometry.then_some(query);
    report
}

/// Kandidaten aus dem Index holen und exakt bestätigen.
fn collect_matches(
    store: &mut IndexStore,
    registry: &dyn LayerRegistry,
    layer: &LayerInfo,
    ring: &QueryRing,
) -> Option<LayerOutcome> {
    let provider = registry.provider(&layer.id)?;
    let entry = store.fresh(layer, provider)?;
    let candidates = entry.index.intersecting(ring.envelope());
    let matched = confirm_candidates(provider, layer, &candidates, ring);

    Some(LayerOutcome {
        candidates,
        matched,
        selection_changed: false,
    })
}

/// Exakte Schnittprüfung der Envelope-Kandidaten gegen den Query-Ring.
///
/// Features, die nicht mehr existieren oder nicht lesbar sind, fallen heraus.
pub fn confirm_candidates(
    provider: &dyn FeatureProvider,
    layer: &LayerInfo,
    candidates: &[FeatureId],
    ring: &QueryRing,
) -> HashSet<FeatureId> {
    candidates
        .iter()
        .copied()
        .filter(|&id| match provider.geometry(id) {
            Ok(Some(geometry)) => geometry.intersects(ring),
            Ok(None) => false,
            Err(e) => {
                log::debug!("Feature {} von Layer {} übersprungen: {}", id, layer.name, e);
                false
            }
        })
        .collect()
}

/// Wendet den Selektionsmodus auf die Selektion eines Layers an.
///
/// Gibt `true` zurück, wenn die Selektion geschrieben wurde.
pub fn apply_selection(
    registry: &mut dyn LayerRegistry,
    layer: &LayerId,
    matched: &HashSet<FeatureId>,
    mode: SelectionMode,
) -> bool {
    let Some(sink) = registry.selection_mut(layer) else {
        return false;
    };

    let current = sink.selected_ids();
    match mode.combine(&current, matched) {
        Some(next) if next != current => {
            sink.set_selected_ids(next);
            true
        }
        _ => false,
    }
}
