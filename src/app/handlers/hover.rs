//! Handler für Mausbewegung und fällige Hover-Abfragen.

use std::time::Instant;

use glam::DVec2;

use crate::app::{use_cases, HoverState};
use crate::host::HoverHost;

/// Übergibt eine Mausbewegung an das Debounce-Gate.
pub fn record_motion(state: &mut HoverState, screen_pos: DVec2, at: Instant) {
    state.debounce.on_motion(screen_pos, at);
}

/// Führt einen Hover-Zyklus aus, wenn das Debounce-Gate abgelaufen ist.
pub fn run_due_query(state: &mut HoverState, host: &mut HoverHost<'_>, now: Instant) {
    let Some(screen_pos) = state.debounce.poll(now) else {
        return;
    };

    let report = use_cases::run_hover_cycle(state, host, screen_pos);
    state.status_message = (report.total_matched > 0)
        .then(|| format!("{} Feature(s) selektiert", report.total_matched));
    state.last_report = Some(report);
}
