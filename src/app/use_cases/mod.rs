//! Use-Case-Funktionen der Hover-Selektion.
//!
//! - `hover_cycle`: Abfrage und Selektion nach abgelaufenem Debounce
//! - `clear_selection`: Selektion aller Layer aufheben

mod clear_selection;
mod hover_cycle;

pub use clear_selection::clear_all_selections;
pub use hover_cycle::{
    apply_selection, confirm_candidates, run_hover_cycle, HoverCycleReport, LayerOutcome,
};
