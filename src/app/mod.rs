//! Application-Layer: Controller, State, Events und Use-Cases der Hover-Engine.

pub mod command_log;
pub mod controller;
pub mod debounce;
pub mod eligibility;
pub mod events;
pub mod handlers;
pub mod index_store;
mod intent_mapping;
pub mod planner;
/// Zustand einer Engine-Instanz (Optionen, Debounce, Indizes, letzter Zyklus)
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::HoverController;
pub use debounce::{DebounceGate, DebounceState};
pub use events::{HoverCommand, HoverIntent};
pub use index_store::{IndexStore, LayerIndexEntry};
pub use state::HoverState;
pub use use_cases::{HoverCycleReport, LayerOutcome};
