//! Geteilte Typen: Laufzeit-Optionen und deren Standardwerte.

pub mod options;

pub use options::HoverOptions;
pub use options::{CIRCLE_SEGMENTS, HOVER_DELAY_MS};
