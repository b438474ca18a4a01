//! Feature-Handler für die Command-Verarbeitung.
//!
//! Jedes Submodul gruppiert thematisch zusammengehörige Command-Handler.
//! Der Controller dispatcht hierher statt die Logik inline zu halten.

pub mod hover;
pub mod layers;
pub mod lifecycle;
pub mod options;
pub mod selection;
