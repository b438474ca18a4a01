//! HoverIntent- und HoverCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::HoverCommand;
pub use intent::HoverIntent;
