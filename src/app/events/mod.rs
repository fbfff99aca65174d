//! ArchIntent- und ArchCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::ArchCommand;
pub use intent::ArchIntent;
