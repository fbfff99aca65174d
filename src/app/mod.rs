//! Application-Layer: Zustandsmaschine mit Controller, State, Events und Handlern.

pub mod command_log;
pub mod controller;
mod display;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Zustand eines Werkzeug-Laufs
///
/// Stufe, Pause-Flag, Segmentanzahl, Sitzung und Host-Handles.
pub mod state;
pub mod tool;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::ArchController;
pub use display::help_text;
pub use events::{ArchCommand, ArchIntent};
pub use state::{ArchToolState, GuidePoint};
pub use tool::ArchTool;
