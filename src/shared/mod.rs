//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Konsumenten (Renderer,
//! Replay) geteilt werden.

mod display_state;
pub mod options;
mod stage;

pub use display_state::{DisplayState, HelpText, PreviewGeometry};
pub use options::ArchToolOptions;
pub use options::{DEFAULT_SEGMENT_COUNT, MIN_SEGMENT_COUNT};
pub use stage::{Stage, ToolOutcome};
