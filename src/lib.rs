//! Drei-Punkt-Bogen Library.
//! Solver, Sitzung und Stufen-Zustandsmaschine als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod host;
pub mod replay;
pub mod shared;

pub use app::{ArchCommand, ArchController, ArchIntent, ArchTool, ArchToolState};
pub use core::{
    solve_arch, ArchChord, ArchSession, CommittedArc, Measurement, SessionError, SolverResult,
};
pub use host::{
    MemoryCursor, MemoryEnvironment, MemoryMeshBackend, MeshBackend, MeshHandle, SnapCursor,
    ToolEnvironment, ViewSettings,
};
pub use shared::{ArchToolOptions, DisplayState, Stage, ToolOutcome};
