//! Core-Domäne: Sehne, Kreisbogen-Solver, Sitzungszustand, Abtastung und Messung.

pub mod arc_sampling;
/// Drei-Punkt-Kreisbogen-Solver
///
/// Reine Funktionen ohne Zustand:
/// - `solve_arch`: Kreisparameter aus Sehne und Probe-Punkt
/// - `select_center`: Seitenwahl des Kreismittelpunkts
pub mod arch_solver;
pub mod chord;
pub mod measurement;
pub mod session;

pub use arc_sampling::{arc_apex, sample_arc, sweep_points};
pub use arch_solver::{solve_arch, SolverResult};
pub use chord::{ArchChord, POINT_EPSILON};
pub use measurement::{measure, Measurement};
pub use session::{ArchSession, CommittedArc, Preview, SessionError, MAX_POINTS};
