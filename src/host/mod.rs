//! Host-Schnittstellen (Mesh-Backend, Cursor, Umgebung) und In-Memory-Implementierungen.

pub mod environment;
pub mod memory_backend;
pub mod memory_cursor;
pub mod memory_environment;
pub mod mesh_backend;
pub mod snap_cursor;
mod tool_host;

pub use environment::{
    EnvironmentGuard, Orientation, PivotPoint, SelectMode, SnapElement, SnapTarget,
    ToolEnvironment, ViewSettings,
};
pub use memory_backend::{BackendCall, BackendOp, ExtrudeSettings, MemoryMeshBackend, MeshData};
pub use memory_cursor::MemoryCursor;
pub use memory_environment::MemoryEnvironment;
pub use mesh_backend::{Adjustment, ArcBuildParams, MeshBackend, MeshHandle};
pub use snap_cursor::SnapCursor;
pub use tool_host::ToolHost;
