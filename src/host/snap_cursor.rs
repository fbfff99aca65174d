//! Schnittstelle zum 3D-Cursor / Snapping des Hosts.

use glam::DVec3;

/// Liefert die aktuelle (ggf. gesnappte) Cursor-Position.
pub trait SnapCursor {
    fn current_position(&self) -> DVec3;

    /// Bittet den Host, den Cursor auf `to` zu setzen.
    fn request_warp(&mut self, to: DVec3);
}
