//! Skriptbarer In-Memory-Cursor.

use super::snap_cursor::SnapCursor;
use glam::DVec3;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct CursorState {
    position: DVec3,
    warps: Vec<DVec3>,
}

/// Cursor, dessen Position von außen gesetzt wird. Klone teilen den Zustand.
#[derive(Clone, Default)]
pub struct MemoryCursor {
    state: Rc<RefCell<CursorState>>,
}

impl MemoryCursor {
    pub fn new(position: DVec3) -> Self {
        let cursor = Self::default();
        cursor.set_position(position);
        cursor
    }

    /// Setzt die Position (entspricht einer Mausbewegung des Benutzers).
    pub fn set_position(&self, position: DVec3) {
        self.state.borrow_mut().position = position;
    }

    /// Bisher angeforderte Cursor-Sprünge.
    pub fn warps(&self) -> Vec<DVec3> {
        self.state.borrow().warps.clone()
    }
}

impl SnapCursor for MemoryCursor {
    fn current_position(&self) -> DVec3 {
        self.state.borrow().position
    }

    fn request_warp(&mut self, to: DVec3) {
        let mut state = self.state.borrow_mut();
        state.position = to;
        state.warps.push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warp_moves_cursor_and_is_recorded() {
        let observer = MemoryCursor::new(DVec3::ONE);
        let mut cursor = observer.clone();

        cursor.request_warp(DVec3::new(2.0, 0.0, 0.0));

        assert_eq!(observer.current_position(), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(observer.warps(), vec![DVec3::new(2.0, 0.0, 0.0)]);
    }
}
