//! In-Memory-Host-Einstellungen.

use super::environment::{ToolEnvironment, ViewSettings};
use anyhow::bail;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct EnvironmentState {
    settings: ViewSettings,
    applied: Vec<ViewSettings>,
    fail_next_apply: bool,
}

/// Speichert [`ViewSettings`] im Speicher. Klone teilen den Zustand.
#[derive(Clone, Default)]
pub struct MemoryEnvironment {
    state: Rc<RefCell<EnvironmentState>>,
}

impl MemoryEnvironment {
    pub fn new(settings: ViewSettings) -> Self {
        let env = Self::default();
        env.state.borrow_mut().settings = settings;
        env
    }

    pub fn settings(&self) -> ViewSettings {
        self.state.borrow().settings
    }

    /// Alle angewendeten Einstellungen in Reihenfolge.
    pub fn applied(&self) -> Vec<ViewSettings> {
        self.state.borrow().applied.clone()
    }

    /// Lässt das nächste `apply` fehlschlagen.
    pub fn fail_next_apply(&self) {
        self.state.borrow_mut().fail_next_apply = true;
    }
}

impl ToolEnvironment for MemoryEnvironment {
    fn capture(&self) -> ViewSettings {
        self.state.borrow().settings
    }

    fn apply(&mut self, settings: &ViewSettings) -> anyhow::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_apply {
            state.fail_next_apply = false;
            bail!("Host hat Einstellungen abgelehnt");
        }
        state.settings = *settings;
        state.applied.push(*settings);
        Ok(())
    }
}
