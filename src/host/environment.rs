//! Ansichts- und Werkzeug-Einstellungen des Hosts samt Sicherung/Wiederherstellung.
//!
//! [`EnvironmentGuard`] sichert die Einstellungen beim Werkzeugstart, setzt
//! die Werkzeug-Standards und stellt beim Verlassen (Abschluss, Abbruch,
//! Fehler oder Drop) genau einmal den Ursprungszustand her.

use glam::DVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapElement {
    Increment,
    Vertex,
    Edge,
    Face,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapTarget {
    Closest,
    Center,
    Median,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotPoint {
    BoundingBoxCenter,
    Cursor,
    IndividualOrigins,
    MedianPoint,
    ActiveElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Global,
    Local,
    Normal,
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMode {
    Vertex,
    Edge,
    Face,
}

/// Schnappschuss der vom Werkzeug veränderten Host-Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub snapping: bool,
    pub snap_element: SnapElement,
    pub snap_target: SnapTarget,
    pub pivot: PivotPoint,
    pub orientation: Orientation,
    pub show_gizmo: bool,
    pub cursor_location: DVec3,
    pub select_mode: SelectMode,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            snapping: false,
            snap_element: SnapElement::Increment,
            snap_target: SnapTarget::Closest,
            pivot: PivotPoint::MedianPoint,
            orientation: Orientation::Global,
            show_gizmo: true,
            cursor_location: DVec3::ZERO,
            select_mode: SelectMode::Vertex,
        }
    }
}

impl ViewSettings {
    /// Werkzeug-Standards beim Start; Cursor-Position bleibt erhalten.
    pub fn tool_defaults(cursor_location: DVec3) -> Self {
        Self {
            snapping: false,
            snap_element: SnapElement::Vertex,
            snap_target: SnapTarget::Closest,
            pivot: PivotPoint::ActiveElement,
            orientation: Orientation::Global,
            show_gizmo: false,
            cursor_location,
            select_mode: SelectMode::Vertex,
        }
    }
}

/// Zugriff auf die Host-Einstellungen.
pub trait ToolEnvironment {
    fn capture(&self) -> ViewSettings;
    fn apply(&mut self, settings: &ViewSettings) -> anyhow::Result<()>;
}

/// Gesicherte Einstellungen mit garantierter Wiederherstellung.
pub struct EnvironmentGuard {
    env: Box<dyn ToolEnvironment>,
    backup: ViewSettings,
    restored: bool,
}

impl EnvironmentGuard {
    /// Sichert den aktuellen Zustand und setzt die Werkzeug-Standards.
    pub fn acquire(mut env: Box<dyn ToolEnvironment>) -> anyhow::Result<Self> {
        let backup = env.capture();
        env.apply(&ViewSettings::tool_defaults(backup.cursor_location))?;
        log::debug!("Host-Einstellungen gesichert: {:?}", backup);
        Ok(Self {
            env,
            backup,
            restored: false,
        })
    }

    /// Ändert die aktuellen Einstellungen über `f`.
    pub fn update(&mut self, f: impl FnOnce(&mut ViewSettings)) -> anyhow::Result<()> {
        let mut settings = self.env.capture();
        f(&mut settings);
        self.env.apply(&settings)
    }

    /// Stellt die gesicherten Einstellungen wieder her (nur bis zum ersten Erfolg).
    pub fn restore(&mut self) -> anyhow::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.env.apply(&self.backup)?;
        self.restored = true;
        log::debug!("Host-Einstellungen wiederhergestellt");
        Ok(())
    }
}

impl Drop for EnvironmentGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Host-Einstellungen konnten nicht wiederhergestellt werden: {:#}", e);
        }
    }
}
