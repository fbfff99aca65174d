//! Konfiguration des Bogen-Werkzeugs.
//!
//! `ArchToolOptions` wird beim Werkzeugstart gelesen und bleibt danach unverändert.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Segmente ────────────────────────────────────────────────────────

/// Standard-Segmentanzahl des Bogens.
pub const DEFAULT_SEGMENT_COUNT: u32 = 16;
/// Minimale Segmentanzahl.
pub const MIN_SEGMENT_COUNT: u32 = 2;

// ── Extrusion ───────────────────────────────────────────────────────

/// Nach dem Bogen zwei Extrusionsstufen durchlaufen.
pub const DEFAULT_EXTRUDE_ENABLED: bool = true;

// ── Messanzeige ─────────────────────────────────────────────────────

/// Multiplikator für angezeigte Abstände (Meter → Zentimeter).
pub const DEFAULT_MEASUREMENT_SCALE: f64 = 100.0;
/// Einheit hinter dem angezeigten Abstand.
pub const DEFAULT_MEASUREMENT_SUFFIX: &str = " cm";

/// Alle beim Start übergebenen Werkzeug-Optionen.
/// Wird als `three_point_arch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArchToolOptions {
    /// Segmentanzahl beim Start (mindestens 2)
    pub initial_segment_count: u32,
    /// Extrusionsstufen nach dem Bogen aktivieren
    pub extrude_enabled: bool,
    /// Multiplikator für Messwerte
    pub measurement_scale: f64,
    /// Einheit hinter Messwerten
    pub measurement_suffix: String,
}

impl Default for ArchToolOptions {
    fn default() -> Self {
        Self {
            initial_segment_count: DEFAULT_SEGMENT_COUNT,
            extrude_enabled: DEFAULT_EXTRUDE_ENABLED,
            measurement_scale: DEFAULT_MEASUREMENT_SCALE,
            measurement_suffix: DEFAULT_MEASUREMENT_SUFFIX.to_string(),
        }
    }
}

impl ArchToolOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("three_point_arch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("three_point_arch.toml")
    }

    /// Klemmt ungültige Werte auf zulässige Bereiche.
    pub fn sanitized(mut self) -> Self {
        if self.initial_segment_count < MIN_SEGMENT_COUNT {
            log::warn!(
                "initial_segment_count {} unter Minimum, verwende {}",
                self.initial_segment_count,
                MIN_SEGMENT_COUNT
            );
            self.initial_segment_count = MIN_SEGMENT_COUNT;
        }
        if !self.measurement_scale.is_finite() || self.measurement_scale < 0.0 {
            log::warn!(
                "measurement_scale {} ungültig, verwende {}",
                self.measurement_scale,
                DEFAULT_MEASUREMENT_SCALE
            );
            self.measurement_scale = DEFAULT_MEASUREMENT_SCALE;
        }
        self
    }
}
