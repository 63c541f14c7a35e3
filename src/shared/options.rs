//! Zentrale Konfiguration für Kartenfläche und Drag-Measure-Handler.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::events::Modifiers;
use crate::core::{CircleMarkerStyle, OverlayPane, PolylineStyle};
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 5000.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Messung ─────────────────────────────────────────────────────────

/// Farbe von Messlinie und Markern (RGBA: Rot).
pub const MEASURE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Strich-Muster der Messlinie (Strich, Lücke) in Pixeln.
pub const MEASURE_DASH_ARRAY: [f32; 2] = [1.0, 6.0];
/// Linienstärke der Messlinie in Pixeln.
pub const MEASURE_LINE_WEIGHT: f32 = 3.0;
/// Radius der Start-/Endmarker in Pixeln.
pub const MEASURE_MARKER_RADIUS: f32 = 2.0;
/// Klassen-Markierung der Mess-Overlays.
pub const MEASURE_CLASS_NAME: &str = "leaflet-crosshair";

/// Modifier-Taste, die beim Drücken gehalten werden muss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasureModifier {
    #[default]
    Ctrl,
    Shift,
    Alt,
    /// Cmd (macOS) bzw. Ctrl
    Command,
}

impl MeasureModifier {
    /// Ist die Modifier-Taste im Event gehalten?
    pub fn is_held(self, modifiers: &Modifiers) -> bool {
        match self {
            MeasureModifier::Ctrl => modifiers.ctrl,
            MeasureModifier::Shift => modifiers.shift,
            MeasureModifier::Alt => modifiers.alt,
            MeasureModifier::Command => modifiers.command,
        }
    }
}

/// Darstellung und Bedienung des Drag-Measure-Handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureOptions {
    /// Modifier-Taste, die beim Drücken gehalten werden muss
    pub modifier: MeasureModifier,
    /// Farbe von Linie und Markern (RGBA)
    pub color: [f32; 4],
    /// Strich-Muster der Linie
    pub dash_array: Vec<f32>,
    /// Linienstärke in Pixeln
    pub line_weight: f32,
    /// Marker-Radius in Pixeln
    pub marker_radius: f32,
    /// Klassen-Markierung für Linie und End-Marker
    pub class_name: String,
    /// Zielebene aller Mess-Overlays
    pub pane: OverlayPane,
    /// Tooltip am End-Marker dauerhaft anzeigen
    pub tooltip_permanent: bool,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            modifier: MeasureModifier::Ctrl,
            color: MEASURE_COLOR,
            dash_array: MEASURE_DASH_ARRAY.to_vec(),
            line_weight: MEASURE_LINE_WEIGHT,
            marker_radius: MEASURE_MARKER_RADIUS,
            class_name: MEASURE_CLASS_NAME.to_string(),
            pane: OverlayPane::Tooltip,
            tooltip_permanent: true,
        }
    }
}

impl MeasureOptions {
    /// Stil der Messlinie (nicht interaktiv).
    pub fn line_style(&self) -> PolylineStyle {
        PolylineStyle {
            color: self.color,
            weight: self.line_weight,
            dash_array: self.dash_array.clone(),
            class_name: Some(self.class_name.clone()),
            pane: self.pane,
            interactive: false,
        }
    }

    /// Stil des Start-Markers (ohne Klassen-Markierung).
    pub fn start_marker_style(&self) -> CircleMarkerStyle {
        CircleMarkerStyle {
            color: self.color,
            radius: self.marker_radius,
            class_name: None,
            pane: self.pane,
            interactive: false,
        }
    }

    /// Stil des End-Markers.
    pub fn current_marker_style(&self) -> CircleMarkerStyle {
        CircleMarkerStyle {
            class_name: Some(self.class_name.clone()),
            ..self.start_marker_style()
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen einer Kartenfläche.
/// Wird als `map_drag_measure.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Drag-Measure-Handler auf dieser Fläche installieren
    pub drag_measure: bool,
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
    /// Einstellungen des Drag-Measure-Handlers
    pub measure: MeasureOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            drag_measure: true,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            measure: MeasureOptions::default(),
        }
    }
}

impl MapOptions {
    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
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
            .unwrap_or_else(|_| std::path::PathBuf::from("map_drag_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_drag_measure.toml")
    }
}
