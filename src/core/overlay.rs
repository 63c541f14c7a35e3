//! Overlay-Primitive (Linie, Kreismarker, Tooltip) und ihr geordneter Speicher.

use super::GeoPoint;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque Referenz auf ein gerendertes Overlay-Objekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Zeichenebene eines Overlays (bestimmt die Z-Reihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayPane {
    /// Standard-Overlay-Ebene (unter Tooltips)
    Overlay,
    /// Tooltip-Ebene (zuoberst)
    #[default]
    Tooltip,
}

/// Darstellung einer Polylinie.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// Strich-Muster (Strich, Lücke, …) in Pixeln; leer = durchgezogen
    pub dash_array: Vec<f32>,
    /// CSS-artige Klassen-Markierung für Host-Styling
    pub class_name: Option<String>,
    /// Zielebene
    pub pane: OverlayPane,
    /// Reagiert das Overlay auf Zeiger-Events?
    pub interactive: bool,
}

/// Darstellung eines Kreismarkers.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarkerStyle {
    /// Randfarbe (RGBA)
    pub color: [f32; 4],
    /// Radius in Pixeln
    pub radius: f32,
    pub class_name: Option<String>,
    pub pane: OverlayPane,
    pub interactive: bool,
}

/// Tooltip an einem Marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Anzeigetext, Zeilen durch `\n` getrennt
    pub text: String,
    /// Dauerhaft geöffnet (nicht nur bei Hover)
    pub permanent: bool,
}

/// Ein vom Host gerendertes Overlay-Objekt.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Polyline {
        points: Vec<GeoPoint>,
        style: PolylineStyle,
    },
    CircleMarker {
        center: GeoPoint,
        style: CircleMarkerStyle,
        tooltip: Option<Tooltip>,
    },
}

impl Overlay {
    /// Zeichenebene des Overlays.
    pub fn pane(&self) -> OverlayPane {
        match self {
            Overlay::Polyline { style, .. } => style.pane,
            Overlay::CircleMarker { style, .. } => style.pane,
        }
    }
}

/// Geordneter Speicher aller aktuell sichtbaren Overlays.
///
/// Einfügereihenfolge = Zeichenreihenfolge; IDs werden nie wiederverwendet.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    overlays: IndexMap<OverlayId, Overlay>,
    next_id: u64,
}

impl OverlayLayer {
    /// Erstellt einen leeren Overlay-Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Overlay hinzu und gibt dessen Handle zurück.
    pub fn insert(&mut self, overlay: Overlay) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.overlays.insert(id, overlay);
        id
    }

    /// Entfernt ein Overlay. Unbekannte IDs sind ein No-op.
    pub fn remove(&mut self, id: OverlayId) -> Option<Overlay> {
        self.overlays.shift_remove(&id)
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.overlays.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Iteriert in Zeichenreihenfolge über alle Overlays.
    pub fn iter(&self) -> impl Iterator<Item = (OverlayId, &Overlay)> {
        self.overlays.iter().map(|(id, overlay)| (*id, overlay))
    }

    /// Anzahl sichtbarer Polylinien.
    pub fn polyline_count(&self) -> usize {
        self.overlays
            .values()
            .filter(|o| matches!(o, Overlay::Polyline { .. }))
            .count()
    }

    /// Anzahl sichtbarer Kreismarker.
    pub fn marker_count(&self) -> usize {
        self.overlays
            .values()
            .filter(|o| matches!(o, Overlay::CircleMarker { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(lat: f64) -> Overlay {
        Overlay::CircleMarker {
            center: GeoPoint::new(lat, 0.0),
            style: CircleMarkerStyle {
                color: [1.0, 0.0, 0.0, 1.0],
                radius: 2.0,
                class_name: None,
                pane: OverlayPane::Tooltip,
                interactive: false,
            },
            tooltip: None,
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let mut layer = OverlayLayer::new();
        let a = layer.insert(marker(1.0));
        let b = layer.insert(marker(2.0));
        assert_ne!(a, b);
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.marker_count(), 2);
        assert_eq!(layer.polyline_count(), 0);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut layer = OverlayLayer::new();
        let id = layer.insert(marker(1.0));
        assert!(layer.remove(id).is_some());
        assert!(layer.remove(id).is_none());
        assert!(layer.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut layer = OverlayLayer::new();
        let first = layer.insert(marker(1.0));
        layer.remove(first);
        let second = layer.insert(marker(1.0));
        assert_ne!(first, second);
    }

    #[test]
    fn test_iteration_keeps_insert_order() {
        let mut layer = OverlayLayer::new();
        let a = layer.insert(marker(1.0));
        let b = layer.insert(marker(2.0));
        let c = layer.insert(marker(3.0));
        layer.remove(b);
        let order: Vec<_> = layer.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, c]);
    }
}
