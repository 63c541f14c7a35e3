//! Schnittstelle zur Kartenfläche: Koordinaten, Overlays, Cursor- und Drag-Schalter.

use crate::core::{CircleMarkerStyle, GeoPoint, OverlayId, PolylineStyle, Tooltip};
use glam::Vec2;

/// Cursor-Darstellung über der Interaktionsfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
}

/// Fähigkeiten der Kartenfläche, die Interaktions-Handler konsumieren.
///
/// Die Fläche besitzt die gerenderten Overlay-Objekte; Handler halten
/// nur `OverlayId`s und müssen jedes erzeugte Overlay explizit entfernen.
pub trait MapSurface {
    /// Rechnet eine Zeigerposition (Fläche-lokal, Pixel) in eine Geo-Koordinate um.
    fn pointer_to_geo(&self, screen_pos: Vec2) -> GeoPoint;

    /// Großkreis-Distanz in Metern (Default: Haversine auf der Kugel-Erde).
    fn distance_meters(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        from.distance_to(to)
    }

    /// Erzeugt eine Linie zwischen den Punkten.
    fn add_polyline(&mut self, points: &[GeoPoint], style: &PolylineStyle) -> OverlayId;

    /// Erzeugt einen Kreismarker, optional mit Tooltip.
    fn add_circle_marker(
        &mut self,
        center: GeoPoint,
        style: &CircleMarkerStyle,
        tooltip: Option<Tooltip>,
    ) -> OverlayId;

    /// Entfernt ein Overlay. Unbekannte IDs müssen ein No-op sein.
    fn remove_overlay(&mut self, id: OverlayId);

    /// Text-Selektion im Dokument erlauben/sperren.
    fn set_text_selection(&mut self, enabled: bool);

    /// Natives Bild-Drag im Dokument erlauben/sperren.
    fn set_image_drag(&mut self, enabled: bool);

    /// Eigenes Pan-Dragging der Karte erlauben/sperren.
    fn set_map_dragging(&mut self, enabled: bool);

    /// Cursor über der Interaktionsfläche setzen.
    fn set_cursor(&mut self, cursor: CursorStyle);
}
