//! Viewport-Fläche des Demo-Hosts: hält Kamera, Overlays und die Interaktions-Schalter.

use crate::app::{CursorStyle, MapSurface};
use crate::core::{
    CircleMarkerStyle, GeoPoint, MapCamera, Overlay, OverlayId, OverlayLayer, PolylineStyle,
    Tooltip,
};
use glam::Vec2;

/// Zustand der Kartenfläche, wie ihn Handler über `MapSurface` sehen.
///
/// Reine Daten ohne egui-Abhängigkeit; das Zeichnen übernimmt `overlay_painter`.
#[derive(Debug)]
pub struct ViewportSurface {
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    pub overlays: OverlayLayer,
    pub cursor: CursorStyle,
    /// Kamera-Pan per Drag erlaubt
    pub map_dragging: bool,
    pub text_selection: bool,
    pub image_drag: bool,
}

impl ViewportSurface {
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            camera: MapCamera::new(),
            viewport_size,
            overlays: OverlayLayer::new(),
            cursor: CursorStyle::Default,
            map_dragging: true,
            text_selection: true,
            image_drag: true,
        }
    }

    /// Projiziert eine Geo-Koordinate in viewport-lokale Pixel.
    pub fn geo_to_screen(&self, point: GeoPoint) -> Vec2 {
        self.camera.geo_to_screen(point, self.viewport_size)
    }
}

impl Default for ViewportSurface {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}

impl MapSurface for ViewportSurface {
    fn pointer_to_geo(&self, screen_pos: Vec2) -> GeoPoint {
        self.camera.screen_to_geo(screen_pos, self.viewport_size)
    }

    fn add_polyline(&mut self, points: &[GeoPoint], style: &PolylineStyle) -> OverlayId {
        self.overlays.insert(Overlay::Polyline {
            points: points.to_vec(),
            style: style.clone(),
        })
    }

    fn add_circle_marker(
        &mut self,
        center: GeoPoint,
        style: &CircleMarkerStyle,
        tooltip: Option<Tooltip>,
    ) -> OverlayId {
        self.overlays.insert(Overlay::CircleMarker {
            center,
            style: style.clone(),
            tooltip,
        })
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        if self.overlays.remove(id).is_none() {
            log::debug!("Overlay {:?} war bereits entfernt", id);
        }
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }

    fn set_image_drag(&mut self, enabled: bool) {
        self.image_drag = enabled;
    }

    fn set_map_dragging(&mut self, enabled: bool) {
        self.map_dragging = enabled;
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}
