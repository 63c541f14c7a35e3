//! Equirektangulare Kartenkamera für Pan und Zoom.

use super::GeoPoint;
use glam::{DVec2, Vec2};

/// Kartenkamera mit Pan und Zoom (Plate-Carrée-Projektion, Grad pro Pixel linear)
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kartenmitte als (Länge, Breite) in Grad
    pub center: DVec2,
    /// Zoom-Level (1.0 = ganze Erde in der Höhe sichtbar)
    pub zoom: f64,
}

impl MapCamera {
    /// Sichtbare halbe Kartenhöhe in Grad bei Zoom 1.0.
    pub const BASE_DEGREE_EXTENT: f64 = 90.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.5;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 5000.0;

    /// Erstellt eine neue Kamera mit Blick auf (0°, 0°)
    pub fn new() -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = DVec2::new(target.lng, target.lat);
        self.clamp_center();
    }

    /// Verschiebt die Kamera um ein Delta in Bildschirm-Pixeln (Pan).
    ///
    /// Positives Pixel-Delta zieht die Karte mit dem Zeiger, die Mitte
    /// wandert also in die Gegenrichtung.
    pub fn pan_pixels(&mut self, delta_px: Vec2, viewport_height: f32) {
        let dpp = self.degrees_per_pixel(viewport_height);
        self.center.x -= f64::from(delta_px.x) * dpp;
        self.center.y += f64::from(delta_px.y) * dpp;
        self.clamp_center();
    }

    /// Ändert den Zoom-Level innerhalb der übergebenen Grenzen
    pub fn zoom_by(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Grad.
    pub fn degrees_per_pixel(&self, viewport_height: f32) -> f64 {
        let vh = f64::from(viewport_height.max(1.0));
        2.0 * Self::BASE_DEGREE_EXTENT / (self.zoom * vh)
    }

    /// Konvertiert viewport-lokale Screen-Koordinaten zu einer Geo-Koordinate.
    /// Screen-Y wächst nach unten, Breite nach oben.
    pub fn screen_to_geo(&self, screen_pos: Vec2, screen_size: Vec2) -> GeoPoint {
        let dpp = self.degrees_per_pixel(screen_size.y);
        let offset = (screen_pos - screen_size * 0.5).as_dvec2() * dpp;
        GeoPoint::new(
            (self.center.y - offset.y).clamp(-90.0, 90.0),
            self.center.x + offset.x,
        )
    }

    /// Konvertiert eine Geo-Koordinate zu viewport-lokalen Screen-Koordinaten.
    pub fn geo_to_screen(&self, point: GeoPoint, screen_size: Vec2) -> Vec2 {
        let dpp = self.degrees_per_pixel(screen_size.y);
        let offset = DVec2::new(point.lng - self.center.x, self.center.y - point.lat) / dpp;
        screen_size * 0.5 + offset.as_vec2()
    }

    fn clamp_center(&mut self) {
        self.center.y = self.center.y.clamp(-90.0, 90.0);
        self.center.x = self.center.x.clamp(-540.0, 540.0);
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}
