//! Geodätische Grundfunktionen auf einer Kugel-Erde: Anfangspeilung und Großkreis-Distanz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mittlerer Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Meter pro Seemeile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Geographische Koordinate in Grad (WGS84-Winkel, Kugelmodell).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad (Nord positiv)
    pub lat: f64,
    /// Längengrad in Grad (Ost positiv)
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt aus Breite/Länge in Grad.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Anfangspeilung von `self` zu `other` in Grad `[0, 360)`.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        bearing(self, other)
    }

    /// Großkreis-Distanz von `self` zu `other` in Metern.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        distance_meters(self, other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Anfangspeilung (Forward-Azimut) von `from` nach `to` in Grad `[0, 360)`.
///
/// Identische oder antipodale Punkte liefern einen endlichen, aber
/// mathematisch beliebigen Wert (0 bzw. 180) – kein Sonderfall.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    // atan2 liefert (-180, 180] → auf [0, 360) normieren
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Großkreis-Distanz (Haversine) zwischen zwei Punkten in Metern.
pub fn distance_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Rechnet Meter in Seemeilen um.
pub fn meters_to_nautical_miles(meters: f64) -> f64 {
    meters / METERS_PER_NAUTICAL_MILE
}
