//! Messergebnis und Tooltip-Beschriftung (Peilung in Grad, Distanz in Seemeilen).

use crate::core::{meters_to_nautical_miles, GeoPoint};
use std::fmt;

/// Ergebnis einer Messung zwischen Start- und aktuellem Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Großkreis-Distanz in Metern
    pub distance_m: f64,
    /// Anfangspeilung in Grad `[0, 360)`
    pub bearing_deg: f64,
}

impl Measurement {
    /// Erstellt eine Messung; die Distanz stammt vom Host-Primitiv der Fläche.
    pub fn new(start: GeoPoint, end: GeoPoint, distance_m: f64) -> Self {
        Self {
            start,
            end,
            distance_m,
            bearing_deg: start.bearing_to(end),
        }
    }

    /// Distanz in Seemeilen.
    pub fn distance_nm(&self) -> f64 {
        meters_to_nautical_miles(self.distance_m)
    }

    /// Anzeigetexte: Distanz mit 2, Peilung mit 0 Nachkommastellen.
    ///
    /// Halbe Stellen runden aufwärts (0.125 → "0.13"), nicht zur geraden Ziffer.
    pub fn label(&self) -> MeasurementLabel {
        MeasurementLabel {
            bearing: format!("{:.0}", self.bearing_deg.round()),
            distance: format!("{:.2}", (self.distance_nm() * 100.0).round() / 100.0),
        }
    }
}

/// Zweizeilige Beschriftung einer Messung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementLabel {
    /// Peilung als ganze Grad
    pub bearing: String,
    /// Distanz in Seemeilen mit 2 Nachkommastellen
    pub distance: String,
}

impl fmt::Display for MeasurementLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bearing: {}\nDistance: {} NM", self.bearing, self.distance)
    }
}
