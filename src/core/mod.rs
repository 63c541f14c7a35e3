//! Core-Domänentypen: Geo-Koordinaten, Geodäsie, Kartenkamera, Overlay-Primitive.

pub mod camera;
pub mod geo;
pub mod overlay;

pub use camera::MapCamera;
pub use geo::{
    bearing, distance_meters, meters_to_nautical_miles, GeoPoint, EARTH_RADIUS_M,
    METERS_PER_NAUTICAL_MILE,
};
pub use overlay::{
    CircleMarkerStyle, Overlay, OverlayId, OverlayLayer, OverlayPane, PolylineStyle, Tooltip,
};
