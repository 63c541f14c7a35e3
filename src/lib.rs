//! Map Drag-Measure.
//!
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung:
//! Geodäsie, Overlay-Modell, Handler-Registry und das Drag-to-Measure-Werkzeug.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    DragMeasure, EventResponse, EventTarget, HandlerContext, HandlerRegistry,
    InteractionHandler, MapEvent, MapSurface, MapView, MeasureState, Measurement,
    MeasurementLabel, TickScheduler,
};
pub use core::{GeoPoint, MapCamera, OverlayLayer};
pub use shared::{MapOptions, MeasureModifier, MeasureOptions};
