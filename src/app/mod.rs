//! Application-Layer: Host-Events, Kollaborateur-Schnittstellen, Handler und Kartenfläche.

pub mod drag_measure;
pub mod events;
pub mod handler;
pub mod listeners;
pub mod map_view;
pub mod scheduler;
pub mod surface;

pub use drag_measure::{
    DragMeasure, MeasureState, Measurement, MeasurementLabel, MeasurementSession, OverlayHandles,
    PressOutcome,
};
pub use events::{
    EventKind, EventResponse, EventTarget, KeyEvent, MapEvent, Modifiers, PointerEvent,
    KEY_ESCAPE,
};
pub use handler::{HandlerContext, HandlerRegistry, InteractionHandler};
pub use listeners::{ListenerId, ListenerTable};
pub use map_view::MapView;
pub use scheduler::{Scheduler, TickScheduler, TimerHandle};
pub use surface::{CursorStyle, MapSurface};
