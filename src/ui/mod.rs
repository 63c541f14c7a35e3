//! UI-Module für das Demo-Fenster (egui).

pub mod input;
pub mod overlay_painter;
pub mod status;
pub mod surface;

pub use input::collect_map_events;
pub use overlay_painter::{draw_graticule, draw_overlays};
pub use status::render_status_bar;
pub use surface::ViewportSurface;
