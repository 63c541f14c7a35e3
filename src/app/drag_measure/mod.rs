//! Drag-Measure-Handler: Modifier + Ziehen zeigt Peilung und Großkreis-Distanz.
//!
//! Aufgeteilt in:
//! - `state`: Sitzung, Overlay-Handles, beobachtbarer Zustand
//! - `lifecycle`: Übergänge (Press, Move, Release, Escape, Finish, Reset, Entladen)
//! - `label`: Messergebnis und Tooltip-Text

mod label;
mod lifecycle;
mod state;

pub use label::{Measurement, MeasurementLabel};
pub use state::{DragMeasure, MeasureState, MeasurementSession, OverlayHandles, PressOutcome};

use super::events::{EventResponse, MapEvent, KEY_ESCAPE};
use super::handler::{HandlerContext, InteractionHandler};
use super::scheduler::TimerHandle;
use std::any::Any;

/// Registry-Name des Handlers.
pub const HANDLER_NAME: &str = "dragMeasure";

impl InteractionHandler for DragMeasure {
    fn name(&self) -> &str {
        HANDLER_NAME
    }

    fn add_hooks(&mut self, ctx: &mut HandlerContext<'_>) {
        self.install_hooks(ctx);
    }

    fn remove_hooks(&mut self, ctx: &mut HandlerContext<'_>) {
        self.uninstall_hooks(ctx);
    }

    fn handle_event(&mut self, event: &MapEvent, ctx: &mut HandlerContext<'_>) -> EventResponse {
        match event {
            MapEvent::MouseDown(pointer) => match self.press(pointer, ctx) {
                PressOutcome::Accepted => EventResponse::Handled,
                PressOutcome::Rejected => EventResponse::Ignored,
            },
            MapEvent::MouseMove(pointer) => {
                if !self.is_active() {
                    return EventResponse::Ignored;
                }
                self.pointer_move(pointer, ctx);
                EventResponse::Handled
            }
            MapEvent::MouseUp(pointer) => {
                if !self.is_active() {
                    return EventResponse::Ignored;
                }
                self.release(pointer, ctx);
                EventResponse::Handled
            }
            MapEvent::KeyDown(key) => {
                if !self.is_active() || key.key_code != KEY_ESCAPE {
                    return EventResponse::Ignored;
                }
                self.key_down(key, ctx);
                EventResponse::Handled
            }
            // Kontextmenü während einer Sitzung unterdrücken
            MapEvent::ContextMenu(_) if self.is_active() => EventResponse::Consumed,
            MapEvent::ContextMenu(_) => EventResponse::Ignored,
        }
    }

    fn on_timer(&mut self, handle: TimerHandle, _ctx: &mut HandlerContext<'_>) {
        self.deferred_reset(handle);
    }

    fn on_unload(&mut self, ctx: &mut HandlerContext<'_>) {
        self.teardown(ctx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
