//! Zustandsübergänge: Press, Move, Release, Escape, Finish, Reset und Entladen.

use super::label::Measurement;
use super::state::{DragMeasure, MeasurementSession, PressOutcome};
use super::HANDLER_NAME;
use crate::app::events::{EventKind, EventTarget, KeyEvent, PointerEvent, KEY_ESCAPE};
use crate::app::handler::HandlerContext;
use crate::app::scheduler::TimerHandle;
use crate::app::surface::CursorStyle;
use crate::core::Tooltip;

/// Dokumentweite Events, die während einer Sitzung abonniert sind.
const SESSION_EVENTS: [EventKind; 4] = [
    EventKind::ContextMenu,
    EventKind::MouseMove,
    EventKind::MouseUp,
    EventKind::KeyDown,
];

impl DragMeasure {
    /// Hängt den Press-Listener auf der Interaktionsfläche ein.
    pub fn install_hooks(&mut self, ctx: &mut HandlerContext<'_>) {
        if self.press_listener.is_some() {
            return;
        }
        self.press_listener = Some(ctx.listeners.subscribe(
            HANDLER_NAME,
            EventTarget::Container,
            &[EventKind::MouseDown],
        ));
    }

    /// Hängt den Press-Listener aus. Eine laufende Sitzung bleibt unberührt.
    pub fn uninstall_hooks(&mut self, ctx: &mut HandlerContext<'_>) {
        if let Some(listener) = self.press_listener.take() {
            ctx.listeners.unsubscribe(listener);
        }
    }

    /// Press auf der Fläche: startet eine Sitzung, wenn Modifier und primärer Button passen.
    pub fn press(&mut self, event: &PointerEvent, ctx: &mut HandlerContext<'_>) -> PressOutcome {
        if !self.options.modifier.is_held(&event.modifiers) || !event.is_primary() {
            return PressOutcome::Rejected;
        }
        if self.unloaded {
            log::debug!("Drag-Measure: Press ignoriert, Fläche bereits entladen");
            return PressOutcome::Rejected;
        }

        // Verlorenes Release (z.B. außerhalb des Fensters): alte Sitzung sauber abbauen
        if self.finish(ctx) {
            log::debug!("Drag-Measure: vorherige Sitzung vor neuem Press beendet");
        }

        self.clear_deferred_reset(ctx);
        self.reset_state();

        ctx.surface.set_text_selection(false);
        ctx.surface.set_image_drag(false);
        ctx.surface.set_map_dragging(false);
        ctx.surface.set_cursor(CursorStyle::Crosshair);

        let start_point = ctx.surface.pointer_to_geo(event.screen_pos);
        let mut session = MeasurementSession::new(start_point);
        session.overlays.start_marker = Some(ctx.surface.add_circle_marker(
            start_point,
            &self.options.start_marker_style(),
            None,
        ));
        session.document_listener = Some(ctx.listeners.subscribe(
            HANDLER_NAME,
            EventTarget::Document,
            &SESSION_EVENTS,
        ));
        self.session = Some(session);

        log::debug!("Drag-Measure: Sitzung gestartet bei {}", start_point);
        PressOutcome::Accepted
    }

    /// Zeigerbewegung während einer Sitzung: ersetzt Linie + End-Marker atomar.
    pub fn pointer_move(&mut self, event: &PointerEvent, ctx: &mut HandlerContext<'_>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.moved = true;

        for id in session.overlays.take_live_pair() {
            ctx.surface.remove_overlay(id);
        }

        let start = session.start_point;
        let current = ctx.surface.pointer_to_geo(event.screen_pos);
        session.current_point = Some(current);

        let distance_m = ctx.surface.distance_meters(start, current);
        let measurement = Measurement::new(start, current, distance_m);
        let tooltip = Tooltip {
            text: measurement.label().to_string(),
            permanent: self.options.tooltip_permanent,
        };

        session.overlays.line =
            Some(ctx.surface.add_polyline(&[start, current], &self.options.line_style()));
        session.overlays.current_marker = Some(ctx.surface.add_circle_marker(
            current,
            &self.options.current_marker_style(),
            Some(tooltip),
        ));
        self.last_measurement = Some(measurement);
    }

    /// Release: nur der primäre Button beendet die Sitzung.
    pub fn release(&mut self, event: &PointerEvent, ctx: &mut HandlerContext<'_>) {
        if !event.is_primary() {
            return;
        }
        if !self.finish(ctx) || !self.moved {
            return;
        }
        self.schedule_deferred_reset(ctx);
    }

    /// Tastendruck während einer Sitzung: Escape bricht ab.
    ///
    /// Wie beim Release wird `moved` erst mit dem nächsten Tick zurückgesetzt.
    pub fn key_down(&mut self, event: &KeyEvent, ctx: &mut HandlerContext<'_>) {
        if event.key_code != KEY_ESCAPE {
            return;
        }
        if self.finish(ctx) {
            log::debug!("Drag-Measure: Sitzung per Escape abgebrochen");
            if self.moved {
                self.schedule_deferred_reset(ctx);
            }
        }
    }

    /// Gemeinsamer Abbau einer Sitzung. Ohne Sitzung ein No-op (`false`).
    pub fn finish(&mut self, ctx: &mut HandlerContext<'_>) -> bool {
        let Some(mut session) = self.session.take() else {
            return false;
        };

        for id in session.overlays.take_all() {
            ctx.surface.remove_overlay(id);
        }

        ctx.surface.set_text_selection(true);
        ctx.surface.set_image_drag(true);

        if let Some(listener) = session.document_listener.take() {
            ctx.listeners.unsubscribe(listener);
        }

        ctx.surface.set_map_dragging(true);
        ctx.surface.set_cursor(CursorStyle::Default);

        if let Some(m) = &self.last_measurement {
            log::debug!(
                "Drag-Measure: Sitzung beendet ({:.2} NM, {:.0}°)",
                m.distance_nm(),
                m.bearing_deg
            );
        }
        true
    }

    /// Zurückgestellter Reset ist fällig. Veraltete Handles werden ignoriert.
    pub fn deferred_reset(&mut self, handle: TimerHandle) {
        if self.reset_timer != Some(handle) {
            log::debug!("Drag-Measure: veralteter Reset-Timer {:?} ignoriert", handle);
            return;
        }
        self.reset_state();
    }

    /// Entladen der Fläche: bricht jede Sitzung ab und gibt alle Abos frei.
    pub fn teardown(&mut self, ctx: &mut HandlerContext<'_>) {
        self.finish(ctx);
        self.clear_deferred_reset(ctx);
        self.reset_state();
        self.uninstall_hooks(ctx);
        self.unloaded = true;
        log::info!("Drag-Measure: Handler entladen");
    }

    fn schedule_deferred_reset(&mut self, ctx: &mut HandlerContext<'_>) {
        self.clear_deferred_reset(ctx);
        self.reset_timer = Some(ctx.scheduler.schedule_deferred(HANDLER_NAME));
    }

    fn clear_deferred_reset(&mut self, ctx: &mut HandlerContext<'_>) {
        if let Some(handle) = self.reset_timer.take() {
            ctx.scheduler.cancel(handle);
        }
    }

    fn reset_state(&mut self) {
        self.reset_timer = None;
        self.moved = false;
        self.last_measurement = None;
    }
}
