//! Interaktions-Handler und ihre namensbasierte Registry.
//!
//! Handler werden beim `MapView` unter einem Namen registriert und über
//! `enable`/`disable` ein- bzw. ausgehängt. Kollaborateure (Fläche,
//! Scheduler, Listener-Tabelle) erhalten sie pro Aufruf über den
//! `HandlerContext`, statt sie selbst zu halten.

use super::events::{EventResponse, MapEvent};
use super::listeners::ListenerTable;
use super::scheduler::{Scheduler, TimerHandle};
use super::surface::MapSurface;
use indexmap::IndexMap;
use std::any::Any;

/// Kollaborateure eines Handler-Aufrufs.
pub struct HandlerContext<'a> {
    pub surface: &'a mut dyn MapSurface,
    pub scheduler: &'a mut dyn Scheduler,
    pub listeners: &'a mut ListenerTable,
}

/// Schnittstelle für alle Interaktions-Handler einer Kartenfläche.
pub trait InteractionHandler: Any {
    /// Registry-Name (z.B. "dragMeasure")
    fn name(&self) -> &str;

    /// Hängt die Basis-Listener ein (beim Aktivieren).
    fn add_hooks(&mut self, ctx: &mut HandlerContext<'_>);

    /// Hängt die Basis-Listener aus (beim Deaktivieren).
    fn remove_hooks(&mut self, ctx: &mut HandlerContext<'_>);

    /// Verarbeitet ein Event, für das der Handler einen Listener abonniert hat.
    fn handle_event(&mut self, event: &MapEvent, ctx: &mut HandlerContext<'_>) -> EventResponse;

    /// Ein vom Handler geplanter Timer ist fällig.
    fn on_timer(&mut self, _handle: TimerHandle, _ctx: &mut HandlerContext<'_>) {}

    /// Die Kartenfläche wird entladen.
    fn on_unload(&mut self, _ctx: &mut HandlerContext<'_>) {}

    /// Für typisierten Zugriff über die Registry.
    fn as_any(&self) -> &dyn Any;
}

struct HandlerEntry {
    handler: Box<dyn InteractionHandler>,
    enabled: bool,
}

/// Registry aller Handler einer Kartenfläche, geordnet nach Registrierung.
#[derive(Default)]
pub struct HandlerRegistry {
    entries: IndexMap<String, HandlerEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Handler unter seinem Namen (zunächst deaktiviert).
    /// Ein bereits registrierter Handler gleichen Namens wird ersetzt.
    pub fn register(&mut self, handler: Box<dyn InteractionHandler>) {
        let name = handler.name().to_string();
        if self
            .entries
            .insert(
                name.clone(),
                HandlerEntry {
                    handler,
                    enabled: false,
                },
            )
            .is_some()
        {
            log::warn!("Handler '{}' war bereits registriert und wurde ersetzt", name);
        }
    }

    /// Aktiviert einen Handler. Gibt `false` zurück, wenn er unbekannt oder schon aktiv ist.
    pub fn enable(&mut self, name: &str, ctx: &mut HandlerContext<'_>) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        if entry.enabled {
            return false;
        }
        entry.enabled = true;
        entry.handler.add_hooks(ctx);
        log::debug!("Handler '{}' aktiviert", name);
        true
    }

    /// Deaktiviert einen Handler. Gibt `false` zurück, wenn er unbekannt oder schon inaktiv ist.
    pub fn disable(&mut self, name: &str, ctx: &mut HandlerContext<'_>) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        if !entry.enabled {
            return false;
        }
        entry.enabled = false;
        entry.handler.remove_hooks(ctx);
        log::debug!("Handler '{}' deaktiviert", name);
        true
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.enabled)
    }

    pub fn get(&self, name: &str) -> Option<&dyn InteractionHandler> {
        self.entries.get(name).map(|e| e.handler.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn InteractionHandler + 'static)> {
        let entry = self.entries.get_mut(name)?;
        Some(entry.handler.as_mut())
    }

    /// Typisierter Zugriff auf einen registrierten Handler.
    pub fn get_as<T: InteractionHandler>(&self, name: &str) -> Option<&T> {
        self.get(name)?.as_any().downcast_ref::<T>()
    }

    /// Ruft `on_unload` für alle Handler auf und deaktiviert sie.
    pub fn unload_all(&mut self, ctx: &mut HandlerContext<'_>) {
        for (name, entry) in self.entries.iter_mut() {
            entry.handler.on_unload(ctx);
            entry.enabled = false;
            log::debug!("Handler '{}' entladen", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::listeners::ListenerTable;
    use super::super::scheduler::TickScheduler;
    use super::super::surface::CursorStyle;
    use super::*;
    use crate::app::events::{EventKind, EventTarget};
    use crate::core::{CircleMarkerStyle, GeoPoint, OverlayId, PolylineStyle, Tooltip};
    use glam::Vec2;

    struct NullSurface;

    impl MapSurface for NullSurface {
        fn pointer_to_geo(&self, _screen_pos: Vec2) -> GeoPoint {
            GeoPoint::default()
        }
        fn add_polyline(&mut self, _points: &[GeoPoint], _style: &PolylineStyle) -> OverlayId {
            OverlayId(0)
        }
        fn add_circle_marker(
            &mut self,
            _center: GeoPoint,
            _style: &CircleMarkerStyle,
            _tooltip: Option<Tooltip>,
        ) -> OverlayId {
            OverlayId(0)
        }
        fn remove_overlay(&mut self, _id: OverlayId) {}
        fn set_text_selection(&mut self, _enabled: bool) {}
        fn set_image_drag(&mut self, _enabled: bool) {}
        fn set_map_dragging(&mut self, _enabled: bool) {}
        fn set_cursor(&mut self, _cursor: CursorStyle) {}
    }

    #[derive(Default)]
    struct CountingHandler {
        hooks_added: usize,
        hooks_removed: usize,
        unloaded: bool,
    }

    impl InteractionHandler for CountingHandler {
        fn name(&self) -> &str {
            "counting"
        }
        fn add_hooks(&mut self, ctx: &mut HandlerContext<'_>) {
            self.hooks_added += 1;
            ctx.listeners
                .subscribe("counting", EventTarget::Container, &[EventKind::MouseDown]);
        }
        fn remove_hooks(&mut self, _ctx: &mut HandlerContext<'_>) {
            self.hooks_removed += 1;
        }
        fn handle_event(&mut self, _event: &MapEvent, _ctx: &mut HandlerContext<'_>) -> EventResponse {
            EventResponse::Ignored
        }
        fn on_unload(&mut self, _ctx: &mut HandlerContext<'_>) {
            self.unloaded = true;
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_enable_and_disable_are_idempotent() {
        let mut surface = NullSurface;
        let mut scheduler = TickScheduler::new();
        let mut listeners = ListenerTable::new();
        let mut ctx = HandlerContext {
            surface: &mut surface,
            scheduler: &mut scheduler,
            listeners: &mut listeners,
        };

        let mut registry = HandlerRegistry::new();
        registry.register(Box::new(CountingHandler::default()));
        assert!(!registry.is_enabled("counting"));

        assert!(registry.enable("counting", &mut ctx));
        assert!(!registry.enable("counting", &mut ctx));
        assert!(registry.disable("counting", &mut ctx));
        assert!(!registry.disable("counting", &mut ctx));

        let handler = registry
            .get_as::<CountingHandler>("counting")
            .expect("Handler erwartet");
        assert_eq!(handler.hooks_added, 1);
        assert_eq!(handler.hooks_removed, 1);
    }

    #[test]
    fn test_unknown_handler_is_rejected() {
        let mut surface = NullSurface;
        let mut scheduler = TickScheduler::new();
        let mut listeners = ListenerTable::new();
        let mut ctx = HandlerContext {
            surface: &mut surface,
            scheduler: &mut scheduler,
            listeners: &mut listeners,
        };

        let mut registry = HandlerRegistry::new();
        assert!(!registry.enable("missing", &mut ctx));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_unload_all_notifies_and_disables() {
        let mut surface = NullSurface;
        let mut scheduler = TickScheduler::new();
        let mut listeners = ListenerTable::new();
        let mut ctx = HandlerContext {
            surface: &mut surface,
            scheduler: &mut scheduler,
            listeners: &mut listeners,
        };

        let mut registry = HandlerRegistry::new();
        registry.register(Box::new(CountingHandler::default()));
        registry.enable("counting", &mut ctx);
        registry.unload_all(&mut ctx);

        assert!(!registry.is_enabled("counting"));
        assert!(registry
            .get_as::<CountingHandler>("counting")
            .is_some_and(|h| h.unloaded));
    }
}
