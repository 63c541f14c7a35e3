//! Kartenfläche als Host: Listener-Tabelle, Handler-Registry, Scheduler und Event-Zustellung.

use super::drag_measure::{DragMeasure, HANDLER_NAME as DRAG_MEASURE};
use super::events::{EventResponse, EventTarget, MapEvent};
use super::handler::{HandlerContext, HandlerRegistry, InteractionHandler};
use super::listeners::ListenerTable;
use super::scheduler::TickScheduler;
use super::surface::MapSurface;
use crate::shared::MapOptions;

/// Eine Kartenfläche mit ihren Interaktions-Handlern.
///
/// Stellt Events strikt in Zustellreihenfolge an die abonnierten Handler zu
/// und führt zurückgestellte Aufgaben beim nächsten `tick` aus.
pub struct MapView<S: MapSurface> {
    surface: S,
    scheduler: TickScheduler,
    listeners: ListenerTable,
    handlers: HandlerRegistry,
    options: MapOptions,
    unloaded: bool,
}

impl<S: MapSurface> MapView<S> {
    /// Erstellt eine Kartenfläche; installiert den Drag-Measure-Handler, falls konfiguriert.
    pub fn new(surface: S, options: MapOptions) -> Self {
        let mut view = Self {
            surface,
            scheduler: TickScheduler::new(),
            listeners: ListenerTable::new(),
            handlers: HandlerRegistry::new(),
            options,
            unloaded: false,
        };

        if view.options.drag_measure {
            let handler = DragMeasure::new(view.options.measure.clone());
            view.add_handler(Box::new(handler));
        } else {
            log::info!("Drag-Measure per Konfiguration deaktiviert");
        }

        view
    }

    /// Registriert und aktiviert einen Handler.
    pub fn add_handler(&mut self, handler: Box<dyn InteractionHandler>) {
        let name = handler.name().to_string();
        self.handlers.register(handler);
        self.enable_handler(&name);
    }

    /// Aktiviert einen registrierten Handler.
    pub fn enable_handler(&mut self, name: &str) -> bool {
        let mut ctx = HandlerContext {
            surface: &mut self.surface,
            scheduler: &mut self.scheduler,
            listeners: &mut self.listeners,
        };
        self.handlers.enable(name, &mut ctx)
    }

    /// Deaktiviert einen registrierten Handler (laufende Interaktionen bleiben bestehen).
    pub fn disable_handler(&mut self, name: &str) -> bool {
        let mut ctx = HandlerContext {
            surface: &mut self.surface,
            scheduler: &mut self.scheduler,
            listeners: &mut self.listeners,
        };
        self.handlers.disable(name, &mut ctx)
    }

    /// Stellt ein Event an alle passenden Listener zu.
    ///
    /// `origin` ist der Ort, an dem das Event entstanden ist. Die Antwort ist
    /// die stärkste aller Handler-Antworten (`Consumed` > `Handled` > `Ignored`).
    pub fn dispatch(&mut self, event: MapEvent, origin: EventTarget) -> EventResponse {
        if self.unloaded {
            return EventResponse::Ignored;
        }

        let mut response = EventResponse::Ignored;
        for (listener, owner) in self.listeners.matching(event.kind(), origin) {
            // Ein vorheriger Handler-Aufruf kann das Abo bereits beendet haben
            if !self.listeners.contains(listener) {
                continue;
            }
            let Some(handler) = self.handlers.get_mut(&owner) else {
                continue;
            };
            let mut ctx = HandlerContext {
                surface: &mut self.surface,
                scheduler: &mut self.scheduler,
                listeners: &mut self.listeners,
            };
            response = response.max(handler.handle_event(&event, &mut ctx));
        }
        response
    }

    /// Nächster Scheduling-Tick: führt alle fälligen Aufgaben aus.
    /// Gibt die Anzahl ausgeführter Aufgaben zurück.
    pub fn tick(&mut self) -> usize {
        let due = self.scheduler.take_due();
        for (handle, owner) in &due {
            let Some(handler) = self.handlers.get_mut(owner) else {
                continue;
            };
            let mut ctx = HandlerContext {
                surface: &mut self.surface,
                scheduler: &mut self.scheduler,
                listeners: &mut self.listeners,
            };
            handler.on_timer(*handle, &mut ctx);
        }
        due.len()
    }

    /// Entlädt die Fläche: alle Handler brechen laufende Interaktionen ab.
    pub fn unload(&mut self) {
        if self.unloaded {
            return;
        }
        let mut ctx = HandlerContext {
            surface: &mut self.surface,
            scheduler: &mut self.scheduler,
            listeners: &mut self.listeners,
        };
        self.handlers.unload_all(&mut ctx);
        self.unloaded = true;
        log::info!("Kartenfläche entladen");
    }

    pub fn is_unloaded(&self) -> bool {
        self.unloaded
    }

    /// Der Drag-Measure-Handler, falls installiert.
    pub fn drag_measure(&self) -> Option<&DragMeasure> {
        self.handlers.get_as::<DragMeasure>(DRAG_MEASURE)
    }

    /// `moved()` des Drag-Measure-Handlers (false, wenn nicht installiert).
    /// Hosts nutzen es, um einen Klick am Ende eines Drags zu unterdrücken.
    pub fn drag_measure_moved(&self) -> bool {
        self.drag_measure().is_some_and(DragMeasure::moved)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }
}
