//! Zustand des Drag-Measure-Handlers: Sitzung, Overlay-Handles, Reset-Timer.

use super::label::Measurement;
use crate::app::listeners::ListenerId;
use crate::app::scheduler::TimerHandle;
use crate::core::{GeoPoint, OverlayId};
use crate::shared::MeasureOptions;

/// Beobachtbarer Zustand des Handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureState {
    /// Keine Sitzung
    Idle,
    /// Press akzeptiert, Zeiger noch nicht bewegt
    Armed,
    /// Zeiger bewegt, Overlay sichtbar
    Measuring,
    /// Sitzung beendet, `moved` wird erst mit dem nächsten Tick zurückgesetzt
    ResetPending,
}

/// Handles der aktuell gerenderten Mess-Overlays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayHandles {
    pub line: Option<OverlayId>,
    pub start_marker: Option<OverlayId>,
    pub current_marker: Option<OverlayId>,
}

impl OverlayHandles {
    /// Anzahl gesetzter Handles.
    pub fn live_count(&self) -> usize {
        [self.line, self.start_marker, self.current_marker]
            .iter()
            .flatten()
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Entnimmt das Paar aus Linie und End-Marker (immer gemeinsam).
    pub fn take_live_pair(&mut self) -> Vec<OverlayId> {
        [self.line.take(), self.current_marker.take()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Entnimmt alle Handles; danach ist kein Handle mehr gesetzt.
    pub fn take_all(&mut self) -> Vec<OverlayId> {
        [
            self.line.take(),
            self.start_marker.take(),
            self.current_marker.take(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Eine laufende Messung. Existiert nur zwischen akzeptiertem Press und `finish`.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    /// Startpunkt (Press-Position)
    pub start_point: GeoPoint,
    /// Letzte Zeigerposition (None bis zur ersten Bewegung)
    pub current_point: Option<GeoPoint>,
    /// Handles der gerenderten Overlays
    pub overlays: OverlayHandles,
    /// Dokumentweites Listener-Abo (contextmenu, mousemove, mouseup, keydown)
    pub document_listener: Option<ListenerId>,
}

impl MeasurementSession {
    pub(super) fn new(start_point: GeoPoint) -> Self {
        Self {
            start_point,
            current_point: None,
            overlays: OverlayHandles::default(),
            document_listener: None,
        }
    }
}

/// Ergebnis eines Press-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Sitzung gestartet
    Accepted,
    /// Modifier/Button passen nicht oder Fläche entladen – keine Seiteneffekte
    Rejected,
}

/// Drag-Measure-Handler: Modifier + primärer Button + Ziehen misst Peilung und Distanz.
///
/// Hält höchstens eine `MeasurementSession` und höchstens einen ausstehenden
/// Reset-Timer. Alle Seiteneffekte laufen über den `HandlerContext`.
#[derive(Debug)]
pub struct DragMeasure {
    pub(super) options: MeasureOptions,
    /// Laufende Sitzung; `None` = inaktiv (Guard gegen doppeltes `finish`)
    pub(super) session: Option<MeasurementSession>,
    /// Zeiger wurde seit dem letzten Press bewegt
    pub(super) moved: bool,
    /// Ausstehender Reset-Timer (höchstens einer)
    pub(super) reset_timer: Option<TimerHandle>,
    /// Abo des Press-Listeners auf der Fläche (add_hooks/remove_hooks)
    pub(super) press_listener: Option<ListenerId>,
    /// Fläche wurde entladen; weitere Presses werden abgewiesen
    pub(super) unloaded: bool,
    /// Letztes Messergebnis (bis zum Reset)
    pub(super) last_measurement: Option<Measurement>,
}

impl DragMeasure {
    /// Erstellt einen neuen, inaktiven Handler.
    pub fn new(options: MeasureOptions) -> Self {
        Self {
            options,
            session: None,
            moved: false,
            reset_timer: None,
            press_listener: None,
            unloaded: false,
            last_measurement: None,
        }
    }

    /// Wurde der Zeiger seit dem letzten Press bewegt?
    ///
    /// Bleibt nach dem Loslassen bis zum nächsten Scheduling-Tick `true`,
    /// damit ein unmittelbar folgender Klick als Drag-Ende erkannt wird.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> MeasureState {
        match (&self.session, self.moved) {
            (Some(_), false) => MeasureState::Armed,
            (Some(_), true) => MeasureState::Measuring,
            (None, _) if self.reset_timer.is_some() => MeasureState::ResetPending,
            (None, _) => MeasureState::Idle,
        }
    }

    /// Läuft eine Sitzung?
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&MeasurementSession> {
        self.session.as_ref()
    }

    /// Ausstehender Reset-Timer.
    pub fn pending_reset(&self) -> Option<TimerHandle> {
        self.reset_timer
    }

    /// Ist der Press-Listener eingehängt?
    pub fn hooks_installed(&self) -> bool {
        self.press_listener.is_some()
    }

    /// Letztes Messergebnis der laufenden bzw. gerade beendeten Sitzung.
    pub fn last_measurement(&self) -> Option<&Measurement> {
        self.last_measurement.as_ref()
    }

    pub fn options(&self) -> &MeasureOptions {
        &self.options
    }
}

impl Default for DragMeasure {
    fn default() -> Self {
        Self::new(MeasureOptions::default())
    }
}
