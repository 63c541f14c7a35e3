//! Host-Events: Zeiger- und Tastatur-Events, wie sie der Karten-Host zustellt.

use glam::Vec2;

/// Tastencode der Escape-Taste (Abbruch einer Messung).
pub const KEY_ESCAPE: u32 = 27;

/// Button-Kennung des primären Zeiger-Buttons (1-basiert, 0 = nicht gemeldet).
pub const BUTTON_PRIMARY: u16 = 1;
/// Button-Kennung des mittleren Zeiger-Buttons.
pub const BUTTON_MIDDLE: u16 = 2;
/// Button-Kennung des sekundären Zeiger-Buttons.
pub const BUTTON_SECONDARY: u16 = 3;

/// Gedrückte Modifier-Tasten zum Zeitpunkt eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd (macOS) bzw. Ctrl auf anderen Plattformen
    pub command: bool,
}

impl Modifiers {
    /// Nur Ctrl gedrückt.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
        command: false,
    };
    /// Keine Modifier gedrückt.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        command: false,
    };
}

/// Zeiger-Event (Press, Move, Release, Kontextmenü).
///
/// Der Button wird über zwei redundante Felder gemeldet: `which` (Legacy)
/// und `button` (modern). Hosts füllen nicht immer beide; 0 heißt „nicht
/// gemeldet“. Beide Felder nutzen die 1-basierte Zählung (1 = primär).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Zeigerposition relativ zur Interaktionsfläche (Pixel)
    pub screen_pos: Vec2,
    /// Legacy-Button-Kennung
    pub which: u16,
    /// Moderne Button-Kennung
    pub button: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event mit einem Button, der in beiden Kennungsfeldern gemeldet wird.
    pub fn with_button(screen_pos: Vec2, button: u16, modifiers: Modifiers) -> Self {
        Self {
            screen_pos,
            which: button,
            button,
            modifiers,
        }
    }

    /// Event mit dem primären Button.
    pub fn primary(screen_pos: Vec2, modifiers: Modifiers) -> Self {
        Self::with_button(screen_pos, BUTTON_PRIMARY, modifiers)
    }

    /// Reine Zeigerbewegung ohne Button-Angabe.
    pub fn motion(screen_pos: Vec2) -> Self {
        Self::with_button(screen_pos, 0, Modifiers::NONE)
    }

    /// Ist der primäre Button betroffen? Eines der beiden Kennungsfelder genügt.
    pub fn is_primary(&self) -> bool {
        self.which == BUTTON_PRIMARY || self.button == BUTTON_PRIMARY
    }
}

/// Tastatur-Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: u32,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn escape() -> Self {
        Self::new(KEY_ESCAPE)
    }
}

/// Art eines Host-Events (Schlüssel für Listener-Abos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    KeyDown,
    ContextMenu,
}

/// Ziel eines Listener-Abos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// Die Interaktionsfläche der Karte
    Container,
    /// Dokumentweit (erhält auch Events, die von der Fläche aufsteigen)
    Document,
}

/// Ein vom Host zugestelltes Event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    MouseDown(PointerEvent),
    MouseMove(PointerEvent),
    MouseUp(PointerEvent),
    KeyDown(KeyEvent),
    ContextMenu(PointerEvent),
}

impl MapEvent {
    /// Art des Events.
    pub fn kind(&self) -> EventKind {
        match self {
            MapEvent::MouseDown(_) => EventKind::MouseDown,
            MapEvent::MouseMove(_) => EventKind::MouseMove,
            MapEvent::MouseUp(_) => EventKind::MouseUp,
            MapEvent::KeyDown(_) => EventKind::KeyDown,
            MapEvent::ContextMenu(_) => EventKind::ContextMenu,
        }
    }
}

/// Rückmeldung eines Handlers an den Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub enum EventResponse {
    /// Event nicht verarbeitet
    #[default]
    Ignored,
    /// Event verarbeitet, Default-Verhalten des Hosts bleibt erlaubt
    Handled,
    /// Event verarbeitet und Default-Verhalten unterdrückt (z.B. Kontextmenü)
    Consumed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_accepted_via_either_field() {
        let pos = Vec2::ZERO;
        let legacy_only = PointerEvent {
            screen_pos: pos,
            which: BUTTON_PRIMARY,
            button: 0,
            modifiers: Modifiers::NONE,
        };
        let modern_only = PointerEvent {
            screen_pos: pos,
            which: 0,
            button: BUTTON_PRIMARY,
            modifiers: Modifiers::NONE,
        };
        assert!(legacy_only.is_primary());
        assert!(modern_only.is_primary());
    }

    #[test]
    fn test_secondary_and_middle_are_not_primary() {
        let pos = Vec2::ZERO;
        assert!(!PointerEvent::with_button(pos, BUTTON_SECONDARY, Modifiers::NONE).is_primary());
        assert!(!PointerEvent::with_button(pos, BUTTON_MIDDLE, Modifiers::NONE).is_primary());
        assert!(!PointerEvent::motion(pos).is_primary());
    }

    #[test]
    fn test_event_kind_mapping() {
        let ev = PointerEvent::motion(Vec2::ONE);
        assert_eq!(MapEvent::MouseMove(ev).kind(), EventKind::MouseMove);
        assert_eq!(MapEvent::KeyDown(KeyEvent::escape()).kind(), EventKind::KeyDown);
    }
}
