//! Viewport-Input: egui-Events → `MapEvent`s in Eingangsreihenfolge.

use crate::app::events::{BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY, KEY_ESCAPE};
use crate::app::{EventTarget, KeyEvent, MapEvent, Modifiers, PointerEvent};
use glam::Vec2;

/// Wandelt egui-Modifier in Host-Modifier um.
pub(crate) fn map_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.ctrl,
        shift: modifiers.shift,
        alt: modifiers.alt,
        command: modifiers.command,
    }
}

/// 1-basierte Button-Kennung eines egui-Buttons.
fn button_id(button: egui::PointerButton) -> u16 {
    match button {
        egui::PointerButton::Primary => BUTTON_PRIMARY,
        egui::PointerButton::Middle => BUTTON_MIDDLE,
        egui::PointerButton::Secondary => BUTTON_SECONDARY,
        egui::PointerButton::Extra1 => 4,
        egui::PointerButton::Extra2 => 5,
    }
}

/// Sammelt die Host-Events eines Frames für die Fläche `rect`.
///
/// Events über der Fläche haben Ursprung `Container`, alle anderen `Document`.
/// Ein Release des sekundären Buttons erzeugt zusätzlich ein Kontextmenü-Event.
pub fn collect_map_events(ui: &egui::Ui, rect: egui::Rect) -> Vec<(MapEvent, EventTarget)> {
    let origin_of = |pos: egui::Pos2| {
        if rect.contains(pos) {
            EventTarget::Container
        } else {
            EventTarget::Document
        }
    };
    let local = |pos: egui::Pos2| {
        let offset = pos - rect.min;
        Vec2::new(offset.x, offset.y)
    };

    ui.input(|i| {
        let mut events = Vec::new();
        let mut last_pos = i.pointer.latest_pos();

        for event in &i.events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    last_pos = Some(*pos);
                    let mut pointer = PointerEvent::motion(local(*pos));
                    pointer.modifiers = map_modifiers(i.modifiers);
                    events.push((MapEvent::MouseMove(pointer), origin_of(*pos)));
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                } => {
                    let pointer = PointerEvent::with_button(
                        local(*pos),
                        button_id(*button),
                        map_modifiers(*modifiers),
                    );
                    let origin = origin_of(*pos);
                    if *pressed {
                        events.push((MapEvent::MouseDown(pointer), origin));
                    } else {
                        events.push((MapEvent::MouseUp(pointer), origin));
                        if *button == egui::PointerButton::Secondary {
                            events.push((MapEvent::ContextMenu(pointer), origin));
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    modifiers,
                    ..
                } => {
                    let key = KeyEvent {
                        key_code: KEY_ESCAPE,
                        modifiers: map_modifiers(*modifiers),
                    };
                    let origin = last_pos.map_or(EventTarget::Document, origin_of);
                    events.push((MapEvent::KeyDown(key), origin));
                }
                _ => {}
            }
        }

        events
    })
}
