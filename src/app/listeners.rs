//! Listener-Tabelle: symmetrisches Abonnieren/Abbestellen von Host-Events.

use super::events::{EventKind, EventTarget};
use indexmap::IndexMap;

/// Handle eines Listener-Abos (für das symmetrische `unsubscribe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Listener {
    owner: String,
    target: EventTarget,
    kinds: Vec<EventKind>,
}

/// Alle aktiven Listener-Abos in Abo-Reihenfolge.
#[derive(Debug, Default)]
pub struct ListenerTable {
    listeners: IndexMap<ListenerId, Listener>,
    next_id: u64,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abonniert `kinds` auf `target` für den Handler `owner`.
    pub fn subscribe(&mut self, owner: &str, target: EventTarget, kinds: &[EventKind]) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(
            id,
            Listener {
                owner: owner.to_string(),
                target,
                kinds: kinds.to_vec(),
            },
        );
        log::debug!("Listener {:?} abonniert: {} auf {:?} {:?}", id, owner, target, kinds);
        id
    }

    /// Bestellt ein Abo ab. Gibt `false` zurück, wenn es nicht (mehr) existiert.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.shift_remove(&id).is_some();
        if removed {
            log::debug!("Listener {:?} abbestellt", id);
        }
        removed
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Anzahl Abos eines Handlers.
    pub fn count_for(&self, owner: &str) -> usize {
        self.listeners.values().filter(|l| l.owner == owner).count()
    }

    /// Anzahl Abos eines Handlers auf einem bestimmten Ziel.
    pub fn count_for_target(&self, owner: &str, target: EventTarget) -> usize {
        self.listeners
            .values()
            .filter(|l| l.owner == owner && l.target == target)
            .count()
    }

    /// Listener, die ein Event der Art `kind` mit Ursprung `origin` erhalten.
    ///
    /// Dokument-Listener erhalten jedes Event (auch von der Fläche aufsteigende),
    /// Flächen-Listener nur Events mit Ursprung auf der Fläche.
    pub fn matching(&self, kind: EventKind, origin: EventTarget) -> Vec<(ListenerId, String)> {
        self.listeners
            .iter()
            .filter(|(_, l)| l.kinds.contains(&kind))
            .filter(|(_, l)| l.target == EventTarget::Document || l.target == origin)
            .map(|(id, l)| (*id, l.owner.clone()))
            .collect()
    }
}
