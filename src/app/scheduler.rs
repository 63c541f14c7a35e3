//! Zurückgestellte Aufgaben (Zero-Delay-Timer) mit expliziter Abbruch-Möglichkeit.

use std::num::NonZeroU64;

/// Handle eines geplanten Timers. `Option<TimerHandle>::None` = kein Timer geplant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(NonZeroU64);

/// Plant Aufgaben für den nächsten Scheduling-Tick des Hosts.
pub trait Scheduler {
    /// Plant einen Zero-Delay-Rückruf für den Handler `owner`.
    fn schedule_deferred(&mut self, owner: &str) -> TimerHandle;

    /// Bricht einen geplanten Timer ab. Gibt `false` zurück, wenn er nicht mehr aussteht.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Tick-basierter Scheduler: geplante Aufgaben werden beim nächsten `take_due` fällig.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Vec<(TimerHandle, String)>,
    next_id: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt alle fälligen Aufgaben in Planungsreihenfolge.
    pub fn take_due(&mut self) -> Vec<(TimerHandle, String)> {
        std::mem::take(&mut self.pending)
    }

    /// Anzahl ausstehender Aufgaben.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }
}

impl Scheduler for TickScheduler {
    fn schedule_deferred(&mut self, owner: &str) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(NonZeroU64::MIN.saturating_add(self.next_id - 1));
        self.pending.push((handle, owner.to_string()));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        before != self.pending.len()
    }
}
