//! Synchronous publish/subscribe hub
//!
//! Handlers are plain closures keyed by event kind. Publishing calls every
//! handler registered for the kind, once, in registration order, before
//! returning. There is no queueing and no cross-thread delivery.

use std::collections::HashMap;

use crate::domain::{CellCoords, ColorChoice};

/// Kinds of events a subscriber can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DimensionChanged,
    CellPainted,
    RainbowToggled,
}

/// Event payloads published by a sketch session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchEvent {
    /// Board must be rebuilt at this size (also sent on re-announce)
    DimensionChanged { cells_per_side: u32 },
    /// A cell interaction produced a colouring decision; `None` means no paint
    CellPainted { coords: CellCoords, color: Option<ColorChoice> },
    /// Rainbow mode was flipped; the pen is up afterwards
    RainbowToggled { enabled: bool },
}

impl SketchEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SketchEvent::DimensionChanged { .. } => EventKind::DimensionChanged,
            SketchEvent::CellPainted { .. } => EventKind::CellPainted,
            SketchEvent::RainbowToggled { .. } => EventKind::RainbowToggled,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback type for published events
pub type EventHandler = Box<dyn FnMut(&SketchEvent)>;

/// Registry of handlers per event kind
#[derive(Default)]
pub struct Notifier {
    handlers: HashMap<EventKind, Vec<(SubscriptionId, EventHandler)>>,
    next_id: u64,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self.handlers.iter().map(|(kind, list)| (*kind, list.len())).collect();
        f.debug_struct("Notifier")
            .field("handlers", &counts)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`
    ///
    /// Handlers for the same kind run in the order they were registered.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&SketchEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.entry(kind).or_default().push((id, Box::new(handler)));
        id
    }

    /// Removes a handler; returns false if the id was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(existing, _)| *existing == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Calls every handler registered for the event's kind
    ///
    /// # Returns
    /// Number of handlers invoked
    pub fn publish(&mut self, event: &SketchEvent) -> usize {
        let Some(list) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(event);
        }
        list.len()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}
