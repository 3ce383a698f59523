//! Typed publish/subscribe for deck events.
//!
//! The bus stores listeners per `DeckEventKind` and calls them
//! synchronously, in registration order, when an event of that kind is
//! emitted. It has no opinion on when events fire; `DeckController` emits
//! only after a transition has been applied and played.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use deck_motion::events::{DeckEvent, DeckEventKind, EventBus};
//! use deck_motion::core::CardId;
//!
//! let seen = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&seen);
//!
//! let mut bus = EventBus::new();
//! let id = bus.on(DeckEventKind::Flip, move |_| counter.set(counter.get() + 1));
//!
//! bus.emit(&DeckEvent::Flip { card_id: CardId::new("c0"), face_up: true });
//! assert_eq!(seen.get(), 1);
//!
//! assert!(bus.off(id));
//! bus.emit(&DeckEvent::Flip { card_id: CardId::new("c0"), face_up: false });
//! assert_eq!(seen.get(), 1);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{DeckEvent, DeckEventKind};

/// Handle returned by `EventBus::on`; pass it to `off` to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Listener = Box<dyn FnMut(&DeckEvent)>;

/// Listeners for one kind. Most kinds have one or two subscribers.
type Listeners = SmallVec<[(ListenerId, Listener); 2]>;

/// Event bus owned by a single deck controller.
#[derive(Default)]
pub struct EventBus {
    listeners: FxHashMap<DeckEventKind, Listeners>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of event.
    pub fn on(&mut self, kind: DeckEventKind, listener: impl FnMut(&DeckEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Unsubscribe. Returns false if `id` was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                drop(listeners.remove(pos));
                return true;
            }
        }
        false
    }

    /// Notify every listener of the event's kind. Returns how many ran.
    pub fn emit(&mut self, event: &DeckEvent) -> usize {
        match self.listeners.get_mut(&event.kind()) {
            Some(listeners) => {
                for (_, listener) in listeners.iter_mut() {
                    listener(event);
                }
                listeners.len()
            }
            None => 0,
        }
    }

    #[must_use]
    pub fn listener_count(&self, kind: DeckEventKind) -> usize {
        self.listeners.get(&kind).map_or(0, |l| l.len())
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: FxHashMap<_, _> = self
            .listeners
            .iter()
            .map(|(kind, l)| (*kind, l.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .field("next_id", &self.next_id)
            .finish()
    }
}
