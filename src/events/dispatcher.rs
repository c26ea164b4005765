//! Listener registration and synchronous dispatch.
//!
//! Listeners are plain callbacks kept in subscription order. `emit` calls
//! each one in turn before returning, so a listener observes every event in
//! the order the state changed.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// A subscribed callback.
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// Ordered list of listeners.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl EventDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It runs after every listener registered before it.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &GameEvent) {
        log::trace!("emit {}", event.kind());
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.listeners.iter().map(|(id, _)| *id).collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Shared buffer that collects events for a consumer to drain later.
///
/// A renderer that animates one change per frame subscribes a queue and
/// drains it from its own loop.
///
/// ```
/// use rust_patience::core::{GameState, RuleSet};
/// use rust_patience::events::EventQueue;
///
/// let mut game = GameState::new(RuleSet::spider());
/// let queue = EventQueue::new();
/// game.subscribe(queue.listener());
///
/// game.start_new(42);
/// assert!(!queue.is_empty());
/// let events = queue.drain();
/// assert!(queue.is_empty());
/// assert!(!events.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that appends to this queue.
    pub fn listener(&self) -> impl FnMut(&GameEvent) + 'static {
        let events = Rc::clone(&self.events);
        move |event: &GameEvent| events.borrow_mut().push(event.clone())
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
