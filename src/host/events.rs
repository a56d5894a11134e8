//! Document lifecycle events and the observer seam

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A document lifecycle event delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The active document changed (including to "no document")
    ActiveDocumentChanged,

    /// A document was saved
    DocumentSaved {
        /// Full path of the saved document
        path: String,
    },
}

/// Handle identifying one subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked for each delivered event
pub type Observer = Rc<dyn Fn(&DocumentEvent)>;

/// Source of document lifecycle events
///
/// Unsubscribing is deterministic: after `unsubscribe` returns, the observer
/// is never invoked again.
pub trait EventSource {
    /// Register an observer; events are delivered until unsubscribed
    fn subscribe(&self, observer: Observer) -> SubscriptionId;

    /// Remove a previously registered observer
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Single-threaded event dispatcher
///
/// Reference [`EventSource`] implementation for hosts and tests. Dispatch
/// snapshots the observer list first, so observers may subscribe or
/// unsubscribe while an event is being delivered.
#[derive(Default)]
pub struct EventHub {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
}

impl EventHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every current observer
    pub fn emit(&self, event: &DocumentEvent) {
        let snapshot: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in snapshot {
            observer(event);
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl EventSource for EventHub {
    fn subscribe(&self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subscribe_and_emit() {
        let hub = EventHub::new();
        let seen = Rc::new(Cell::new(0));

        let seen_clone = Rc::clone(&seen);
        hub.subscribe(Rc::new(move |_| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        hub.emit(&DocumentEvent::ActiveDocumentChanged);
        hub.emit(&DocumentEvent::DocumentSaved {
            path: "site.css".to_string(),
        });

        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let hub = EventHub::new();
        let seen = Rc::new(Cell::new(0));

        let seen_clone = Rc::clone(&seen);
        let id = hub.subscribe(Rc::new(move |_| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        hub.emit(&DocumentEvent::ActiveDocumentChanged);
        hub.unsubscribe(id);
        hub.emit(&DocumentEvent::ActiveDocumentChanged);

        assert_eq!(seen.get(), 1);
        assert_eq!(hub.observer_count(), 0);
    }

    #[test]
    fn test_unsubscribe_is_id_scoped() {
        let hub = EventHub::new();
        let first = hub.subscribe(Rc::new(|_| {}));
        let _second = hub.subscribe(Rc::new(|_| {}));

        hub.unsubscribe(first);
        assert_eq!(hub.observer_count(), 1);

        // Unsubscribing an already removed id is a no-op
        hub.unsubscribe(first);
        assert_eq!(hub.observer_count(), 1);
    }

    #[test]
    fn test_observer_may_unsubscribe_during_dispatch() {
        let hub = Rc::new(EventHub::new());
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let hub_clone = Rc::clone(&hub);
        let slot_clone = Rc::clone(&id_slot);
        let id = hub.subscribe(Rc::new(move |_| {
            if let Some(id) = slot_clone.get() {
                hub_clone.unsubscribe(id);
            }
        }));
        id_slot.set(Some(id));

        hub.emit(&DocumentEvent::ActiveDocumentChanged);
        assert_eq!(hub.observer_count(), 0);
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(
            DocumentEvent::DocumentSaved {
                path: "a.css".to_string()
            },
            DocumentEvent::DocumentSaved {
                path: "a.css".to_string()
            }
        );
        assert_ne!(
            DocumentEvent::ActiveDocumentChanged,
            DocumentEvent::DocumentSaved {
                path: "a.css".to_string()
            }
        );
    }
}
