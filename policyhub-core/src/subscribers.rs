use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn()>;

/// Change listeners registered against a store.
#[derive(Default)]
pub struct Subscribers {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn notify(&self) {
        // Snapshot first: listeners may (un)subscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}
