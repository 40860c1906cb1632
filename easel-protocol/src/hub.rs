use std::sync::Arc;

pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Ordered publish/subscribe list with a one-way destroyed state.
///
/// Listeners are compared by reference identity: subscribing the same
/// `Arc` twice is a no-op, and unsubscribe removes exactly that `Arc`.
/// After `destroy`, emission and registration both become no-ops.
pub struct EventHub<E> {
    listeners: Vec<Listener<E>>,
    destroyed: bool,
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            destroyed: false,
        }
    }

    pub fn subscribe(&mut self, listener: Listener<E>) {
        if self.destroyed {
            return;
        }
        if self.listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return;
        }
        self.listeners.push(listener);
    }

    pub fn unsubscribe(&mut self, listener: &Listener<E>) {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn emit(&self, event: &E) {
        if self.destroyed {
            return;
        }
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}
