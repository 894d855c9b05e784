//! Listener registry — ordered subscriber list with stable removal ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned when subscribing a listener.
///
/// Monotonically increasing across the process, so an id from one
/// registry never removes a listener from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Ordered set of boxed callbacks.
///
/// `F` is an unsized callback type such as `dyn FnMut(u32)`. Entries are
/// kept in registration order; the same callback logic may be registered
/// more than once and is then invoked once per registration.
pub struct Listeners<F: ?Sized> {
    entries: Vec<(ListenerId, Box<F>)>,
}

impl<F: ?Sized> Listeners<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a listener and return the id that removes it.
    pub fn subscribe(&mut self, listener: Box<F>) -> ListenerId {
        let id = ListenerId::next();
        self.entries.push((id, listener));
        id
    }

    /// Remove the listener registered under `id`.
    ///
    /// Returns `false` if no such listener is registered (already removed,
    /// or an id from another registry).
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Listeners in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.entries.iter_mut().map(|(_, listener)| &mut **listener)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: ?Sized> Default for Listeners<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sink = dyn FnMut(&mut Vec<u32>);

    fn pushing(value: u32) -> Box<Sink> {
        Box::new(move |out: &mut Vec<u32>| out.push(value))
    }

    fn fire(listeners: &mut Listeners<Sink>) -> Vec<u32> {
        let mut out = Vec::new();
        for listener in listeners.iter_mut() {
            listener(&mut out);
        }
        out
    }

    #[test]
    fn empty_registry() {
        let mut l = Listeners::<Sink>::new();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert!(fire(&mut l).is_empty());
    }

    #[test]
    fn iterates_in_registration_order() {
        let mut l = Listeners::<Sink>::new();
        l.subscribe(pushing(3));
        l.subscribe(pushing(1));
        l.subscribe(pushing(2));
        assert_eq!(fire(&mut l), vec![3, 1, 2]);
    }

    #[test]
    fn ids_are_unique() {
        let mut l = Listeners::<Sink>::new();
        let a = l.subscribe(pushing(1));
        let b = l.subscribe(pushing(1));
        assert_ne!(a, b);
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn duplicate_logic_fires_per_registration() {
        let mut l = Listeners::<Sink>::new();
        l.subscribe(pushing(7));
        l.subscribe(pushing(7));
        assert_eq!(fire(&mut l), vec![7, 7]);
    }

    #[test]
    fn unsubscribe_removes_only_that_entry() {
        let mut l = Listeners::<Sink>::new();
        l.subscribe(pushing(1));
        let middle = l.subscribe(pushing(2));
        l.subscribe(pushing(3));

        assert!(l.unsubscribe(middle));
        assert_eq!(fire(&mut l), vec![1, 3]);
    }

    #[test]
    fn unsubscribe_twice_returns_false() {
        let mut l = Listeners::<Sink>::new();
        let id = l.subscribe(pushing(1));
        assert!(l.unsubscribe(id));
        assert!(!l.unsubscribe(id));
        assert!(l.is_empty());
    }

    #[test]
    fn foreign_id_is_ignored() {
        let mut a = Listeners::<Sink>::new();
        let mut b = Listeners::<Sink>::new();
        a.subscribe(pushing(1));
        let from_b = b.subscribe(pushing(2));

        assert!(!a.unsubscribe(from_b));
        assert_eq!(fire(&mut a), vec![1]);
    }
}
