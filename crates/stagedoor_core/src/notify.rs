//! Subscriber registries for store change propagation
//!
//! Every process-wide store (content, session, theme) owns one of these and
//! fires it after each committed mutation so mounted consumers can re-read.

use slotmap::{new_key_type, SlotMap};
use std::sync::Mutex;

new_key_type! {
    /// Handle for a registered subscriber
    pub struct SubscriptionId;
}

type Callback = Box<dyn Fn() + Send + Sync>;

/// A set of change callbacks, keyed so consumers can unsubscribe on unmount.
#[derive(Default)]
pub struct Subscribers {
    inner: Mutex<SlotMap<SubscriptionId, Callback>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning its handle
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) -> SubscriptionId {
        self.inner.lock().unwrap().insert(Box::new(callback))
    }

    /// Remove a callback by handle
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.lock().unwrap().remove(id);
    }

    /// Invoke every registered callback
    pub fn notify(&self) {
        let subscribers = self.inner.lock().unwrap();
        for (_, callback) in subscribers.iter() {
            callback();
        }
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Check if no subscribers are registered
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_notify_reaches_all_subscribers() {
        let subscribers = Subscribers::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count = count.clone();
            subscribers.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        subscribers.notify();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let subscribers = Subscribers::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = subscribers.subscribe(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        subscribers.notify();
        subscribers.unsubscribe(id);
        subscribers.notify();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(subscribers.is_empty());
    }
}
