use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::ScrollEvent;

/// A subscriber to normalized scroll events.
///
/// Subscribers are identified by pointer identity: keep a clone of the `Rc` around to pass to
/// [`crate::VirtualScroll::off`].
pub type ScrollCallback = Rc<dyn Fn(&ScrollEvent<'_>)>;

/// Ordered subscriber list.
///
/// Emission is synchronous and follows registration order. Registering the same callback twice
/// delivers each event to it twice.
#[derive(Default)]
pub(crate) struct Emitter {
    subscribers: Vec<ScrollCallback>,
}

impl Emitter {
    pub(crate) fn subscribe(&mut self, callback: ScrollCallback) {
        self.subscribers.push(callback);
    }

    /// Removes every registration of `callback`. Returns how many were removed.
    pub(crate) fn unsubscribe(&mut self, callback: &ScrollCallback) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|cb| !Rc::ptr_eq(cb, callback));
        before - self.subscribers.len()
    }

    pub(crate) fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub(crate) fn emit(&self, event: &ScrollEvent<'_>) {
        for cb in &self.subscribers {
            cb(event);
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
