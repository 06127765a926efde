use std::fmt;

/// A single-fire readiness signal.
///
/// Waiters registered before [`Ready::resolve`] are run (in registration order) by the first
/// resolve; waiters registered afterwards run immediately. Later resolves do nothing.
#[derive(Default)]
pub struct Ready {
    settled: bool,
    waiters: Vec<Box<dyn FnOnce()>>,
}

impl Ready {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn wait(&mut self, f: impl FnOnce() + 'static) {
        if self.settled {
            f();
        } else {
            self.waiters.push(Box::new(f));
        }
    }

    /// Settles the signal. Returns `false` if it was already settled.
    pub fn resolve(&mut self) -> bool {
        if self.settled {
            return false;
        }
        self.settled = true;
        for waiter in self.waiters.drain(..) {
            waiter();
        }
        true
    }
}

impl fmt::Debug for Ready {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ready")
            .field("settled", &self.settled)
            .field("waiters", &self.waiters.len())
            .finish()
    }
}
