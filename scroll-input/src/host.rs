use alloc::string::String;

use crate::Listener;

/// The DOM surface a [`crate::VirtualScroll`] binds to.
///
/// The normalizer never touches the DOM itself. It asks the host to register or remove the
/// listeners it needs; the host then forwards matching events to
/// [`crate::VirtualScroll::handle`].
pub trait InputHost {
    fn add_listener(&mut self, listener: Listener);
    fn remove_listener(&mut self, listener: Listener);

    /// `window.innerHeight`, used for the space-bar page step.
    fn viewport_height(&self) -> f64;

    /// Replaces the document body's (legacy) touch action and returns the previous value.
    ///
    /// Only called on touch-enabled Windows with legacy pointer support.
    fn swap_body_touch_action(&mut self, value: Option<String>) -> Option<String> {
        let _ = value;
        None
    }
}
