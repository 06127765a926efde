//! Headless scroll-input normalization.
//!
//! For a damped smooth-scroll controller built on top of this crate, see `smooth-scroll`.
//!
//! Browsers report scrolling intent through several unrelated events: `wheel` (with per-engine
//! and per-OS scaling quirks), legacy `mousewheel`, touch moves, mouse drags and arrow/space
//! keys. [`VirtualScroll`] folds all of them into one [`ScrollEvent`] stream carrying a per-event
//! delta and a running position.
//!
//! It is UI-agnostic. The embedding layer is expected to provide:
//! - an [`InputHost`] that registers/removes the DOM listeners the normalizer asks for
//! - [`InputEvent`]s translated from those listeners, passed to [`VirtualScroll::handle`]
//! - a [`Support`] capability snapshot, detected once via [`Support::detect`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod host;
mod options;
mod support;
mod types;
mod virtual_scroll;

#[cfg(test)]
mod tests;

pub use emitter::ScrollCallback;
pub use host::InputHost;
pub use options::{DEFAULT_UNPREVENT_TOUCH_CLASS, GLOBAL_MULTIPLIER, NormalizerOptions};
pub use support::{PlatformProbe, Support};
pub use types::{
    DeltaMode, EventType, InputEvent, InputKind, Key, Listener, ListenerTarget, Modifiers,
    MouseWheelInput, Point, ScrollEvent, TouchStart, WheelInput,
};
pub use virtual_scroll::VirtualScroll;
