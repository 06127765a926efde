//! A headless smooth-scroll controller.
//!
//! Builds on `scroll-input`: normalized wheel/touch/keyboard deltas move a target offset, and a
//! per-frame exponential damping step eases the actual offset towards it before writing it back
//! to the scroll container.
//!
//! This crate is intentionally framework-agnostic. An adapter (DOM via `web-sys`, a test fake,
//! ...) implements [`ScrollHost`] and forwards lifecycle, input, scroll, resize and
//! animation-frame callbacks to [`SmoothScroll`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod damp;
mod host;
mod options;
mod ready;
mod smooth_scroll;
mod state;
mod target;


pub use host::{ClientRect, FrameHandle, ScrollHost, Size};
pub use options::{Direction, SmoothScrollOptions};
pub use ready::Ready;
pub use smooth_scroll::SmoothScroll;
pub use state::ScrollSnapshot;
pub use target::{ScrollTarget, ScrollToOptions};

pub use scroll_input;
