use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use scroll_input::{InputEvent, ScrollEvent, Support, VirtualScroll};

use crate::damp::{clamp, damp_precise, round_half_up};
use crate::{
    Direction, FrameHandle, Ready, ScrollHost, ScrollSnapshot, ScrollTarget, ScrollToOptions,
    SmoothScrollOptions,
};

/// Ease used while converging on a [`SmoothScroll::scroll_to`] navigation target.
const SCROLL_TO_EASE: f64 = 0.05;
/// Added to the damping outside the desktop profile.
const TOUCH_EASE_BONUS: f64 = 0.2;
const SNAP_LIMIT: f64 = 0.01;
/// A navigation is considered finished once a frame moves less than this.
const SETTLE_VELOCITY: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default)]
struct State {
    width: f64,
    height: f64,
    limit: f64,

    target_scroll: f64,
    scroll: f64,
    velocity: f64,

    direction: Direction,
    damping: f64,
    smooth: bool,

    is_scrolling_to: bool,
    is_moving: bool,
    stopped: bool,
}

impl State {
    fn on_virtual_scroll(&mut self, e: &ScrollEvent<'_>) {
        let event = e.original_event;
        if self.stopped || self.is_scrolling_to {
            event.prevent_default();
            return;
        }

        // Ctrl leaves the native behavior alone (pinch-zoom, browser shortcuts).
        if self.smooth && !event.modifiers.ctrl {
            event.prevent_default();
        }

        self.target_scroll = clamp(self.target_scroll - e.delta_y, 0.0, self.limit);
        if !self.smooth {
            let last = self.scroll;
            self.scroll = self.target_scroll;
            self.velocity = self.scroll - last;
        } else if self.target_scroll != self.scroll {
            self.is_moving = true;
        }
    }
}

struct Binding<E> {
    el: E,
    parent: E,
}

/// A damped smooth-scroll controller for one scrollable element.
///
/// This type does not hold any UI objects beyond the host's element handles. Adapters drive it
/// by calling:
/// - `attach(root)` / `detach()` from their mount/unmount lifecycle
/// - `on_input` for every event on the listeners the normalizer registered
/// - `on_native_scroll`, `on_resize` for the container's `scroll` and the window's `resize`
/// - `on_frame(dt_ms)` when the frame requested through [`ScrollHost::request_frame`] fires
///
/// Input moves `target_scroll`; every frame eases `scroll` towards it and writes the result to
/// the container.
pub struct SmoothScroll<H: ScrollHost> {
    host: H,
    support: Support,
    options: SmoothScrollOptions,
    state: Rc<RefCell<State>>,
    binding: Option<Binding<H::Element>>,
    normalizer: Option<VirtualScroll<H::Input>>,
    frame: Option<FrameHandle>,
    ready: Ready,
}

impl<H: ScrollHost> SmoothScroll<H> {
    /// Creates an unattached controller. `options.damping` is clamped to `[0, 1]`.
    pub fn new(host: H, support: Support, options: SmoothScrollOptions) -> Self {
        let damping = clamp(options.damping, 0.0, 1.0);
        sdebug!(
            label = %options.label,
            damping,
            direction = ?options.direction,
            "SmoothScroll::new"
        );
        let state = State {
            direction: options.direction,
            damping,
            smooth: damping > 0.0,
            ..State::default()
        };
        Self {
            host,
            support,
            options,
            state: Rc::new(RefCell::new(state)),
            binding: None,
            normalizer: None,
            frame: None,
            ready: Ready::new(),
        }
    }

    /// Binds to the `[data-scrollable]` element under `root` and its parent container.
    ///
    /// Registers the container `scroll` listener, the normalizer (scoped to the container) and
    /// the window `resize` listener, measures once, runs the first frame step and settles
    /// [`Self::ready`].
    ///
    /// Returns `false` and stays inert when either element is missing. Calling it again while
    /// attached does nothing.
    pub fn attach(&mut self, root: &H::Element) -> bool {
        if self.binding.is_some() {
            strace!(label = %self.options.label, "SmoothScroll::attach: already attached");
            return true;
        }

        let Some(el) = self.host.query_scrollable(root) else {
            sdebug!(label = %self.options.label, "SmoothScroll::attach: no scrollable element");
            return false;
        };
        let Some(parent) = self.host.parent(&el) else {
            sdebug!(label = %self.options.label, "SmoothScroll::attach: scrollable has no parent");
            return false;
        };

        self.host.listen_scroll(&parent);

        let input = self.host.input_host(&parent);
        let mut normalizer = VirtualScroll::new(input, self.support, self.options.input.clone());
        let state = Rc::clone(&self.state);
        normalizer.on(Rc::new(move |e: &ScrollEvent<'_>| {
            state.borrow_mut().on_virtual_scroll(e);
        }));
        self.normalizer = Some(normalizer);

        self.host.listen_resize();
        self.binding = Some(Binding { el, parent });

        self.on_resize();
        self.tick(0.0);

        sdebug!(label = %self.options.label, limit = self.limit(), "SmoothScroll::attach");
        self.ready.resolve();
        true
    }

    /// Unregisters every listener, destroys the normalizer, cancels the pending frame and
    /// releases the element handles. Safe to call at any time, any number of times.
    pub fn detach(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.host.unlisten_scroll(&binding.parent);
            self.host.unlisten_resize();
            sdebug!(label = %self.options.label, "SmoothScroll::detach");
        }
        if let Some(mut normalizer) = self.normalizer.take() {
            normalizer.destroy();
        }
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
    }

    /// Feeds a raw input event to the normalizer.
    ///
    /// Returns the normalized event when one was dispatched. Check
    /// [`InputEvent::default_prevented`] afterwards to suppress the native behavior.
    pub fn on_input<'a>(&mut self, event: &'a InputEvent) -> Option<ScrollEvent<'a>> {
        self.normalizer.as_mut()?.handle(event)
    }

    /// Call this when the container fires a native `scroll` event.
    ///
    /// While idle (or with easing disabled) the native offset is taken as authoritative, so
    /// scrollbar drags and native keyboard scrolling stay in sync. While easing, the event is
    /// assumed to be our own write-back and is ignored.
    pub fn on_native_scroll(&mut self) {
        let Some(binding) = &self.binding else {
            return;
        };
        let mut s = self.state.borrow_mut();
        if s.stopped || (s.is_moving && s.smooth) {
            return;
        }

        let pos = self.host.scroll_position(&binding.parent);
        let last = s.scroll;
        s.scroll = s.direction.axis(pos.x, pos.y);
        s.target_scroll = s.scroll;
        s.velocity = s.scroll - last;
    }

    /// Call this when the window resizes. Recomputes the cached layout and `limit`.
    pub fn on_resize(&mut self) {
        let Some(binding) = &self.binding else {
            sdebug!(label = %self.options.label, "SmoothScroll::on_resize: not attached");
            return;
        };
        let size = self.host.client_size(&binding.el);
        let viewport = self.host.viewport_size();

        let mut s = self.state.borrow_mut();
        s.width = size.width;
        s.height = size.height;
        s.limit = match s.direction {
            Direction::Horizontal => size.width - viewport.width,
            Direction::Vertical => size.height - viewport.height,
        };
        strace!(label = %self.options.label, limit = s.limit, "SmoothScroll::on_resize");
    }

    /// Call this when the requested animation frame fires, with the milliseconds elapsed since
    /// the previous frame. Advances one step and requests the next frame.
    pub fn on_frame(&mut self, dt_ms: f64) {
        if self.binding.is_none() {
            return;
        }
        self.frame = None;
        self.tick(dt_ms);
    }

    /// Scrolls to an offset, an edge, a selector or an element.
    ///
    /// Element targets are converted from viewport-relative to content-relative coordinates
    /// using the current `scroll`. `options.offset` is added to the resolved value.
    ///
    /// Returns the new `target_scroll`, or `None` when the target does not resolve (or the
    /// controller is not attached), in which case nothing changes.
    ///
    /// With easing disabled (damping 0) the jump completes synchronously, so neither
    /// `is_moving` nor `is_scrolling_to` stays set, whatever the target kind.
    pub fn scroll_to(
        &mut self,
        target: impl Into<ScrollTarget<H::Element>>,
        options: ScrollToOptions,
    ) -> Option<f64> {
        let target = target.into();
        let Some(binding) = &self.binding else {
            sdebug!(label = %self.options.label, "SmoothScroll::scroll_to: not attached");
            return None;
        };
        let navigation = target.is_navigation();
        let (scroll, limit, direction) = {
            let s = self.state.borrow();
            (s.scroll, s.limit, s.direction)
        };

        let value = match target {
            ScrollTarget::Offset(offset) => offset,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => limit,
            ScrollTarget::Selector(selector) => {
                let Some(node) = self.host.query_selector(&selector) else {
                    sdebug!(
                        label = %self.options.label,
                        selector = %selector,
                        "SmoothScroll::scroll_to: selector matched nothing"
                    );
                    return None;
                };
                let rect = self.host.bounding_rect(&node);
                direction.axis(rect.left, rect.top) + scroll
            }
            ScrollTarget::Element(node) => {
                let rect = self.host.bounding_rect(&node);
                direction.axis(rect.left, rect.top) + scroll
            }
            ScrollTarget::Unknown => {
                strace!(label = %self.options.label, "SmoothScroll::scroll_to: unknown target");
                return None;
            }
        } + options.offset;

        let mut s = self.state.borrow_mut();
        s.target_scroll = value;
        s.is_moving = true;
        s.is_scrolling_to = navigation;

        if !s.smooth {
            // Without easing the jump completes here; there is nothing left in flight.
            s.scroll = value;
            s.is_moving = false;
            s.is_scrolling_to = false;
            let (x, y) = along(s.direction, value);
            self.host.scroll_to(&binding.parent, x, y);
        }
        Some(value)
    }

    pub fn start(&mut self) {
        self.state.borrow_mut().stopped = false;
    }

    /// Suspends input handling and frame updates. Listeners stay registered.
    pub fn stop(&mut self) {
        self.state.borrow_mut().stopped = true;
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.state.borrow_mut().stopped = stopped;
    }

    /// Re-measures layout after out-of-band changes.
    pub fn refresh(&mut self) {
        self.on_resize();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &SmoothScrollOptions {
        &self.options
    }

    pub fn label(&self) -> &str {
        &self.options.label
    }

    pub fn support(&self) -> Support {
        self.support
    }

    /// The normalizer feeding this controller (present while attached).
    pub fn normalizer(&self) -> Option<&VirtualScroll<H::Input>> {
        self.normalizer.as_ref()
    }

    pub fn normalizer_mut(&mut self) -> Option<&mut VirtualScroll<H::Input>> {
        self.normalizer.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// The bound scrollable element.
    pub fn el(&self) -> Option<&H::Element> {
        self.binding.as_ref().map(|b| &b.el)
    }

    /// The scroll container (the bound element's parent).
    pub fn parent(&self) -> Option<&H::Element> {
        self.binding.as_ref().map(|b| &b.parent)
    }

    /// The eased offset last written to the container.
    pub fn scroll(&self) -> f64 {
        self.state.borrow().scroll
    }

    pub fn target_scroll(&self) -> f64 {
        self.state.borrow().target_scroll
    }

    /// Maximum offset along the active axis, as of the last resize.
    pub fn limit(&self) -> f64 {
        self.state.borrow().limit
    }

    pub fn velocity(&self) -> f64 {
        self.state.borrow().velocity
    }

    pub fn width(&self) -> f64 {
        self.state.borrow().width
    }

    pub fn height(&self) -> f64 {
        self.state.borrow().height
    }

    pub fn direction(&self) -> Direction {
        self.state.borrow().direction
    }

    /// The clamped damping. `0` means easing is disabled.
    pub fn damping(&self) -> f64 {
        self.state.borrow().damping
    }

    pub fn is_smooth(&self) -> bool {
        self.state.borrow().smooth
    }

    pub fn is_moving(&self) -> bool {
        self.state.borrow().is_moving
    }

    pub fn is_scrolling_to(&self) -> bool {
        self.state.borrow().is_scrolling_to
    }

    pub fn stopped(&self) -> bool {
        self.state.borrow().stopped
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Settles after the first successful [`Self::attach`].
    pub fn ready(&self) -> &Ready {
        &self.ready
    }

    /// Runs `f` once the controller has attached (immediately if it already has).
    pub fn when_ready(&mut self, f: impl FnOnce() + 'static) {
        self.ready.wait(f);
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        let s = self.state.borrow();
        ScrollSnapshot {
            scroll: s.scroll,
            target_scroll: s.target_scroll,
            limit: s.limit,
            velocity: s.velocity,
            width: s.width,
            height: s.height,
            direction: s.direction,
            is_moving: s.is_moving,
            is_scrolling_to: s.is_scrolling_to,
            stopped: s.stopped,
        }
    }

    fn tick(&mut self, dt_ms: f64) {
        self.update(dt_ms);
        self.frame = Some(self.host.request_frame());
    }

    fn update(&mut self, dt_ms: f64) {
        let Some(binding) = &self.binding else {
            return;
        };
        let mut s = self.state.borrow_mut();
        if s.stopped || !s.smooth {
            return;
        }

        let mut last = s.scroll;
        let ease = if s.is_scrolling_to {
            SCROLL_TO_EASE
        } else if self.options.is_desktop {
            s.damping
        } else {
            s.damping + TOUCH_EASE_BONUS
        };
        s.scroll = damp_precise(s.scroll, s.target_scroll, ease, dt_ms, SNAP_LIMIT);
        if round_half_up(s.scroll) == round_half_up(s.target_scroll) {
            s.scroll = s.target_scroll;
            last = s.target_scroll;
        }
        s.velocity = s.scroll - last;

        if s.is_moving {
            let (x, y) = along(s.direction, s.scroll);
            self.host.scroll_to(&binding.parent, x, y);
        }

        s.is_moving = s.scroll != s.target_scroll;
        if s.is_scrolling_to && s.velocity.abs() < SETTLE_VELOCITY {
            s.is_scrolling_to = false;
        }
    }
}

/// Native `scrollTo(x, y)` arguments for an offset along `direction`.
fn along(direction: Direction, offset: f64) -> (f64, f64) {
    match direction {
        Direction::Horizontal => (offset, 0.0),
        Direction::Vertical => (0.0, offset),
    }
}

impl<H: ScrollHost> fmt::Debug for SmoothScroll<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothScroll")
            .field("label", &self.options.label)
            .field("attached", &self.binding.is_some())
            .field("state", &*self.state.borrow())
            .field("frame", &self.frame)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}
