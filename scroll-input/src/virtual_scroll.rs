use alloc::string::String;
use alloc::vec::Vec;

use crate::emitter::Emitter;
use crate::{
    DeltaMode, EventType, InputEvent, InputHost, InputKind, Key, Listener, ListenerTarget,
    MouseWheelInput, NormalizerOptions, Point, ScrollCallback, ScrollEvent, Support, TouchStart,
    WheelInput,
};

/// Subtracted from the viewport height for the space-bar page step.
const KEYBOARD_PAGE_HEADER: f64 = 40.0;

/// Normalizes wheel, legacy mouse-wheel, touch, mouse-drag and keyboard input into a single
/// stream of [`ScrollEvent`]s.
///
/// This type is headless:
/// - It holds no DOM objects. Listener registration is delegated to an [`InputHost`].
/// - The host translates DOM events into [`InputEvent`]s and feeds them to [`Self::handle`].
///
/// No listener is registered until the first subscriber arrives, and the whole set is removed
/// once the last one leaves.
#[derive(Debug)]
pub struct VirtualScroll<H> {
    host: H,
    support: Support,
    options: NormalizerOptions,

    emitter: Emitter,
    subscribers: usize,
    bound: Option<Vec<Listener>>,
    saved_body_touch_action: Option<Option<String>>,

    x: f64,
    y: f64,
    delta_x: f64,
    delta_y: f64,
    touch_start: TouchStart,
    dragging: bool,
}

impl<H: InputHost> VirtualScroll<H> {
    pub fn new(host: H, support: Support, options: NormalizerOptions) -> Self {
        sdebug!(
            use_touch = options.use_touch,
            use_keyboard = options.use_keyboard,
            "VirtualScroll::new"
        );
        Self {
            host,
            support,
            options,
            emitter: Emitter::default(),
            subscribers: 0,
            bound: None,
            saved_body_touch_action: None,
            x: 0.0,
            y: 0.0,
            delta_x: 0.0,
            delta_y: 0.0,
            touch_start: TouchStart::default(),
            dragging: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn support(&self) -> Support {
        self.support
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
    }

    /// The listeners currently registered with the host (empty while unbound).
    pub fn bound_listeners(&self) -> &[Listener] {
        self.bound.as_deref().unwrap_or(&[])
    }

    /// Cumulative normalized position.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn touch_start(&self) -> TouchStart {
        self.touch_start
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Registers a subscriber. The first subscriber binds the listener set.
    pub fn on(&mut self, callback: ScrollCallback) {
        self.emitter.subscribe(callback);
        self.subscribers = self.subscribers.saturating_add(1);
        strace!(subscribers = self.subscribers, "VirtualScroll::on");
        if self.subscribers == 1 {
            self.bind();
        }
    }

    /// Removes every registration of `callback`. When none remain, the listener set is unbound.
    ///
    /// Removing a callback that was never registered does nothing.
    pub fn off(&mut self, callback: &ScrollCallback) {
        let removed = self.emitter.unsubscribe(callback);
        if removed == 0 {
            strace!("VirtualScroll::off: unknown subscriber");
            return;
        }
        if removed > self.subscribers {
            swarn!(
                removed,
                subscribers = self.subscribers,
                "VirtualScroll::off: subscriber count underflow"
            );
            debug_assert!(
                removed <= self.subscribers,
                "subscriber count underflow (removed={removed}, count={})",
                self.subscribers
            );
        }
        self.subscribers = self.subscribers.saturating_sub(removed);
        strace!(subscribers = self.subscribers, "VirtualScroll::off");
        if self.subscribers == 0 {
            self.unbind();
        }
    }

    /// Drops every subscriber and unbinds regardless of the count.
    pub fn destroy(&mut self) {
        self.emitter.clear();
        self.subscribers = 0;
        self.unbind();
    }

    /// Processes one raw event.
    ///
    /// Returns the dispatched event, or `None` when the input produced no scroll delta (gesture
    /// start, ignored key, drag without a pressed button) or arrived through a listener that is
    /// not bound.
    pub fn handle<'a>(&mut self, event: &'a InputEvent) -> Option<ScrollEvent<'a>> {
        let event_type = event.kind.event_type();
        if !self.bound_listeners().iter().any(|l| l.event == event_type) {
            strace!(event = event_type.name(), "VirtualScroll::handle: not bound");
            return None;
        }

        match &event.kind {
            InputKind::Wheel(wheel) => self.on_wheel(wheel),
            InputKind::MouseWheel(wheel) => self.on_mouse_wheel(wheel),
            InputKind::TouchStart(p) | InputKind::PointerDown(p) => {
                self.touch_start.record(*p);
                return None;
            }
            InputKind::TouchMove(p) | InputKind::PointerMove(p) => {
                self.on_move(event, *p, self.options.touch_multiplier);
            }
            InputKind::MouseDown(p) => {
                self.dragging = true;
                self.touch_start.record(*p);
                return None;
            }
            InputKind::MouseMove(p) => {
                if !self.dragging {
                    return None;
                }
                self.on_move(event, *p, self.options.desktop_drag_multiplier);
            }
            InputKind::MouseUp => {
                self.dragging = false;
                return None;
            }
            InputKind::KeyDown(key) => {
                if !self.on_key_down(*key, event.modifiers.shift) {
                    return None;
                }
            }
        }

        Some(self.notify(event))
    }

    fn on_wheel(&mut self, wheel: &WheelInput) {
        let o = &self.options;

        self.delta_x = legacy_or(wheel.wheel_delta_x, -wheel.delta_x);
        self.delta_y = legacy_or(wheel.wheel_delta_y, -wheel.delta_y);

        // Line mode on Firefox means a physical wheel rather than a touchpad.
        if self.support.is_firefox && wheel.delta_mode == DeltaMode::Line {
            self.delta_x *= o.firefox_multiplier;
            self.delta_y *= o.firefox_multiplier;
        }

        if self.support.is_windows {
            self.delta_x *= o.windows_multiplier;
            self.delta_y *= o.windows_multiplier;
        }

        self.delta_x *= o.mouse_multiplier;
        self.delta_y *= o.mouse_multiplier;
    }

    fn on_mouse_wheel(&mut self, wheel: &MouseWheelInput) {
        self.delta_x = legacy_or(wheel.wheel_delta_x, 0.0);
        self.delta_y = legacy_or(wheel.wheel_delta_y, wheel.wheel_delta);
    }

    fn on_move(&mut self, event: &InputEvent, p: Point, multiplier: f64) {
        if self.options.prevent_touch
            && !event.target_has_class(&self.options.unprevent_touch_class)
        {
            event.prevent_default();
        }

        let d = self.touch_start.delta_to(p);
        self.delta_x = d.x * multiplier;
        self.delta_y = d.y * multiplier;
        self.touch_start.record(p);
    }

    /// Returns `false` for keys that do not scroll.
    fn on_key_down(&mut self, key: Key, shift: bool) -> bool {
        self.delta_x = 0.0;
        self.delta_y = 0.0;

        // Left/right feed the vertical channel, like up/down.
        match key {
            Key::Left | Key::Up => self.delta_y = self.options.key_step,
            Key::Right | Key::Down => self.delta_y = -self.options.key_step,
            Key::Space => {
                let page = self.host.viewport_height() - KEYBOARD_PAGE_HEADER;
                // Shift+space pages up.
                self.delta_y = page * if shift { 1.0 } else { -1.0 };
            }
            Key::Other(_) => return false,
        }
        true
    }

    fn notify<'a>(&mut self, event: &'a InputEvent) -> ScrollEvent<'a> {
        self.x += self.delta_x;
        self.y += self.delta_y;

        let evt = ScrollEvent {
            x: self.x,
            y: self.y,
            delta_x: self.delta_x,
            delta_y: self.delta_y,
            original_event: event,
        };
        self.emitter.emit(&evt);
        evt
    }

    fn bind(&mut self) {
        if self.bound.is_some() {
            return;
        }

        let support = self.support;
        let use_touch = self.options.use_touch;
        let passive = self.options.passive;
        let on_element = |event| Listener {
            event,
            target: ListenerTarget::Element,
            capture: false,
            passive,
        };

        let mut listeners = Vec::new();
        if support.has_wheel_event {
            listeners.push(on_element(EventType::Wheel));
        }
        if support.has_mouse_wheel_event {
            listeners.push(on_element(EventType::MouseWheel));
        }
        if support.has_touch && use_touch {
            listeners.push(on_element(EventType::TouchStart));
            listeners.push(on_element(EventType::TouchMove));
        }
        if use_touch {
            listeners.push(on_element(EventType::MouseDown));
            listeners.push(on_element(EventType::MouseMove));
            listeners.push(on_element(EventType::MouseUp));
        }
        if support.has_pointer && support.has_touch_win && use_touch {
            let previous = self.host.swap_body_touch_action(Some(String::from("none")));
            self.saved_body_touch_action = Some(previous);
            for event in [EventType::PointerDown, EventType::PointerMove] {
                listeners.push(Listener {
                    event,
                    target: ListenerTarget::Element,
                    capture: true,
                    passive: None,
                });
            }
        }
        if support.has_key_down && self.options.use_keyboard {
            listeners.push(Listener {
                event: EventType::KeyDown,
                target: ListenerTarget::Document,
                capture: false,
                passive: None,
            });
        }

        for listener in &listeners {
            self.host.add_listener(*listener);
        }
        sdebug!(listeners = listeners.len(), "VirtualScroll::bind");
        self.bound = Some(listeners);
    }

    fn unbind(&mut self) {
        let Some(listeners) = self.bound.take() else {
            return;
        };

        for listener in &listeners {
            self.host.remove_listener(*listener);
        }
        if let Some(previous) = self.saved_body_touch_action.take() {
            self.host.swap_body_touch_action(previous);
        }
        self.dragging = false;
        self.touch_start = TouchStart::default();
        sdebug!(listeners = listeners.len(), "VirtualScroll::unbind");
    }
}

/// Legacy delta fields count only when present and non-zero.
fn legacy_or(legacy: Option<f64>, fallback: f64) -> f64 {
    match legacy {
        Some(v) if v != 0.0 => v,
        _ => fallback,
    }
}
