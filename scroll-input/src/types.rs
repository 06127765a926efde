use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

/// A position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The unit of a standard wheel event's deltas (`WheelEvent.deltaMode`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// Maps the raw DOM value (`0`, `1`, `2`). Unknown values are treated as pixels.
    pub fn from_raw(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// A standard `wheel` event.
///
/// `wheel_delta_x`/`wheel_delta_y` are the legacy WebKit fields some engines still attach to
/// `wheel` events. They use the opposite sign convention to `delta_x`/`delta_y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: DeltaMode,
    pub wheel_delta_x: Option<f64>,
    pub wheel_delta_y: Option<f64>,
}

impl WheelInput {
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            ..Self::default()
        }
    }

    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }

    pub fn with_wheel_delta(mut self, wheel_delta_x: f64, wheel_delta_y: f64) -> Self {
        self.wheel_delta_x = Some(wheel_delta_x);
        self.wheel_delta_y = Some(wheel_delta_y);
        self
    }
}

/// A legacy `mousewheel` event (Safari, old IE, Chrome without `wheel`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseWheelInput {
    pub wheel_delta_x: Option<f64>,
    pub wheel_delta_y: Option<f64>,
    pub wheel_delta: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Space,
    Other(u32),
}

impl Key {
    /// Maps a legacy `KeyboardEvent.keyCode`.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            32 => Self::Space,
            other => Self::Other(other),
        }
    }

    pub fn key_code(self) -> u32 {
        match self {
            Self::Left => 37,
            Self::Up => 38,
            Self::Right => 39,
            Self::Down => 40,
            Self::Space => 32,
            Self::Other(code) => code,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

/// The payload of a raw input event, as translated by the host from the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    Wheel(WheelInput),
    MouseWheel(MouseWheelInput),
    /// Page position of the first target touch.
    TouchStart(Point),
    TouchMove(Point),
    /// Legacy `MSPointerDown`; handled like a touch start.
    PointerDown(Point),
    /// Legacy `MSPointerMove`; handled like a touch move.
    PointerMove(Point),
    MouseDown(Point),
    MouseMove(Point),
    MouseUp,
    KeyDown(Key),
}

impl InputKind {
    /// The listener this kind of event arrives through.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Wheel(_) => EventType::Wheel,
            Self::MouseWheel(_) => EventType::MouseWheel,
            Self::TouchStart(_) => EventType::TouchStart,
            Self::TouchMove(_) => EventType::TouchMove,
            Self::PointerDown(_) => EventType::PointerDown,
            Self::PointerMove(_) => EventType::PointerMove,
            Self::MouseDown(_) => EventType::MouseDown,
            Self::MouseMove(_) => EventType::MouseMove,
            Self::MouseUp => EventType::MouseUp,
            Self::KeyDown(_) => EventType::KeyDown,
        }
    }
}

/// A raw input event handed to [`crate::VirtualScroll::handle`].
///
/// `prevent_default` only records the request; the host is expected to check
/// [`InputEvent::default_prevented`] once dispatch returns and forward it to the real event.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    pub modifiers: Modifiers,
    /// Class list of the event target.
    pub target_classes: Vec<String>,
    default_prevented: Cell<bool>,
}

impl InputEvent {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            modifiers: Modifiers::default(),
            target_classes: Vec::new(),
            default_prevented: Cell::new(false),
        }
    }

    /// A standard `wheel` event in pixel mode.
    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        Self::new(InputKind::Wheel(WheelInput::new(delta_x, delta_y)))
    }

    pub fn key_down(key: Key) -> Self {
        Self::new(InputKind::KeyDown(key))
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_target_class(mut self, class: impl Into<String>) -> Self {
        self.target_classes.push(class.into());
        self
    }

    pub fn target_has_class(&self, class: &str) -> bool {
        self.target_classes.iter().any(|c| c == class)
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// The normalized event delivered to subscribers.
#[derive(Clone, Copy, Debug)]
pub struct ScrollEvent<'a> {
    /// Running total of `delta_x` since the normalizer was created (includes this event).
    pub x: f64,
    /// Running total of `delta_y` since the normalizer was created (includes this event).
    pub y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    pub original_event: &'a InputEvent,
}

/// Last known touch/drag position. `None` until the first gesture starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchStart {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl TouchStart {
    pub(crate) fn record(&mut self, p: Point) {
        self.x = Some(p.x);
        self.y = Some(p.y);
    }

    /// Frame-to-frame movement from the last recorded position to `p`.
    pub(crate) fn delta_to(&self, p: Point) -> Point {
        Point {
            x: p.x - self.x.unwrap_or(0.0),
            y: p.y - self.y.unwrap_or(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    Wheel,
    MouseWheel,
    TouchStart,
    TouchMove,
    MouseDown,
    MouseMove,
    MouseUp,
    PointerDown,
    PointerMove,
    KeyDown,
}

impl EventType {
    /// The DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::MouseWheel => "mousewheel",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::PointerDown => "MSPointerDown",
            Self::PointerMove => "MSPointerMove",
            Self::KeyDown => "keydown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerTarget {
    /// The element the normalizer is scoped to (or the window).
    Element,
    Document,
}

/// One DOM listener registration requested from the [`crate::InputHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listener {
    pub event: EventType,
    pub target: ListenerTarget,
    pub capture: bool,
    /// `None` means no listener options object is passed.
    pub passive: Option<bool>,
}
