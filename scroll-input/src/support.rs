/// Answers the feature-detection questions behind [`Support::detect`].
///
/// In a browser this is backed by `'on<event>' in document`, `navigator.userAgent`,
/// `navigator.platform` and `navigator.msMaxTouchPoints`.
pub trait PlatformProbe {
    /// Whether the platform knows the given DOM event (e.g. `"wheel"`).
    fn supports_event(&self, event: &str) -> bool;
    fn user_agent(&self) -> &str;
    fn platform(&self) -> &str;
    fn max_touch_points(&self) -> u32;
}

/// Platform/browser capabilities the normalizer binds against.
///
/// Detect once (typically at startup) and hand a copy to every [`crate::VirtualScroll`]; tests
/// can construct a synthetic value directly.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Support {
    pub has_wheel_event: bool,
    pub has_mouse_wheel_event: bool,
    pub has_touch: bool,
    pub has_touch_win: bool,
    pub has_pointer: bool,
    pub has_key_down: bool,
    /// Firefox reports line-mode wheel deltas for physical wheels.
    pub is_firefox: bool,
    /// Windows wheel deltas are much smaller than on other platforms.
    pub is_windows: bool,
}

impl Support {
    pub fn detect<P: PlatformProbe + ?Sized>(probe: &P) -> Self {
        let support = Self {
            has_wheel_event: probe.supports_event("wheel"),
            has_mouse_wheel_event: probe.supports_event("mousewheel"),
            has_touch: probe.supports_event("touchstart"),
            has_touch_win: probe.max_touch_points() > 1,
            has_pointer: probe.supports_event("MSPointerDown"),
            has_key_down: probe.supports_event("keydown"),
            is_firefox: probe.user_agent().contains("Firefox"),
            is_windows: probe.platform().contains("Win"),
        };
        sdebug!(?support, "Support::detect");
        support
    }

    /// A plain desktop profile: standard wheel and keyboard events, no quirks.
    pub const fn desktop() -> Self {
        Self {
            has_wheel_event: true,
            has_mouse_wheel_event: false,
            has_touch: false,
            has_touch_win: false,
            has_pointer: false,
            has_key_down: true,
            is_firefox: false,
            is_windows: false,
        }
    }
}

impl Default for Support {
    fn default() -> Self {
        Self::desktop()
    }
}
