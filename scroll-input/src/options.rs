use alloc::string::String;

/// Scale applied to every default multiplier.
pub const GLOBAL_MULTIPLIER: f64 = 0.25;

/// Target class that opts a touch-move out of `prevent_default`.
pub const DEFAULT_UNPREVENT_TOUCH_CLASS: &str = "vs-touchmove-allowed";

/// Configuration for [`crate::VirtualScroll`].
///
/// Fixed at construction. Start from `Default` and override with the `with_*` builders.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerOptions {
    /// Applied to every `wheel` delta after the platform corrections.
    pub mouse_multiplier: f64,
    pub touch_multiplier: f64,
    /// Mouse-drag emulation of touch on desktop.
    pub desktop_drag_multiplier: f64,
    /// Applied to line-mode wheel deltas on Firefox.
    pub firefox_multiplier: f64,
    /// Applied to every wheel delta on Windows.
    pub windows_multiplier: f64,
    /// Arrow-key delta.
    pub key_step: f64,
    /// Whether touch moves call `prevent_default`.
    pub prevent_touch: bool,
    pub unprevent_touch_class: String,
    pub use_keyboard: bool,
    /// Enables touch listeners and desktop drag emulation.
    pub use_touch: bool,
    /// Passed through to listener registration. `None` registers without an options object.
    pub passive: Option<bool>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            mouse_multiplier: GLOBAL_MULTIPLIER,
            touch_multiplier: 8.0 * GLOBAL_MULTIPLIER,
            desktop_drag_multiplier: 8.0 * GLOBAL_MULTIPLIER,
            firefox_multiplier: 15.0 * GLOBAL_MULTIPLIER,
            windows_multiplier: 15.0 * GLOBAL_MULTIPLIER,
            key_step: 120.0,
            prevent_touch: true,
            unprevent_touch_class: String::from(DEFAULT_UNPREVENT_TOUCH_CLASS),
            use_keyboard: false,
            use_touch: false,
            passive: Some(false),
        }
    }
}

impl NormalizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mouse_multiplier(mut self, multiplier: f64) -> Self {
        self.mouse_multiplier = multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, multiplier: f64) -> Self {
        self.touch_multiplier = multiplier;
        self
    }

    pub fn with_desktop_drag_multiplier(mut self, multiplier: f64) -> Self {
        self.desktop_drag_multiplier = multiplier;
        self
    }

    pub fn with_firefox_multiplier(mut self, multiplier: f64) -> Self {
        self.firefox_multiplier = multiplier;
        self
    }

    pub fn with_windows_multiplier(mut self, multiplier: f64) -> Self {
        self.windows_multiplier = multiplier;
        self
    }

    pub fn with_key_step(mut self, key_step: f64) -> Self {
        self.key_step = key_step;
        self
    }

    pub fn with_prevent_touch(mut self, prevent_touch: bool) -> Self {
        self.prevent_touch = prevent_touch;
        self
    }

    pub fn with_unprevent_touch_class(mut self, class: impl Into<String>) -> Self {
        self.unprevent_touch_class = class.into();
        self
    }

    pub fn with_use_keyboard(mut self, use_keyboard: bool) -> Self {
        self.use_keyboard = use_keyboard;
        self
    }

    pub fn with_use_touch(mut self, use_touch: bool) -> Self {
        self.use_touch = use_touch;
        self
    }

    pub fn with_passive(mut self, passive: Option<bool>) -> Self {
        self.passive = passive;
        self
    }
}
