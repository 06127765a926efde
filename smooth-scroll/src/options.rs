use scroll_input::NormalizerOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

impl Direction {
    /// Picks `x` or `y` according to this axis.
    pub fn axis(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }
}

/// Configuration for [`crate::SmoothScroll`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothScrollOptions {
    /// Name attached to log lines.
    pub label: String,
    /// Easing rate in `[0, 1]` (clamped). `0` disables easing.
    pub damping: f64,
    pub direction: Direction,
    /// Non-desktop profiles ease slightly faster.
    pub is_desktop: bool,
    /// Forwarded to the controller's input normalizer.
    pub input: NormalizerOptions,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            label: String::from("smoothScroll"),
            damping: 0.1,
            direction: Direction::Vertical,
            is_desktop: true,
            input: NormalizerOptions::default(),
        }
    }
}

impl SmoothScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_is_desktop(mut self, is_desktop: bool) -> Self {
        self.is_desktop = is_desktop;
        self
    }

    pub fn with_input(mut self, input: NormalizerOptions) -> Self {
        self.input = input;
        self
    }
}
