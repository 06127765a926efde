/// Destination of [`crate::SmoothScroll::scroll_to`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget<E> {
    /// An absolute offset. Treated as a direct jump rather than navigation.
    Offset(f64),
    Top,
    Bottom,
    /// Resolved through [`crate::ScrollHost::query_selector`].
    Selector(String),
    Element(E),
    /// Anything the host could not classify. Always a no-op.
    Unknown,
}

impl<E> ScrollTarget<E> {
    /// Whether reaching this target counts as navigation (eased with the scroll-to profile).
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Self::Offset(_))
    }
}

impl<E> From<f64> for ScrollTarget<E> {
    fn from(offset: f64) -> Self {
        Self::Offset(offset)
    }
}

impl<E> From<i32> for ScrollTarget<E> {
    fn from(offset: i32) -> Self {
        Self::Offset(f64::from(offset))
    }
}

impl<E> From<&str> for ScrollTarget<E> {
    fn from(s: &str) -> Self {
        match s {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            selector => Self::Selector(selector.to_owned()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    /// Added to the resolved offset.
    pub offset: f64,
}

impl ScrollToOptions {
    pub fn with_offset(offset: f64) -> Self {
        Self { offset }
    }
}
