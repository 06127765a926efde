use scroll_input::{InputHost, Point};

/// Layout size of an element or the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Leading edges of an element's bounding rect, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
}

/// Handle returned by [`ScrollHost::request_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The DOM and scheduling surface a [`crate::SmoothScroll`] runs against.
///
/// Listener registrations are bookkeeping only: once registered, the host is expected to call
/// back into the controller (`on_native_scroll`, `on_resize`, `on_frame`, `on_input`).
pub trait ScrollHost {
    type Element: Clone + PartialEq;
    /// Listener host handed to the controller's normalizer.
    type Input: InputHost;

    /// Finds the `[data-scrollable]` element under `root`.
    fn query_scrollable(&self, root: &Self::Element) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;

    /// `clientWidth`/`clientHeight`.
    fn client_size(&self, el: &Self::Element) -> Size;
    /// `innerWidth`/`innerHeight`.
    fn viewport_size(&self) -> Size;
    fn bounding_rect(&self, el: &Self::Element) -> ClientRect;

    /// `scrollLeft`/`scrollTop`.
    fn scroll_position(&self, el: &Self::Element) -> Point;
    fn scroll_to(&mut self, el: &Self::Element, x: f64, y: f64);

    /// Creates the listener host for input scoped to `el`.
    fn input_host(&mut self, el: &Self::Element) -> Self::Input;

    fn listen_scroll(&mut self, el: &Self::Element);
    fn unlisten_scroll(&mut self, el: &Self::Element);
    fn listen_resize(&mut self);
    fn unlisten_resize(&mut self);

    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}
