use std::cell::RefCell;
use std::rc::Rc;

use smooth_scroll::scroll_input::{InputEvent, InputHost, Listener, Point, Support};
use smooth_scroll::{
    ClientRect, FrameHandle, ScrollHost, ScrollToOptions, Size, SmoothScroll,
    SmoothScrollOptions,
};

#[derive(Default)]
struct Page {
    listeners: Rc<RefCell<Vec<Listener>>>,
    position: Point,
    frames: u64,
}

struct PageInput {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl InputHost for PageInput {
    fn add_listener(&mut self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        self.listeners.borrow_mut().retain(|l| *l != listener);
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }
}

/// Element handles: 0 = root, 1 = container, 2 = scrollable content.
impl ScrollHost for Page {
    type Element = u8;
    type Input = PageInput;

    fn query_scrollable(&self, root: &u8) -> Option<u8> {
        (*root == 0).then_some(2)
    }

    fn query_selector(&self, _selector: &str) -> Option<u8> {
        None
    }

    fn parent(&self, el: &u8) -> Option<u8> {
        el.checked_sub(1)
    }

    fn client_size(&self, _el: &u8) -> Size {
        Size::new(1280.0, 4800.0)
    }

    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 800.0)
    }

    fn bounding_rect(&self, _el: &u8) -> ClientRect {
        ClientRect::default()
    }

    fn scroll_position(&self, _el: &u8) -> Point {
        self.position
    }

    fn scroll_to(&mut self, _el: &u8, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    fn input_host(&mut self, _el: &u8) -> PageInput {
        PageInput {
            listeners: Rc::clone(&self.listeners),
        }
    }

    fn listen_scroll(&mut self, _el: &u8) {}

    fn unlisten_scroll(&mut self, _el: &u8) {}

    fn listen_resize(&mut self) {}

    fn unlisten_resize(&mut self) {}

    fn request_frame(&mut self) -> FrameHandle {
        self.frames += 1;
        FrameHandle(self.frames)
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

fn main() {
    // Example: a smooth-scroll controller driven by a simulated 60Hz frame loop.
    //
    // An adapter would:
    // - call attach(root) on mount and detach() on unmount
    // - forward listener events to on_input, container scrolls to on_native_scroll
    // - call on_frame(dt_ms) whenever the requested animation frame fires
    let mut c = SmoothScroll::new(Page::default(), Support::desktop(), SmoothScrollOptions::new());
    c.when_ready(|| println!("ready"));
    if !c.attach(&0) {
        return;
    }
    println!("limit={}", c.limit());

    for _ in 0..4 {
        c.on_input(&InputEvent::wheel(0.0, 240.0));
    }
    println!("target after wheel={}", c.target_scroll());

    let mut frame = 0u32;
    while c.is_moving() {
        c.on_frame(16.0);
        frame += 1;
        if frame % 10 == 0 {
            println!("frame={frame} scroll={:.2}", c.scroll());
        }
    }
    println!("settled at {} after {frame} frames", c.scroll());

    c.scroll_to("bottom", ScrollToOptions::default());
    while c.is_moving() {
        c.on_frame(16.0);
    }
    println!("bottom: {:?}", c.host().position);

    c.detach();
}
