use std::rc::Rc;

use scroll_input::{
    InputEvent, InputHost, Key, Listener, NormalizerOptions, ScrollCallback, ScrollEvent, Support,
    VirtualScroll,
};

/// Prints what the normalizer asks for instead of touching a real DOM.
struct LoggingHost;

impl InputHost for LoggingHost {
    fn add_listener(&mut self, listener: Listener) {
        println!("add    {:?} on {:?}", listener.event, listener.target);
    }

    fn remove_listener(&mut self, listener: Listener) {
        println!("remove {:?} on {:?}", listener.event, listener.target);
    }

    fn viewport_height(&self) -> f64 {
        900.0
    }
}

fn main() {
    // Example: fold wheel and keyboard input into one delta stream.
    //
    // An adapter would:
    // - register the listeners requested through `InputHost::add_listener`
    // - translate each DOM event into an `InputEvent` and pass it to `handle`
    // - call `preventDefault()` on the DOM event when `default_prevented()` is set
    let options = NormalizerOptions::default().with_use_keyboard(true);
    let mut vs = VirtualScroll::new(LoggingHost, Support::desktop(), options);

    let cb: ScrollCallback = Rc::new(|e: &ScrollEvent<'_>| {
        println!(
            "delta=({}, {}) position=({}, {})",
            e.delta_x, e.delta_y, e.x, e.y
        );
    });
    vs.on(Rc::clone(&cb));

    let inputs = [
        InputEvent::wheel(0.0, 100.0),
        InputEvent::wheel(0.0, -40.0),
        InputEvent::key_down(Key::Down),
        InputEvent::key_down(Key::Space),
        InputEvent::key_down(Key::from_key_code(65)),
    ];
    for input in &inputs {
        if vs.handle(input).is_none() {
            println!("ignored {:?}", input.kind);
        }
    }

    vs.off(&cb);
    println!("bound after off: {}", vs.is_bound());
}
