use crate::*;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Debug, Default)]
struct RecordingHost {
    listeners: Vec<Listener>,
    adds: usize,
    removes: usize,
    viewport_height: f64,
    body_touch_action: Option<String>,
}

impl RecordingHost {
    fn new() -> Self {
        Self {
            viewport_height: 800.0,
            ..Self::default()
        }
    }

    fn has(&self, event: EventType) -> bool {
        self.listeners.iter().any(|l| l.event == event)
    }
}

impl InputHost for RecordingHost {
    fn add_listener(&mut self, listener: Listener) {
        self.adds += 1;
        self.listeners.push(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        self.removes += 1;
        let pos = self
            .listeners
            .iter()
            .position(|l| *l == listener)
            .expect("removing a listener that was never added");
        self.listeners.remove(pos);
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn swap_body_touch_action(&mut self, value: Option<String>) -> Option<String> {
        core::mem::replace(&mut self.body_touch_action, value)
    }
}

fn normalizer(support: Support, options: NormalizerOptions) -> VirtualScroll<RecordingHost> {
    VirtualScroll::new(RecordingHost::new(), support, options)
}

fn noop() -> ScrollCallback {
    Rc::new(|_: &ScrollEvent<'_>| {})
}

/// Subscribes a callback that records every `(delta_x, delta_y)` it sees.
fn record(vs: &mut VirtualScroll<RecordingHost>) -> Rc<RefCell<Vec<(f64, f64)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    vs.on(Rc::new(move |e: &ScrollEvent<'_>| {
        sink.borrow_mut().push((e.delta_x, e.delta_y));
    }));
    seen
}

fn touch_support() -> Support {
    Support {
        has_touch: true,
        ..Support::desktop()
    }
}

#[test]
fn binds_nothing_until_first_subscriber() {
    let vs = normalizer(Support::desktop(), NormalizerOptions::default());
    assert!(!vs.is_bound());
    assert_eq!(vs.host().adds, 0);
    assert!(vs.bound_listeners().is_empty());
}

#[test]
fn second_subscriber_does_not_bind_again() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    let a = noop();
    let b = noop();

    vs.on(Rc::clone(&a));
    let adds_after_first = vs.host().adds;
    assert_eq!(adds_after_first, 1);
    assert!(vs.host().has(EventType::Wheel));

    vs.on(Rc::clone(&b));
    assert_eq!(vs.host().adds, adds_after_first);
    assert_eq!(vs.subscriber_count(), 2);

    vs.off(&a);
    assert!(vs.is_bound());
    assert_eq!(vs.host().removes, 0);

    vs.off(&b);
    assert!(!vs.is_bound());
    assert!(vs.host().listeners.is_empty());
    assert_eq!(vs.host().removes, adds_after_first);
}

#[test]
fn removing_unknown_subscriber_is_a_no_op() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    vs.off(&noop());
    assert!(!vs.is_bound());
    assert_eq!(vs.host().removes, 0);

    vs.on(noop());
    vs.off(&noop());
    assert!(vs.is_bound());
    assert_eq!(vs.subscriber_count(), 1);
}

#[test]
fn duplicate_registration_is_removed_by_identity() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    let hits = Rc::new(Cell::new(0));
    let cb: ScrollCallback = {
        let hits = Rc::clone(&hits);
        Rc::new(move |_: &ScrollEvent<'_>| hits.set(hits.get() + 1))
    };

    vs.on(Rc::clone(&cb));
    vs.on(Rc::clone(&cb));
    vs.handle(&InputEvent::wheel(0.0, 4.0));
    assert_eq!(hits.get(), 2);

    vs.off(&cb);
    assert_eq!(vs.subscriber_count(), 0);
    assert!(!vs.is_bound());
}

#[test]
fn destroy_detaches_and_ignores_later_events() {
    let mut vs = normalizer(touch_support(), NormalizerOptions::default().with_use_touch(true));
    let a = noop();
    vs.on(Rc::clone(&a));
    vs.on(noop());
    vs.handle(&InputEvent::wheel(0.0, 40.0));
    let before = vs.position();

    vs.destroy();
    assert!(!vs.is_bound());
    assert_eq!(vs.subscriber_count(), 0);
    assert!(vs.host().listeners.is_empty());

    let wheel = InputEvent::wheel(0.0, 40.0);
    assert!(vs.handle(&wheel).is_none());
    let touch = InputEvent::new(InputKind::TouchMove(Point::new(0.0, 10.0)));
    assert!(vs.handle(&touch).is_none());
    assert!(!touch.default_prevented());
    assert_eq!(vs.position(), before);

    // A late `off` after destroy stays harmless.
    vs.off(&a);
    assert_eq!(vs.host().removes, vs.host().adds);
}

#[test]
fn subscribers_run_in_registration_order() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        vs.on(Rc::new(move |_: &ScrollEvent<'_>| log.borrow_mut().push(name)));
    }

    vs.handle(&InputEvent::wheel(0.0, 1.0));
    assert_eq!(*log.borrow(), ["first", "second", "third"]);
}

#[test]
fn wheel_delta_is_inverted_and_scaled_by_mouse_multiplier() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    let seen = record(&mut vs);

    let wheel = InputEvent::wheel(8.0, 100.0);
    let evt = vs.handle(&wheel).unwrap();
    assert_eq!(evt.delta_x, -2.0);
    assert_eq!(evt.delta_y, -25.0);
    assert_eq!(*seen.borrow(), [(-2.0, -25.0)]);
}

#[test]
fn legacy_wheel_delta_takes_precedence_when_non_zero() {
    let mut vs = normalizer(
        Support::desktop(),
        NormalizerOptions::default().with_mouse_multiplier(1.0),
    );
    vs.on(noop());

    let legacy = InputEvent::new(InputKind::Wheel(
        WheelInput::new(-1.0, -1.0).with_wheel_delta(0.0, 120.0),
    ));
    let evt = vs.handle(&legacy).unwrap();
    // wheelDeltaX == 0 falls back to the negated standard field.
    assert_eq!(evt.delta_x, 1.0);
    assert_eq!(evt.delta_y, 120.0);
}

#[test]
fn firefox_correction_only_applies_in_line_mode() {
    let support = Support {
        is_firefox: true,
        ..Support::desktop()
    };
    let mut vs = normalizer(support, NormalizerOptions::default());
    vs.on(noop());

    let line = InputEvent::new(InputKind::Wheel(
        WheelInput::new(0.0, 3.0).with_delta_mode(DeltaMode::Line),
    ));
    assert_eq!(vs.handle(&line).unwrap().delta_y, -3.0 * 3.75 * 0.25);

    let pixel = InputEvent::wheel(0.0, 3.0);
    assert_eq!(vs.handle(&pixel).unwrap().delta_y, -3.0 * 0.25);
}

#[test]
fn platform_corrections_apply_before_mouse_multiplier() {
    let support = Support {
        is_firefox: true,
        is_windows: true,
        ..Support::desktop()
    };
    let options = NormalizerOptions::default()
        .with_firefox_multiplier(2.0)
        .with_windows_multiplier(3.0)
        .with_mouse_multiplier(0.5);
    let mut vs = normalizer(support, options);
    vs.on(noop());

    let line = InputEvent::new(InputKind::Wheel(
        WheelInput::new(-4.0, 1.0).with_delta_mode(DeltaMode::Line),
    ));
    let evt = vs.handle(&line).unwrap();
    assert_eq!(evt.delta_x, 4.0 * 2.0 * 3.0 * 0.5);
    assert_eq!(evt.delta_y, -(2.0 * 3.0 * 0.5));
}

#[test]
fn legacy_mouse_wheel_skips_all_multipliers() {
    let support = Support {
        has_mouse_wheel_event: true,
        is_windows: true,
        ..Support::desktop()
    };
    let mut vs = normalizer(support, NormalizerOptions::default());
    vs.on(noop());
    assert!(vs.host().has(EventType::MouseWheel));

    let full = InputEvent::new(InputKind::MouseWheel(MouseWheelInput {
        wheel_delta_x: Some(-40.0),
        wheel_delta_y: Some(-120.0),
        wheel_delta: -120.0,
    }));
    let evt = vs.handle(&full).unwrap();
    assert_eq!((evt.delta_x, evt.delta_y), (-40.0, -120.0));

    let bare = InputEvent::new(InputKind::MouseWheel(MouseWheelInput {
        wheel_delta_x: None,
        wheel_delta_y: None,
        wheel_delta: 120.0,
    }));
    let evt = vs.handle(&bare).unwrap();
    assert_eq!((evt.delta_x, evt.delta_y), (0.0, 120.0));
}

#[test]
fn touch_deltas_are_frame_to_frame() {
    let mut vs = normalizer(touch_support(), NormalizerOptions::default().with_use_touch(true));
    let seen = record(&mut vs);

    let start = InputEvent::new(InputKind::TouchStart(Point::new(10.0, 100.0)));
    assert!(vs.handle(&start).is_none());
    assert_eq!(
        vs.touch_start(),
        TouchStart {
            x: Some(10.0),
            y: Some(100.0)
        }
    );

    let move1 = InputEvent::new(InputKind::TouchMove(Point::new(10.0, 80.0)));
    vs.handle(&move1);
    let move2 = InputEvent::new(InputKind::TouchMove(Point::new(15.0, 70.0)));
    vs.handle(&move2);

    assert_eq!(*seen.borrow(), [(0.0, -40.0), (10.0, -20.0)]);
    assert!(move1.default_prevented());
    assert_eq!(vs.position(), Point::new(10.0, -60.0));
}

#[test]
fn touch_move_respects_opt_out_class_and_toggle() {
    let mut vs = normalizer(touch_support(), NormalizerOptions::default().with_use_touch(true));
    vs.on(noop());

    let allowed = InputEvent::new(InputKind::TouchMove(Point::new(0.0, 5.0)))
        .with_target_class(DEFAULT_UNPREVENT_TOUCH_CLASS);
    vs.handle(&allowed);
    assert!(!allowed.default_prevented());

    let mut vs = normalizer(
        touch_support(),
        NormalizerOptions::default()
            .with_use_touch(true)
            .with_prevent_touch(false),
    );
    vs.on(noop());
    let plain = InputEvent::new(InputKind::TouchMove(Point::new(0.0, 5.0)));
    assert!(vs.handle(&plain).is_some());
    assert!(!plain.default_prevented());
}

#[test]
fn touch_is_ignored_unless_enabled() {
    let mut vs = normalizer(touch_support(), NormalizerOptions::default());
    vs.on(noop());
    assert!(!vs.host().has(EventType::TouchMove));
    assert!(!vs.host().has(EventType::MouseDown));

    let mv = InputEvent::new(InputKind::TouchMove(Point::new(0.0, 50.0)));
    assert!(vs.handle(&mv).is_none());
    assert_eq!(vs.position(), Point::default());
}

#[test]
fn desktop_drag_only_scrolls_while_pressed() {
    let mut vs = normalizer(
        Support::desktop(),
        NormalizerOptions::default()
            .with_use_touch(true)
            .with_desktop_drag_multiplier(3.0),
    );
    let seen = record(&mut vs);
    // No touch support, but drag emulation follows the touch toggle.
    assert!(!vs.host().has(EventType::TouchStart));
    assert!(vs.host().has(EventType::MouseMove));

    let hover = InputEvent::new(InputKind::MouseMove(Point::new(0.0, 10.0)));
    assert!(vs.handle(&hover).is_none());

    vs.handle(&InputEvent::new(InputKind::MouseDown(Point::new(0.0, 10.0))));
    assert!(vs.is_dragging());
    let drag = InputEvent::new(InputKind::MouseMove(Point::new(2.0, 4.0)));
    vs.handle(&drag);
    assert!(drag.default_prevented());

    vs.handle(&InputEvent::new(InputKind::MouseUp));
    assert!(!vs.is_dragging());
    let after = InputEvent::new(InputKind::MouseMove(Point::new(9.0, 9.0)));
    assert!(vs.handle(&after).is_none());

    assert_eq!(*seen.borrow(), [(6.0, -18.0)]);
}

#[test]
fn keyboard_steps_and_pages() {
    let mut vs = normalizer(
        Support::desktop(),
        NormalizerOptions::default().with_use_keyboard(true),
    );
    vs.on(noop());
    let kd = vs
        .bound_listeners()
        .iter()
        .find(|l| l.event == EventType::KeyDown)
        .copied()
        .unwrap();
    assert_eq!(kd.target, ListenerTarget::Document);

    let up_key = InputEvent::key_down(Key::Up);
    let up = vs.handle(&up_key).unwrap();
    assert_eq!((up.delta_x, up.delta_y), (0.0, 120.0));
    let down_key = InputEvent::key_down(Key::Down);
    let down = vs.handle(&down_key).unwrap();
    assert_eq!(down.delta_y, -120.0);

    let space_key = InputEvent::key_down(Key::Space);
    let space = vs.handle(&space_key).unwrap();
    assert_eq!(space.delta_y, -(800.0 - 40.0));
    let shift_space = InputEvent::key_down(Key::Space).with_modifiers(Modifiers {
        shift: true,
        ctrl: false,
    });
    assert_eq!(vs.handle(&shift_space).unwrap().delta_y, 760.0);

    let before = vs.position();
    assert!(vs.handle(&InputEvent::key_down(Key::Other(65))).is_none());
    assert_eq!(vs.position(), before);
}

// Horizontal arrows feed the vertical channel. This pins the current behavior: a
// horizontal-axis consumer does not see left/right as x movement.
#[test]
fn horizontal_arrows_map_to_vertical_delta() {
    let mut vs = normalizer(
        Support::desktop(),
        NormalizerOptions::default().with_use_keyboard(true),
    );
    vs.on(noop());

    let left_key = InputEvent::key_down(Key::Left);
    let left = vs.handle(&left_key).unwrap();
    assert_eq!((left.delta_x, left.delta_y), (0.0, 120.0));
    let right_key = InputEvent::key_down(Key::Right);
    let right = vs.handle(&right_key).unwrap();
    assert_eq!((right.delta_x, right.delta_y), (0.0, -120.0));
}

#[test]
fn keyboard_is_not_bound_unless_enabled() {
    let mut vs = normalizer(Support::desktop(), NormalizerOptions::default());
    vs.on(noop());
    assert!(!vs.host().has(EventType::KeyDown));
    assert!(vs.handle(&InputEvent::key_down(Key::Down)).is_none());
}

#[test]
fn legacy_pointer_path_overrides_body_touch_action() {
    let support = Support {
        has_pointer: true,
        has_touch_win: true,
        ..Support::desktop()
    };
    let mut vs = normalizer(support, NormalizerOptions::default().with_use_touch(true));
    vs.host_mut().body_touch_action = Some(String::from("auto"));
    let cb = noop();
    vs.on(Rc::clone(&cb));

    assert_eq!(vs.host().body_touch_action.as_deref(), Some("none"));
    let pointer: Vec<_> = vs
        .bound_listeners()
        .iter()
        .filter(|l| matches!(l.event, EventType::PointerDown | EventType::PointerMove))
        .copied()
        .collect();
    assert_eq!(pointer.len(), 2);
    assert!(pointer.iter().all(|l| l.capture && l.passive.is_none()));

    vs.handle(&InputEvent::new(InputKind::PointerDown(Point::new(0.0, 0.0))));
    let pointer_move = InputEvent::new(InputKind::PointerMove(Point::new(0.0, 3.0)));
    let mv = vs.handle(&pointer_move).unwrap();
    assert_eq!(mv.delta_y, 3.0 * 2.0);

    vs.off(&cb);
    assert_eq!(vs.host().body_touch_action.as_deref(), Some("auto"));
}

#[test]
fn passive_flag_is_forwarded_to_element_listeners() {
    let mut vs = normalizer(
        touch_support(),
        NormalizerOptions::default()
            .with_use_touch(true)
            .with_passive(Some(true)),
    );
    vs.on(noop());
    assert!(
        vs.bound_listeners()
            .iter()
            .all(|l| l.target == ListenerTarget::Element && l.passive == Some(true))
    );
}

#[test]
fn position_is_the_running_sum_of_deltas() {
    for seed in 0..16u64 {
        let mut rng = Lcg::new(seed);
        let support = Support {
            is_firefox: rng.gen_bool(),
            is_windows: rng.gen_bool(),
            ..Support::desktop()
        };
        let mut vs = normalizer(support, NormalizerOptions::default());
        let seen = record(&mut vs);

        let events = rng.gen_range_i64(1, 64);
        for _ in 0..events {
            let mode = if rng.gen_bool() {
                DeltaMode::Line
            } else {
                DeltaMode::Pixel
            };
            let wheel = WheelInput::new(
                rng.gen_range_i64(-500, 500) as f64,
                rng.gen_range_i64(-500, 500) as f64,
            )
            .with_delta_mode(mode);
            let evt = InputEvent::new(InputKind::Wheel(wheel));
            let out = vs.handle(&evt).unwrap();

            let (sx, sy) = seen
                .borrow()
                .iter()
                .fold((0.0, 0.0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
            assert!((out.x - sx).abs() < 1e-6, "seed={seed}");
            assert!((out.y - sy).abs() < 1e-6, "seed={seed}");
        }
    }
}

#[test]
fn detect_reads_the_probe() {
    struct Probe;

    impl PlatformProbe for Probe {
        fn supports_event(&self, event: &str) -> bool {
            matches!(event, "wheel" | "touchstart" | "keydown")
        }
        fn user_agent(&self) -> &str {
            "Mozilla/5.0 (Windows NT 10.0; rv:120.0) Gecko/20100101 Firefox/120.0"
        }
        fn platform(&self) -> &str {
            "Win32"
        }
        fn max_touch_points(&self) -> u32 {
            0
        }
    }

    let support = Support::detect(&Probe);
    assert_eq!(
        support,
        Support {
            has_wheel_event: true,
            has_mouse_wheel_event: false,
            has_touch: true,
            has_touch_win: false,
            has_pointer: false,
            has_key_down: true,
            is_firefox: true,
            is_windows: true,
        }
    );
}

#[test]
fn key_codes_round_trip_known_keys() {
    assert_eq!(Key::from_key_code(37), Key::Left);
    assert_eq!(Key::from_key_code(32), Key::Space);
    assert_eq!(Key::from_key_code(13), Key::Other(13));
    assert_eq!(Key::Down.key_code(), 40);
}
