// File: crates/histogram-core/tests/animation.rs
// Purpose: Transition interpolation, easing curve and staggered bar growth.

mod support;

use histogram_core::{Easing, MemoryHost, Renderer, Samples, Transition};
use support::{afternoon, approx, five_then_threes};

#[test]
fn transition_clamps_outside_its_window() {
    let t = Transition::new("height", 0.0, 40.0).delay(100.0).duration(500.0).ease(Easing::Linear);
    assert_eq!(t.value_at(0.0), 0.0);
    assert_eq!(t.value_at(100.0), 0.0);
    assert!(approx(t.value_at(350.0), 20.0));
    assert_eq!(t.value_at(600.0), 40.0);
    assert_eq!(t.value_at(10_000.0), 40.0);
    assert_eq!(t.end_ms(), 600.0);
    assert!(t.is_finished(600.0));
    assert!(!t.is_finished(599.0));
}

#[test]
fn zero_duration_jumps_to_target() {
    let t = Transition::new("y", 50.0, 10.0).delay(20.0);
    assert_eq!(t.value_at(19.0), 50.0);
    assert_eq!(t.value_at(20.0), 10.0);
}

#[test]
fn cubic_in_out_is_symmetric() {
    let e = Easing::CubicInOut;
    assert_eq!(e.apply(0.0), 0.0);
    assert_eq!(e.apply(1.0), 1.0);
    assert!(approx(e.apply(0.5), 0.5));
    assert!(approx(e.apply(0.25) + e.apply(0.75), 1.0));
    assert!(e.apply(0.25) < 0.25);
}

#[test]
fn bars_grow_from_zero_with_right_to_left_cascade() {
    let host = MemoryHost::new();
    let c = host.add_container(500.0);
    let samples = Samples::try_new(five_then_threes()).unwrap();
    Renderer::default().render(&host, c, &samples, afternoon()).unwrap();

    let frame = host.frame(c).unwrap();
    assert!(frame.bars().iter().all(|b| b.get_num("height") == Some(0.0)));
    assert!(frame.bars().iter().all(|b| b.get_num("y") == Some(50.0)));
    assert!(host.is_animating(c));

    // Bar 47 starts after 20ms; halfway through its 500ms growth it is at half height.
    host.advance(270.0);
    let frame = host.frame(c).unwrap();
    assert!(approx(frame.bar(47).unwrap().get_num("height").unwrap(), 15.0));
    assert_eq!(frame.bar(0).unwrap().get_num("height"), Some(0.0));

    // Bar 0 waits 960ms and finishes at 1460ms.
    host.advance(1190.0);
    let frame = host.frame(c).unwrap();
    assert_eq!(frame.bar(0).unwrap().get_num("height"), Some(50.0));
    assert_eq!(frame.bar(0).unwrap().get_num("y"), Some(0.0));
    assert_eq!(frame.bar(47).unwrap().get_num("height"), Some(30.0));
    assert!(!host.is_animating(c));
}
