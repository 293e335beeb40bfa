//! End-to-end behavior of the looping track: drag, click, momentum,
//! auto-scroll and the single-driver discipline.

use std::rc::Rc;

use vitrine_core::ViewportClass;
use vitrine_foundation::gesture_constants::AUTO_SCROLL_SPEED;
use vitrine_foundation::track::{LoopingTrack, PanelTarget, TrackMode, CLONE_SETS};
use vitrine_testing::{PointerScript, RecordingHost, TestRuntime};

const ITEM_COUNT: usize = 3;
const ITEM_WIDTH: f32 = 376.0;
const PERIOD: f32 = ITEM_COUNT as f32 * ITEM_WIDTH; // 1128

fn wide_track(runtime: &TestRuntime) -> (LoopingTrack, Rc<RecordingHost>) {
    let host = Rc::new(RecordingHost::new(1280.0));
    let track = LoopingTrack::new(
        ITEM_COUNT,
        ITEM_WIDTH,
        runtime.handle(),
        host.clone(),
        ViewportClass::Wide,
    );
    (track, host)
}

fn narrow_track(runtime: &TestRuntime) -> (LoopingTrack, Rc<RecordingHost>) {
    let host = Rc::new(RecordingHost::new(390.0));
    let track = LoopingTrack::new(
        ITEM_COUNT,
        ITEM_WIDTH,
        runtime.handle(),
        host.clone(),
        ViewportClass::Narrow,
    );
    (track, host)
}

#[test]
fn initial_offset_is_the_middle_set_with_lead_in() {
    let runtime = TestRuntime::new();
    let (track, host) = wide_track(&runtime);
    assert_eq!(track.offset(), -PERIOD - 300.0);
    assert_eq!(track.mode(), TrackMode::Idle);
    // Construction renders once: one offset, one shift per rendered item.
    assert_eq!(host.render_count(), 1);
    assert_eq!(host.shifts().len(), ITEM_COUNT * CLONE_SETS);
}

#[test]
fn click_emits_one_navigate_and_stays_idle() {
    let mut runtime = TestRuntime::new();
    let (track, host) = wide_track(&runtime);

    let target = PanelTarget {
        index: 1,
        url: Some("https://example.com/project".into()),
    };
    // 3px of jitter stays under the 5px slop.
    PointerScript::new()
        .down_on(200.0, 80.0, target)
        .move_to(203.0, 81.0)
        .up()
        .run(&track, &mut runtime);

    assert_eq!(
        host.navigations(),
        vec!["https://example.com/project".to_string()]
    );
    assert_eq!(track.mode(), TrackMode::Idle);
    assert_eq!(runtime.pending_callbacks(), 0, "a click schedules nothing");

    // Idle means idle: frames change nothing.
    let offset = track.offset();
    runtime.advance_frames(10);
    assert_eq!(track.offset(), offset);
    assert_eq!(host.navigations().len(), 1);
}

#[test]
fn click_without_url_is_silently_suppressed() {
    let mut runtime = TestRuntime::new();
    let (track, host) = wide_track(&runtime);

    PointerScript::new()
        .down_on(200.0, 80.0, PanelTarget { index: 2, url: None })
        .up()
        .run(&track, &mut runtime);

    assert!(host.navigations().is_empty());
    assert_eq!(track.mode(), TrackMode::Idle);
}

#[test]
fn click_on_narrow_viewport_also_settles_idle() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = narrow_track(&runtime);
    assert_eq!(track.mode(), TrackMode::AutoScroll);

    // Press stops the auto-scroll; a clean release leaves the track at
    // rest instead of restarting it.
    PointerScript::new().down(100.0, 50.0).up().run(&track, &mut runtime);
    assert_eq!(track.mode(), TrackMode::Idle);
    assert_eq!(runtime.pending_callbacks(), 0);
}

#[test]
fn drag_moves_the_offset_by_the_pointer_delta() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = wide_track(&runtime);
    let start = track.offset();

    track.begin_drag(500.0, 100.0, None);
    track.update_drag(530.0, 100.0);
    assert_eq!(track.offset(), start + 30.0);
    assert_eq!(track.velocity(), 30.0);
    track.update_drag(540.0, 100.0);
    assert_eq!(track.offset(), start + 40.0);
    assert_eq!(track.velocity(), 10.0);
}

#[test]
fn wide_release_decays_to_rest_at_step_ninety() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = wide_track(&runtime);

    // Final move delta of 10px seeds the momentum velocity.
    PointerScript::new()
        .down(1000.0, 100.0)
        .move_to(1020.0, 100.0)
        .move_to(1030.0, 100.0)
        .up()
        .run(&track, &mut runtime);

    assert_eq!(track.mode(), TrackMode::MomentumDecay);
    assert_eq!(track.velocity(), 10.0);

    runtime.advance_frames(89);
    assert_eq!(
        track.mode(),
        TrackMode::MomentumDecay,
        "still decaying at step 89"
    );
    runtime.advance_frames(1);
    assert_eq!(track.mode(), TrackMode::Idle, "at rest on step 90");
    assert_eq!(runtime.pending_callbacks(), 0);

    let offset = track.offset();
    runtime.advance_frames(5);
    assert_eq!(track.offset(), offset, "no driver after rest");
}

#[test]
fn momentum_keeps_the_offset_wrapped() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = wide_track(&runtime);

    // A hard leftward fling: enough travel to cross the wrap boundary.
    PointerScript::new()
        .down(2000.0, 100.0)
        .move_to(1800.0, 100.0)
        .move_to(1700.0, 100.0)
        .up()
        .run(&track, &mut runtime);
    assert_eq!(track.velocity(), -100.0);

    for _ in 0..200 {
        runtime.advance_frames(1);
        let offset = track.offset();
        assert!(
            (-2.0 * PERIOD..=0.0).contains(&offset),
            "offset {offset} escaped the loop window"
        );
    }
    assert_eq!(track.mode(), TrackMode::Idle);
}

#[test]
fn narrow_release_autoscrolls_in_the_drag_direction() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = narrow_track(&runtime);

    // Rightward drag: auto-scroll continues rightward.
    PointerScript::new()
        .down(100.0, 50.0)
        .move_to(130.0, 50.0)
        .up()
        .run(&track, &mut runtime);
    assert_eq!(track.mode(), TrackMode::AutoScroll);
    let before = track.offset();
    runtime.advance_frames(5);
    let delta = track.offset() - before;
    assert!((delta - 5.0 * AUTO_SCROLL_SPEED).abs() < 1e-4, "delta {delta}");
}

#[test]
fn near_still_narrow_release_defaults_leftward() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = narrow_track(&runtime);

    // Crosses the slop (has moved) but the final delta is under the rest
    // threshold, so direction falls back to the default leftward drift.
    track.begin_drag(100.0, 50.0, None);
    track.update_drag(130.0, 50.0);
    track.update_drag(130.05, 50.0);
    track.end_drag();

    assert_eq!(track.mode(), TrackMode::AutoScroll);
    let before = track.offset();
    runtime.advance_frames(10);
    assert!(track.offset() < before, "drifts leftward by default");
}

#[test]
fn viewport_flips_never_double_schedule() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = narrow_track(&runtime);
    assert_eq!(track.mode(), TrackMode::AutoScroll);
    assert_eq!(runtime.pending_callbacks(), 1);

    // Rapid reclassification storm.
    for _ in 0..4 {
        track.set_viewport_class(ViewportClass::Wide);
        track.set_viewport_class(ViewportClass::Narrow);
    }
    assert_eq!(track.mode(), TrackMode::AutoScroll);
    assert_eq!(
        runtime.pending_callbacks(),
        1,
        "exactly one live frame loop after the storm"
    );

    // One driver means one speed: N frames move exactly N * speed.
    let before = track.offset();
    runtime.advance_frames(5);
    let delta = (track.offset() - before).abs();
    assert!(
        (delta - 5.0 * AUTO_SCROLL_SPEED).abs() < 1e-4,
        "delta {delta} implies more than one driver"
    );
}

#[test]
fn switching_wide_cancels_autoscroll() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = narrow_track(&runtime);
    runtime.advance_frames(3);

    track.set_viewport_class(ViewportClass::Wide);
    assert_eq!(track.mode(), TrackMode::Idle);
    assert_eq!(runtime.pending_callbacks(), 0);

    let offset = track.offset();
    runtime.advance_frames(5);
    assert_eq!(track.offset(), offset);
}

#[test]
fn begin_drag_halts_momentum_immediately() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = wide_track(&runtime);

    PointerScript::new()
        .down(1000.0, 100.0)
        .move_to(1050.0, 100.0)
        .up()
        .run(&track, &mut runtime);
    assert_eq!(track.mode(), TrackMode::MomentumDecay);
    runtime.advance_frames(3);

    track.begin_drag(700.0, 100.0, None);
    assert_eq!(track.mode(), TrackMode::Dragging);
    assert_eq!(runtime.pending_callbacks(), 0);

    // The cancelled decay contributes nothing once the drag owns the
    // offset.
    let offset = track.offset();
    runtime.advance_frames(5);
    assert_eq!(track.offset(), offset);
}

#[test]
fn drag_stays_continuous_across_a_wrap() {
    let mut runtime = TestRuntime::new();
    let (track, _host) = wide_track(&runtime);
    // start at -1428; dragging right by 1450 crosses offset 0 and wraps.
    PointerScript::new()
        .down(0.0, 100.0)
        .move_to(1450.0, 100.0)
        .run(&track, &mut runtime);

    let wrapped = track.offset();
    assert!((-2.0 * PERIOD..=0.0).contains(&wrapped));
    assert_eq!(wrapped, 22.0 - PERIOD);

    // The next 10px of pointer travel move the offset by exactly 10px:
    // the wrap shifted the drag origin too.
    track.update_drag(1460.0, 100.0);
    assert!((track.offset() - (wrapped + 10.0)).abs() < 1e-4);
}

#[test]
fn empty_track_is_inert() {
    let mut runtime = TestRuntime::new();
    let host = Rc::new(RecordingHost::new(390.0));
    let track = LoopingTrack::new(
        0,
        ITEM_WIDTH,
        runtime.handle(),
        host.clone(),
        ViewportClass::Narrow,
    );

    assert_eq!(track.mode(), TrackMode::Idle);
    assert_eq!(runtime.pending_callbacks(), 0, "no auto-scroll without items");

    track.begin_drag(10.0, 10.0, None);
    track.update_drag(500.0, 10.0);
    track.end_drag();
    runtime.advance_frames(10);

    assert_eq!(track.offset(), 0.0);
    assert!(track.offset().is_finite());
}

#[test]
fn every_render_includes_a_full_parallax_pass() {
    let runtime = TestRuntime::new();
    let (track, host) = wide_track(&runtime);

    track.begin_drag(500.0, 100.0, None);
    track.update_drag(520.0, 100.0);
    track.update_drag(540.0, 100.0);

    // Construction + two drag frames.
    assert_eq!(host.render_count(), 3);
    assert_eq!(host.shifts().len(), 3 * ITEM_COUNT * CLONE_SETS);
    // Shifts stay within the clamped band around the centering baseline.
    for (_, shift) in host.shifts() {
        assert!((-75.0..=-25.0).contains(&shift), "shift {shift} out of band");
    }
}
