use super::*;
use crate::easing::Easing;
use crate::spec::{Stagger, TweenSpec};

fn opacity_timeline(units: usize) -> Timeline {
    Timeline::new(
        units,
        TweenSpec::tween(100, Easing::Linear),
        Stagger::per_index(50),
    )
    .track(Property::Opacity, 0.0, 1.0)
}

#[test]
fn unstarted_timeline_holds_from_values() {
    let timeline = opacity_timeline(3);
    for unit in 0..3 {
        let sample = timeline.sample_unit(1000, unit);
        assert_eq!(sample.as_slice(), &[(Property::Opacity, 0.0)]);
    }
    assert!(!timeline.is_finished(1000));
}

#[test]
fn unopened_stagger_window_holds_from_value() {
    let mut timeline = opacity_timeline(3);
    timeline.start(0);

    // At 60ms: unit 0 opened at 0 and is 60% through, unit 1 opened at
    // 50ms (20%), unit 2 opens at 100ms and must still hold `from`.
    assert!((timeline.progress_for(60, 0) - 0.6).abs() < 1e-5);
    assert!((timeline.progress_for(60, 1) - 0.2).abs() < 1e-5);
    assert_eq!(timeline.progress_for(60, 2), 0.0);
}

#[test]
fn closed_window_holds_to_value() {
    let mut timeline = opacity_timeline(3);
    timeline.start(0);
    assert_eq!(timeline.progress_for(150, 0), 1.0);
    let sample = timeline.sample_unit(150, 0);
    assert_eq!(sample.as_slice(), &[(Property::Opacity, 1.0)]);
}

#[test]
fn finishes_when_last_unit_window_closes() {
    let mut timeline = opacity_timeline(3);
    timeline.start(0);
    // last unit: delay 100ms + duration 100ms
    assert!(!timeline.is_finished(199));
    assert!(timeline.is_finished(200));
}

#[test]
fn finished_edge_fires_exactly_once() {
    let mut timeline = opacity_timeline(2);
    timeline.start(0);
    assert!(!timeline.poll_finished(100));
    assert!(timeline.poll_finished(500));
    assert!(!timeline.poll_finished(600));

    // Restart re-arms the edge.
    timeline.start(1000);
    assert!(!timeline.poll_finished(1000));
    assert!(timeline.poll_finished(2000));
}

#[test]
fn lead_in_delay_shifts_every_window() {
    let mut timeline = Timeline::new(
        2,
        TweenSpec::tween(100, Easing::Linear).with_delay(300),
        Stagger::per_index(50),
    )
    .track(Property::Opacity, 0.0, 1.0);
    timeline.start(0);

    assert_eq!(timeline.progress_for(299, 0), 0.0);
    assert!((timeline.progress_for(350, 0) - 0.5).abs() < 1e-5);
    assert_eq!(timeline.progress_for(349, 1), 0.0);
}

#[test]
fn two_track_sample_carries_both_properties() {
    let mut timeline = Timeline::new(
        1,
        TweenSpec::tween(100, Easing::Linear),
        Stagger::none(),
    )
    .track(Property::TranslateX, -50.0, 0.0)
    .track(Property::Opacity, 0.0, 1.0);
    timeline.start(0);

    let sample = timeline.sample_unit(50, 0);
    assert_eq!(
        sample.as_slice(),
        &[(Property::TranslateX, -25.0), (Property::Opacity, 0.5)]
    );
}

#[test]
fn empty_timeline_finishes_immediately() {
    let mut timeline = opacity_timeline(0);
    timeline.start(0);
    assert!(timeline.is_finished(0));
    assert!(timeline.poll_finished(0));
}

#[test]
fn presets_match_the_published_timings() {
    let mut title = presets::title_slide_in(10);
    title.start(0);
    // unit 9: 15ms * 9 stagger + 600ms duration
    assert!(!title.is_finished(734));
    assert!(title.is_finished(735));

    let mut body = presets::body_fade_in(4);
    body.start(0);
    // unit 3: 25ms * (3 + 1) + 2250ms
    assert!(body.is_finished(2350));
    assert!(!body.is_finished(2349));
}
