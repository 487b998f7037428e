// Tests for the silence detector
//
// These cover the timer-accumulation rules: silence only counts once the
// session has run past the minimum recording duration, any loud window resets
// the countdown, and the stop trigger fires on the exact tick the accumulated
// silence exceeds the configured duration.

use std::time::Duration;
use voicecap::{SilenceDetector, VadConfig, VadDecision};

fn detector(min_ms: u64, threshold: f32, silence_ms: u64) -> SilenceDetector {
    SilenceDetector::new(VadConfig {
        min_recording_duration: Duration::from_millis(min_ms),
        silence_threshold: threshold,
        silence_duration: Duration::from_millis(silence_ms),
        window_size: 160,
    })
}

#[test]
fn test_average_volume_empty() {
    assert_eq!(SilenceDetector::average_volume(&[]), 0.0);
}

#[test]
fn test_average_volume_uses_absolute_values() {
    // Mean of |0.5|, |-0.5|, |0.5|, |-0.5| is 0.5, not 0.0
    let samples = [0.5, -0.5, 0.5, -0.5];
    let avg = SilenceDetector::average_volume(&samples);
    assert!((avg - 0.5).abs() < 1e-6, "avg {} should be 0.5", avg);
}

#[test]
fn test_loud_window_resets_timer() {
    let mut detector = detector(0, 0.01, 500);
    let silent = vec![0.0f32; 160];
    let loud = vec![0.5f32; 160];
    let dt = Duration::from_millis(100);

    let mut elapsed = Duration::from_millis(100);
    for _ in 0..4 {
        detector.evaluate(&silent, dt, elapsed);
        elapsed += dt;
    }
    assert_eq!(detector.silence_timer(), Duration::from_millis(400));

    // One loud window zeroes the accumulated silence
    let decision = detector.evaluate(&loud, dt, elapsed);
    assert_eq!(decision, VadDecision::Continue);
    assert_eq!(detector.silence_timer(), Duration::ZERO);
}

#[test]
fn test_window_at_threshold_is_not_silent() {
    // avg == threshold must not count as silence (strict less-than)
    let mut detector = detector(0, 0.01, 100);
    let at_threshold = vec![0.01f32; 160];
    let dt = Duration::from_millis(100);

    for i in 1..=10u32 {
        let decision = detector.evaluate(&at_threshold, dt, dt * i);
        assert_eq!(decision, VadDecision::Continue);
        assert_eq!(detector.silence_timer(), Duration::ZERO);
    }
}

#[test]
fn test_no_trigger_before_min_recording_duration() {
    let mut detector = detector(500, 0.01, 100);
    let silent = vec![0.0f32; 160];
    let dt = Duration::from_millis(100);

    // Total silence, but elapsed never exceeds the minimum: timer stays zero
    for i in 1..=5u32 {
        let elapsed = dt * i; // 100ms .. 500ms, never > 500ms
        let decision = detector.evaluate(&silent, dt, elapsed);
        assert_eq!(decision, VadDecision::Continue);
        assert_eq!(detector.silence_timer(), Duration::ZERO);
    }
}

#[test]
fn test_timer_grows_by_dt_each_silent_tick() {
    let mut detector = detector(0, 0.01, 10_000);
    let silent = vec![0.0f32; 160];
    let dt = Duration::from_millis(100);

    for i in 1..=20u32 {
        detector.evaluate(&silent, dt, dt * i);
        assert_eq!(detector.silence_timer(), dt * i);
    }
}

#[test]
fn test_trigger_on_sixth_silent_tick() {
    // min=0.5s, threshold=0.01, silence=0.5s, dt=100ms, starting at
    // elapsed=0.5s: the timer reaches 600ms on the 6th tick and only then
    // exceeds the 500ms silence duration.
    let mut detector = detector(500, 0.01, 500);
    let silent = vec![0.0f32; 160];
    let dt = Duration::from_millis(100);
    let mut elapsed = Duration::from_millis(500);

    for tick in 1..=6 {
        elapsed += dt;
        let decision = detector.evaluate(&silent, dt, elapsed);

        if tick < 6 {
            assert_eq!(
                decision,
                VadDecision::Continue,
                "must not trigger on tick {}",
                tick
            );
        } else {
            assert_eq!(decision, VadDecision::TriggerStop, "must trigger on tick 6");
            assert_eq!(detector.silence_timer(), Duration::from_millis(600));
        }
    }
}

#[test]
fn test_loud_interruption_restarts_countdown() {
    let mut detector = detector(0, 0.01, 500);
    let silent = vec![0.0f32; 160];
    let loud = vec![0.5f32; 160];
    let dt = Duration::from_millis(100);
    let mut elapsed = Duration::ZERO;
    let mut tick = |detector: &mut SilenceDetector, window: &[f32]| {
        elapsed += dt;
        detector.evaluate(window, dt, elapsed)
    };

    // Four silent ticks, one loud, then the countdown starts over
    for _ in 0..4 {
        assert_eq!(tick(&mut detector, &silent), VadDecision::Continue);
    }
    assert_eq!(tick(&mut detector, &loud), VadDecision::Continue);
    assert_eq!(detector.silence_timer(), Duration::ZERO);

    for i in 1..=5 {
        assert_eq!(
            tick(&mut detector, &silent),
            VadDecision::Continue,
            "tick {} after reset must continue",
            i
        );
    }
    assert_eq!(tick(&mut detector, &silent), VadDecision::TriggerStop);
}

#[test]
fn test_reset_clears_timer() {
    let mut detector = detector(0, 0.01, 10_000);
    let silent = vec![0.0f32; 160];
    let dt = Duration::from_millis(100);

    detector.evaluate(&silent, dt, dt);
    assert!(detector.silence_timer() > Duration::ZERO);

    detector.reset();
    assert_eq!(detector.silence_timer(), Duration::ZERO);
}

#[test]
fn test_default_config() {
    let config = VadConfig::default();
    assert_eq!(config.min_recording_duration, Duration::from_millis(500));
    assert_eq!(config.silence_threshold, 0.01);
    assert_eq!(config.silence_duration, Duration::from_millis(500));
    assert_eq!(config.window_size, 1600);
}
