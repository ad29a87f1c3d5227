//! End-to-end engine scenarios on a manual clock.
//!
//! These walk the full interaction sequences a screen would perform:
//! configure, start, interrupt, resume, complete, reset.

use vira_core::timer::{format, Precision};
use vira_core::{ManualClock, PresetSelector, TimerEngine, TimerMode, TimerStatus};

fn countdown(clock: &ManualClock, target_ms: u64) -> TimerEngine<ManualClock> {
    let mut engine = TimerEngine::with_clock(TimerMode::Countdown, clock.clone());
    assert!(engine.set_duration(target_ms).is_some());
    engine
}

#[test]
fn interrupted_countdown_runs_to_completion() {
    let clock = ManualClock::default();
    let mut engine = countdown(&clock, 5_000);

    assert!(engine.start().is_some());
    clock.advance(3_000);
    assert!(engine.pause().is_some());
    assert_eq!(engine.remaining_ms(), 2_000);
    assert_eq!(engine.status(), TimerStatus::Paused);

    assert!(engine.start().is_some());
    clock.advance(2_000);
    engine.tick();
    assert_eq!(engine.status(), TimerStatus::Completed);
    assert_eq!(engine.remaining_ms(), 0);
    assert_eq!(engine.formatted(), "00:00");
}

#[test]
fn countdown_never_completes_early() {
    let clock = ManualClock::default();
    let mut engine = countdown(&clock, 10_000);
    engine.start();

    // remaining(t0 + delta) = max(0, T - delta), checked at awkward offsets.
    for (delta, expected) in [(1, 9_999), (2_499, 7_500), (7_499, 2_501), (9_999, 1)] {
        clock.set_ms(delta);
        assert_eq!(engine.remaining_ms(), expected);
        assert!(engine.tick().is_none());
        assert_eq!(engine.status(), TimerStatus::Running);
    }
    clock.set_ms(10_000);
    assert!(engine.tick().is_some());
    assert_eq!(engine.status(), TimerStatus::Completed);
}

#[test]
fn stopwatch_pause_and_display() {
    let clock = ManualClock::default();
    let mut engine = TimerEngine::with_clock(TimerMode::Stopwatch, clock.clone());

    engine.start();
    clock.advance(1_234);
    engine.pause();
    assert_eq!(engine.elapsed_ms(), 1_234);
    assert_eq!(engine.formatted(), "00:01.23");
    assert_eq!(format(engine.elapsed_ms(), Precision::Centiseconds), "00:01.23");
}

#[test]
fn reset_from_completed_restores_the_target() {
    let clock = ManualClock::default();
    let mut engine = countdown(&clock, 5_000);
    engine.start();
    clock.advance(5_000);
    engine.tick();
    assert_eq!(engine.status(), TimerStatus::Completed);

    engine.reset();
    assert_eq!(engine.status(), TimerStatus::Idle);
    assert_eq!(engine.remaining_ms(), 5_000);
    assert_eq!(engine.target_ms(), 5_000);
}

#[test]
fn reset_from_completed_zeroes_a_stopwatch() {
    let clock = ManualClock::default();
    let mut engine = TimerEngine::with_clock(TimerMode::Stopwatch, clock.clone());
    engine.start();
    clock.advance(90_000);
    engine.reset();
    assert_eq!(engine.status(), TimerStatus::Idle);
    assert_eq!(engine.elapsed_ms(), 0);
    assert_eq!(engine.formatted(), "00:00.00");
}

#[test]
fn preset_selection_is_gated_on_idle() {
    let clock = ManualClock::default();
    let mut engine = TimerEngine::with_clock(TimerMode::Countdown, clock.clone());
    let selector = PresetSelector::new();

    assert!(selector.select(&mut engine, 10).is_some());
    assert_eq!(engine.target_ms(), 600_000);
    assert_eq!(engine.remaining_ms(), 600_000);

    engine.start();
    // The identical call while running is a no-op.
    assert!(selector.select(&mut engine, 10).is_none());
    assert!(selector.select(&mut engine, 1).is_none());
    assert_eq!(engine.target_ms(), 600_000);
}

#[test]
fn repeated_pause_resume_accumulates_exactly() {
    let clock = ManualClock::default();
    let mut engine = TimerEngine::with_clock(TimerMode::Stopwatch, clock.clone());

    // Five 1-second runs separated by long pauses.
    for _ in 0..5 {
        engine.start();
        clock.advance(1_000);
        engine.pause();
        clock.advance(60_000);
    }
    assert_eq!(engine.elapsed_ms(), 5_000);
    assert_eq!(engine.formatted(), "00:05.00");
}
