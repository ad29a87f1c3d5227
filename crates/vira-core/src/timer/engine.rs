//! Timer engine implementation.
//!
//! The timer engine is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically while the engine is running. Elapsed and remaining time are
//! always derived from the timestamp delta at read time, never from counting
//! ticks, so a delayed or missed tick introduces no drift.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> (countdown hits 0) -> Completed
//! ```
//!
//! `reset()` is reachable from every state and returns to `Idle`;
//! `Completed` is terminal until reset.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::countdown();
//! engine.set_duration(5 * 60_000);
//! engine.start();
//! // In a loop, at engine.tick_interval():
//! engine.tick(); // Returns Some(Event::TimerCompleted) at zero.
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::events::Event;

use super::display::{self, Precision};

/// Tick period while a stopwatch runs; short enough for a centisecond display.
pub const STOPWATCH_TICK_MS: u64 = 100;

/// Tick period while a countdown runs; the display only has whole seconds.
pub const COUNTDOWN_TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Ascending elapsed-time counter with no intrinsic upper bound.
    Stopwatch,
    /// Descending timer from a configured target duration to zero.
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Core timer engine.
///
/// Operates on wall-clock deltas -- no internal thread. Mutating operations
/// return `Some(Event)` on success and `None` when a precondition rejects
/// the transition; nothing here ever errors.
#[derive(Debug, Clone)]
pub struct TimerEngine<C: Clock = SystemClock> {
    clock: C,
    mode: TimerMode,
    status: TimerStatus,
    /// Configured target duration in milliseconds. Always 0 for a stopwatch.
    target_ms: u64,
    /// Elapsed time folded in at the last pause. Authoritative while not
    /// running; while running the live value adds the current run's delta.
    elapsed_at_pause_ms: u64,
    /// Timestamp (ms since epoch) of the current run's start.
    /// Present iff `status == Running`.
    run_started_at_ms: Option<u64>,
}

impl TimerEngine<SystemClock> {
    /// Create an idle stopwatch on the system clock.
    pub fn stopwatch() -> Self {
        Self::with_clock(TimerMode::Stopwatch, SystemClock)
    }

    /// Create an idle countdown on the system clock, with no duration set.
    pub fn countdown() -> Self {
        Self::with_clock(TimerMode::Countdown, SystemClock)
    }
}

impl<C: Clock> TimerEngine<C> {
    /// Create an idle engine reading time from `clock`.
    pub fn with_clock(mode: TimerMode, clock: C) -> Self {
        Self {
            clock,
            mode,
            status: TimerStatus::Idle,
            target_ms: 0,
            elapsed_at_pause_ms: 0,
            run_started_at_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    /// Live elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        let running = self
            .run_started_at_ms
            .map(|started| self.clock.now_ms().saturating_sub(started))
            .unwrap_or(0);
        self.elapsed_at_pause_ms.saturating_add(running)
    }

    /// Live remaining time in milliseconds. Always 0 for a stopwatch.
    pub fn remaining_ms(&self) -> u64 {
        match self.mode {
            TimerMode::Countdown => self.target_ms.saturating_sub(self.elapsed_ms()),
            TimerMode::Stopwatch => 0,
        }
    }

    /// The value a display should show: remaining for a countdown, elapsed
    /// for a stopwatch.
    pub fn display_ms(&self) -> u64 {
        match self.mode {
            TimerMode::Countdown => self.remaining_ms(),
            TimerMode::Stopwatch => self.elapsed_ms(),
        }
    }

    /// Formatted display value: `mm:ss` for a countdown, `mm:ss.cc` for a
    /// stopwatch.
    pub fn formatted(&self) -> String {
        let precision = match self.mode {
            TimerMode::Countdown => Precision::Seconds,
            TimerMode::Stopwatch => Precision::Centiseconds,
        };
        display::format(self.display_ms(), precision)
    }

    /// The period the single periodic recomputation source should run at,
    /// or `None` when no source may be armed. A scheduler driving this
    /// engine must stand down as soon as this returns `None`, so overlapping
    /// schedules cannot exist.
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.status != TimerStatus::Running {
            return None;
        }
        let ms = match self.mode {
            TimerMode::Stopwatch => STOPWATCH_TICK_MS,
            TimerMode::Countdown => COUNTDOWN_TICK_MS,
        };
        Some(Duration::from_millis(ms))
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            status: self.status,
            target_ms: self.target_ms,
            elapsed_ms: self.elapsed_ms(),
            remaining_ms: self.remaining_ms(),
            display: self.formatted(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or resume a run.
    ///
    /// Valid from `Idle` or `Paused`; a countdown additionally needs a
    /// non-zero target. No-op while `Running` or `Completed` (a finished
    /// countdown must be `reset()` first).
    pub fn start(&mut self) -> Option<Event> {
        match self.status {
            TimerStatus::Idle | TimerStatus::Paused => {
                if self.mode == TimerMode::Countdown && self.target_ms == 0 {
                    return None;
                }
                self.run_started_at_ms = Some(self.clock.now_ms());
                self.status = TimerStatus::Running;
                Some(Event::TimerStarted {
                    mode: self.mode,
                    display_ms: self.display_ms(),
                    at: Utc::now(),
                })
            }
            TimerStatus::Running | TimerStatus::Completed => None,
        }
    }

    /// Freeze the current run. Valid only while `Running`.
    ///
    /// The elapsed/remaining value is stable until the next `start()`.
    pub fn pause(&mut self) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }
        let now = self.clock.now_ms();
        if let Some(started) = self.run_started_at_ms.take() {
            self.elapsed_at_pause_ms = self
                .elapsed_at_pause_ms
                .saturating_add(now.saturating_sub(started));
        }
        self.status = TimerStatus::Paused;
        Some(Event::TimerPaused {
            display_ms: self.display_ms(),
            at: Utc::now(),
        })
    }

    /// Return to `Idle` from any state.
    ///
    /// A stopwatch resets to zero elapsed; a countdown keeps its configured
    /// target, so remaining returns to the full duration rather than zero.
    pub fn reset(&mut self) -> Option<Event> {
        self.status = TimerStatus::Idle;
        self.elapsed_at_pause_ms = 0;
        self.run_started_at_ms = None;
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Configure the countdown target. Valid only while `Idle`; rejected
    /// while `Running` or `Paused` so a duration cannot be redefined
    /// mid-session, and rejected entirely on a stopwatch.
    pub fn set_duration(&mut self, ms: u64) -> Option<Event> {
        if self.mode != TimerMode::Countdown || self.status != TimerStatus::Idle {
            return None;
        }
        self.target_ms = ms;
        Some(Event::DurationSet {
            target_ms: ms,
            at: Utc::now(),
        })
    }

    /// Periodic recomputation. Call at `tick_interval()` while running.
    ///
    /// Returns `Some(Event::TimerCompleted)` the moment a countdown's
    /// remaining time reaches zero; the engine is then `Completed` and the
    /// periodic source must stand down.
    pub fn tick(&mut self) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }
        if self.mode == TimerMode::Countdown && self.remaining_ms() == 0 {
            // Freeze elapsed exactly at the target so reads stay stable.
            self.elapsed_at_pause_ms = self.target_ms;
            self.run_started_at_ms = None;
            self.status = TimerStatus::Completed;
            return Some(Event::TimerCompleted {
                target_ms: self.target_ms,
                at: Utc::now(),
            });
        }
        None
    }
}
