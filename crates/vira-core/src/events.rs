use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerStatus};

/// Every accepted state transition produces an Event.
/// A UI layer polls snapshots or subscribes to the driver's ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        /// Remaining (countdown) or elapsed (stopwatch) at start.
        display_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        display_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    DurationSet {
        target_ms: u64,
        at: DateTime<Utc>,
    },
    /// A countdown's remaining time reached zero.
    TimerCompleted {
        target_ms: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        status: TimerStatus,
        target_ms: u64,
        elapsed_ms: u64,
        remaining_ms: u64,
        display: String,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = Event::DurationSet {
            target_ms: 600_000,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "DurationSet");
        assert_eq!(json["target_ms"], 600_000);
    }

    #[test]
    fn snapshot_round_trips() {
        let event = Event::StateSnapshot {
            mode: TimerMode::Countdown,
            status: TimerStatus::Idle,
            target_ms: 60_000,
            elapsed_ms: 0,
            remaining_ms: 60_000,
            display: "01:00".into(),
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, Event::StateSnapshot { remaining_ms: 60_000, .. }));
    }
}
