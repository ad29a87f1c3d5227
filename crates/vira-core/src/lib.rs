//! # Vira Core Library
//!
//! Core timing engine for Vira: an ascending stopwatch and a descending
//! countdown timer, each pausable, resumable and resettable, with a
//! user-editable target duration for the countdown.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a wall-clock-based state machine that requires the
//!   caller to invoke `tick()` periodically; elapsed/remaining time is
//!   derived from timestamp deltas on every read, so delayed ticks never
//!   accumulate drift
//! - **Clock**: trait boundary over the system clock, with a manual clock
//!   for deterministic tests
//! - **Display / Input / Presets**: pure helpers around the engine for
//!   `mm:ss(.cc)` formatting, manual duration entry and preset durations
//! - **Ticker**: async driver owning the engine's single periodic
//!   recomputation source; cancellation is synchronous
//! - **Storage**: TOML-based configuration for the CLI front end
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`PresetSelector`]: preset countdown durations
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ConfigError;
pub use events::Event;
pub use storage::Config;
pub use timer::{
    drive, PresetSelector, TimerEngine, TimerMode, TimerStatus, PRESET_MINUTES,
};
