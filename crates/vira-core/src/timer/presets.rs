//! Countdown duration presets.
//!
//! A fixed ordered list of shortcut durations. Selection only applies while
//! the engine is idle; the highlighted preset is derived from the engine's
//! configured target, so setting any other duration clears it without the
//! selector having to watch for changes.

use crate::clock::Clock;
use crate::events::Event;

use super::engine::TimerEngine;

/// The built-in preset durations, in minutes.
pub const PRESET_MINUTES: [u64; 4] = [1, 5, 10, 15];

#[derive(Debug, Clone)]
pub struct PresetSelector {
    presets: Vec<u64>,
}

impl PresetSelector {
    /// Selector over the built-in preset list.
    pub fn new() -> Self {
        Self::with_presets(PRESET_MINUTES.to_vec())
    }

    /// Selector over a custom minute list (e.g. from configuration).
    pub fn with_presets(presets: Vec<u64>) -> Self {
        Self { presets }
    }

    /// The ordered preset list, in minutes.
    pub fn presets(&self) -> &[u64] {
        &self.presets
    }

    /// Apply a preset to the engine.
    ///
    /// No-op (`None`) when `minutes` is not in the list or the engine is not
    /// idle; `set_duration` enforces the latter.
    pub fn select<C: Clock>(&self, engine: &mut TimerEngine<C>, minutes: u64) -> Option<Event> {
        if !self.presets.contains(&minutes) {
            return None;
        }
        engine.set_duration(minutes.saturating_mul(60_000))
    }

    /// The preset matching the engine's configured target, if any.
    /// This is what a UI highlights; it clears as soon as the target is
    /// changed by any other means.
    pub fn active<C: Clock>(&self, engine: &TimerEngine<C>) -> Option<u64> {
        self.presets
            .iter()
            .copied()
            .find(|minutes| minutes.saturating_mul(60_000) == engine.target_ms())
    }
}

impl Default for PresetSelector {
    fn default() -> Self {
        Self::new()
    }
}
