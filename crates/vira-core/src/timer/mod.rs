mod display;
mod engine;
mod input;
mod presets;
mod ticker;

pub use display::{format, Precision};
pub use engine::{
    TimerEngine, TimerMode, TimerStatus, COUNTDOWN_TICK_MS, STOPWATCH_TICK_MS,
};
pub use input::{
    compose_duration_ms, field_text, parse_field, split_duration_ms, MAX_FIELD, MAX_MANUAL_MS,
};
pub use presets::{PresetSelector, PRESET_MINUTES};
pub use ticker::drive;
