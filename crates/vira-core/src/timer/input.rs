//! Manual duration entry validation.
//!
//! The editor presents two free-text fields (minutes and seconds). Nothing
//! here can fail: junk characters are stripped, empty input reads as zero,
//! out-of-range values are clamped. Callers are responsible for only
//! applying the composed duration while the engine is idle.

/// Upper bound for a single minutes or seconds field.
pub const MAX_FIELD: u64 = 59;

/// Largest manually enterable duration: 59 minutes 59 seconds.
pub const MAX_MANUAL_MS: u64 = MAX_FIELD * 60_000 + MAX_FIELD * 1_000;

/// Parse one entry field into an in-range value.
///
/// Strips non-digit characters, treats empty input as zero and clamps the
/// result to `[0, max]`. A digit string too long to fit in a `u64` is also
/// clamped to `max`.
pub fn parse_field(raw: &str, max: u64) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().map_or(max, |value| value.min(max))
}

/// The zero-padded two-digit text form of a field value.
pub fn field_text(value: u64) -> String {
    format!("{value:02}")
}

/// Compose minutes and seconds fields into milliseconds.
pub fn compose_duration_ms(minutes: u64, seconds: u64) -> u64 {
    minutes
        .saturating_mul(60_000)
        .saturating_add(seconds.saturating_mul(1_000))
}

/// Split a duration back into (minutes, seconds) fields, dropping any
/// sub-second remainder. Used to populate the editor from a previously
/// configured duration.
pub fn split_duration_ms(ms: u64) -> (u64, u64) {
    let total_secs = ms / 1_000;
    (total_secs / 60, total_secs % 60)
}
