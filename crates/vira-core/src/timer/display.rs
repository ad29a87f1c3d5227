//! Time display formatting.
//!
//! Two precisions exist because the two modes tick at different rates: a
//! countdown renders whole seconds, a stopwatch renders centiseconds.

use serde::{Deserialize, Serialize};

/// Display precision for a millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// `mm:ss`, sub-second remainder truncated.
    Seconds,
    /// `mm:ss.cc`.
    Centiseconds,
}

/// Render a millisecond count as `mm:ss` or `mm:ss.cc`.
///
/// Each component is zero-padded to two digits; minutes are unbounded and
/// simply widen past 99. Truncation (never rounding up) means the displayed
/// `00:00` coincides exactly with a countdown reaching zero.
pub fn format(ms: u64, precision: Precision) -> String {
    let total_secs = ms / 1_000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    match precision {
        Precision::Seconds => format!("{minutes:02}:{seconds:02}"),
        Precision::Centiseconds => {
            let centis = (ms % 1_000) / 10;
            format!("{minutes:02}:{seconds:02}.{centis:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_precision_truncates() {
        assert_eq!(format(0, Precision::Seconds), "00:00");
        // 999 ms is still displayed as 00:00, matching completion at 0.
        assert_eq!(format(999, Precision::Seconds), "00:00");
        assert_eq!(format(1_000, Precision::Seconds), "00:01");
        assert_eq!(format(59_999, Precision::Seconds), "00:59");
        assert_eq!(format(600_000, Precision::Seconds), "10:00");
        assert_eq!(format(3_599_000, Precision::Seconds), "59:59");
    }

    #[test]
    fn centiseconds_precision() {
        assert_eq!(format(0, Precision::Centiseconds), "00:00.00");
        assert_eq!(format(1_234, Precision::Centiseconds), "00:01.23");
        assert_eq!(format(61_009, Precision::Centiseconds), "01:01.00");
        assert_eq!(format(61_019, Precision::Centiseconds), "01:01.01");
    }

    #[test]
    fn minutes_are_unbounded() {
        // A stopwatch left running past an hour keeps counting minutes.
        assert_eq!(format(100 * 60_000, Precision::Centiseconds), "100:00.00");
        assert_eq!(format(100 * 60_000 + 5_430, Precision::Seconds), "100:05");
    }
}
