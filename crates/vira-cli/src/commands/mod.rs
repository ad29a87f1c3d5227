pub mod config;
pub mod countdown;
pub mod stopwatch;

use vira_core::Event;

/// Print an event as pretty JSON when JSON output is on.
/// Formatted-line output is handled by the run loops themselves.
pub fn emit(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}
