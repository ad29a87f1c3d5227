//! Async tick driver.
//!
//! The engine itself is synchronous; this is the single periodic
//! recomputation source that drives it while running. Exactly one driver
//! may exist per engine at a time - enforced by the `&mut` borrow - and
//! cancellation is dropping the future (e.g. losing a `tokio::select!`),
//! after which no tick can mutate the engine.

use tokio::time::{interval, MissedTickBehavior};

use crate::clock::Clock;
use crate::events::Event;

use super::engine::TimerEngine;

/// Drive a running engine until it completes or stops running.
///
/// Ticks at the engine's `tick_interval()`, invoking `on_tick` after each
/// recomputation. Returns the completion event when a countdown finishes,
/// or `None` if the engine is not (or no longer) running. A stopwatch never
/// completes; its driver runs until cancelled.
pub async fn drive<C, F>(engine: &mut TimerEngine<C>, mut on_tick: F) -> Option<Event>
where
    C: Clock,
    F: FnMut(&TimerEngine<C>),
{
    let period = engine.tick_interval()?;
    let mut ticker = interval(period);
    // A late tick must not be followed by a burst of catch-up ticks; the
    // engine derives time from the clock, so skipped ticks lose nothing.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await; // First tick completes immediately.
    loop {
        ticker.tick().await;
        let completed = engine.tick();
        on_tick(engine);
        if completed.is_some() {
            return completed;
        }
        if engine.tick_interval().is_none() {
            return None;
        }
    }
}
