use clap::Subcommand;
use vira_core::timer::{compose_duration_ms, drive, parse_field, MAX_FIELD};
use vira_core::{Config, PresetSelector, TimerEngine};

use super::emit;

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Run a countdown to zero, printing the remaining time every second
    Run {
        /// Target minutes (0-59; combined with --seconds)
        #[arg(long, conflicts_with = "preset")]
        minutes: Option<String>,
        /// Target seconds (0-59)
        #[arg(long, conflicts_with = "preset")]
        seconds: Option<String>,
        /// Use a preset duration, in minutes
        #[arg(long)]
        preset: Option<u64>,
        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the preset durations
    Presets,
}

pub async fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_default();
    let selector = PresetSelector::with_presets(config.timer.presets_min.clone());

    match action {
        CountdownAction::Run {
            minutes,
            seconds,
            preset,
            json,
        } => {
            let json = json || config.output.json;
            let mut engine = TimerEngine::countdown();

            if let Some(min) = preset {
                if selector.select(&mut engine, min).is_none() {
                    return Err(format!(
                        "unknown preset: {min} (available: {:?})",
                        selector.presets()
                    )
                    .into());
                }
            } else {
                // Free-text entry path: junk is stripped, out-of-range
                // values clamp to 59, exactly like the editor fields.
                let target_ms = match (&minutes, &seconds) {
                    (None, None) => config.timer.default_countdown_min * 60_000,
                    _ => compose_duration_ms(
                        parse_field(minutes.as_deref().unwrap_or(""), MAX_FIELD),
                        parse_field(seconds.as_deref().unwrap_or(""), MAX_FIELD),
                    ),
                };
                engine.set_duration(target_ms);
            }

            let started = engine
                .start()
                .ok_or("countdown duration must be greater than zero")?;
            emit(&started, json)?;

            let completed = tokio::select! {
                done = drive(&mut engine, |e| {
                    if json {
                        let _ = emit(&e.snapshot(), true);
                    } else {
                        println!("{}", e.formatted());
                    }
                }) => done,
                _ = tokio::signal::ctrl_c() => None,
            };

            match completed {
                Some(event) => {
                    emit(&event, json)?;
                    if !json {
                        println!("done");
                    }
                }
                None => {
                    // Interrupted: the driver is already cancelled, so the
                    // pause freezes a stable remaining value.
                    if let Some(paused) = engine.pause() {
                        emit(&paused, json)?;
                        if !json {
                            println!("paused at {}", engine.formatted());
                        }
                    }
                }
            }
        }
        CountdownAction::Presets => {
            for minutes in selector.presets() {
                println!("{minutes} min");
            }
        }
    }

    Ok(())
}
