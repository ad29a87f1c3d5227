use clap::Subcommand;
use vira_core::timer::drive;
use vira_core::{Config, TimerEngine};

use super::emit;

#[derive(Subcommand)]
pub enum StopwatchAction {
    /// Run the stopwatch; stops on Ctrl-C or after --for seconds
    Run {
        /// Stop automatically after this many seconds
        #[arg(long = "for")]
        for_secs: Option<u64>,
        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: StopwatchAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_default();

    match action {
        StopwatchAction::Run { for_secs, json } => {
            let json = json || config.output.json;
            let mut engine = TimerEngine::stopwatch();

            let started = engine.start().ok_or("stopwatch failed to start")?;
            emit(&started, json)?;

            // A stopwatch never completes on its own; run until the time
            // limit or an interrupt cancels the driver.
            tokio::select! {
                _ = drive(&mut engine, |e| {
                    if json {
                        let _ = emit(&e.snapshot(), true);
                    } else {
                        println!("{}", e.formatted());
                    }
                }) => {}
                _ = stop_signal(for_secs) => {}
            }

            if let Some(paused) = engine.pause() {
                emit(&paused, json)?;
                if !json {
                    println!("stopped at {}", engine.formatted());
                }
            }
        }
    }

    Ok(())
}

async fn stop_signal(for_secs: Option<u64>) {
    match for_secs {
        Some(secs) => tokio::time::sleep(std::time::Duration::from_secs(secs)).await,
        None => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}
