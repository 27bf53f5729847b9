use clap::Subcommand;
use tempo_core::{Config, Event};

use super::format_duration;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a session on an activity (stops the current one first)
    Start {
        /// Activity id
        id: String,
    },
    /// Stop the running session
    Stop,
    /// Print the current session snapshot as JSON
    Status,
    /// Re-render elapsed time at the configured cadence while running
    Watch {
        /// Override the refresh interval in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    match action {
        TimerAction::Start { id } => {
            let mut tracker = super::open_tracker(&config)?;
            for event in tracker.start(&id)? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Stop => {
            let mut tracker = super::open_tracker(&config)?;
            match tracker.stop() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("No session is running"),
            }
        }
        TimerAction::Status => {
            let tracker = super::open_tracker(&config)?;
            println!("{}", serde_json::to_string_pretty(&tracker.snapshot())?);
        }
        TimerAction::Watch { interval } => {
            let interval = interval.unwrap_or(config.ui.refresh_interval_secs).max(1);
            watch(&config, std::time::Duration::from_secs(interval))?;
        }
    }
    Ok(())
}

/// Print one line per tick while a session runs; exit as soon as the
/// tracker is idle. Each tick reloads state and re-queries elapsed time,
/// nothing more -- another invocation stopping the session ends the loop.
fn watch(
    config: &Config,
    interval: std::time::Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let tracker = super::open_tracker(config)?;
        let Event::Snapshot { activity, elapsed_secs, target_secs, .. } = tracker.snapshot()
        else {
            unreachable!("snapshot always returns Event::Snapshot");
        };
        let Some(name) = activity else {
            println!("No session is running");
            return Ok(());
        };

        match target_secs {
            Some(target) if target > 0 => {
                let pct = (elapsed_secs / target as f64 * 100.0).min(100.0);
                println!("{} {} ({pct:.0}% of target)", name, format_duration(elapsed_secs));
            }
            _ => println!("{} {}", name, format_duration(elapsed_secs)),
        }
        std::thread::sleep(interval);
    }
}
