use clap::Subcommand;
use tempo_core::{Config, TargetSpec, TargetUnit};

use super::format_duration;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add a new activity
    Add {
        /// Activity name
        name: String,
        /// Emoji shown before the name
        #[arg(long)]
        emoji: String,
        /// Hex color (defaults to the configured color)
        #[arg(long)]
        color: Option<String>,
        /// Target duration value (0 for no target)
        #[arg(long, default_value = "0")]
        target: u64,
        /// Unit of the target duration
        #[arg(long, value_enum, default_value = "none")]
        unit: Unit,
    },
    /// Remove an activity by id
    Remove {
        /// Activity id (see `activity list`)
        id: String,
    },
    /// List the catalog in order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Unit {
    Hours,
    Minutes,
    None,
}

impl From<Unit> for TargetUnit {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Hours => TargetUnit::Hours,
            Unit::Minutes => TargetUnit::Minutes,
            Unit::None => TargetUnit::None,
        }
    }
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let mut tracker = super::open_tracker(&config)?;

    match action {
        ActivityAction::Add { name, emoji, color, target, unit } => {
            let color = color.unwrap_or_else(|| config.ui.default_color.clone());
            let spec = TargetSpec { value: target, unit: unit.into() };
            let activity = tracker.add_activity(&emoji, &name, &color, spec)?;
            println!("Added {} ({})", activity.name, activity.id);
        }
        ActivityAction::Remove { id } => {
            let (removed, finalized) = tracker.remove_activity(&id)?;
            if let Some(entry) = finalized {
                println!(
                    "Stopped running session: {} logged",
                    format_duration(entry.duration)
                );
            }
            println!("Removed {} ({})", removed.name, removed.id);
        }
        ActivityAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tracker.catalog())?);
            } else {
                for activity in tracker.catalog().list() {
                    let target = match activity.target_secs {
                        Some(secs) => format_duration(secs as f64),
                        None => "no target".to_string(),
                    };
                    println!(
                        "{}\t{}\t{}\t{}",
                        activity.id, activity.name, target, activity.color
                    );
                }
            }
        }
    }
    Ok(())
}
