use clap::Args;
use tempo_core::Config;

#[derive(Args)]
pub struct ResetArgs {
    /// Actually delete everything; refuses without this flag
    #[arg(long)]
    yes: bool,
}

pub fn run(args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("this permanently deletes all data; pass --yes to confirm".into());
    }

    let config = Config::load();
    let mut tracker = super::open_tracker(&config)?;
    let summary = tracker.reset()?;

    println!(
        "Cleared {} activities, {} log entries, {} reminders, {} events, {} notebooks",
        summary.activities,
        summary.log_entries,
        summary.reminders,
        summary.calendar_events,
        summary.notebooks
    );
    Ok(())
}
