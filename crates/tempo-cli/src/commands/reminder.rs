use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use tempo_core::Config;

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Add a reminder
    Add {
        /// Reminder text
        text: String,
        /// Due date
        #[arg(long, value_parser = super::parse_date)]
        date: NaiveDate,
        /// Due time
        #[arg(long, value_parser = super::parse_time, default_value = "09:00")]
        time: NaiveTime,
    },
    /// List reminders in order
    List,
    /// Remove a reminder by id
    Remove {
        /// Reminder id (see `reminder list`)
        id: String,
    },
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let mut tracker = super::open_tracker(&config)?;

    match action {
        ReminderAction::Add { text, date, time } => {
            let due = super::local_datetime(date, time)?;
            let reminder = tracker.add_reminder(&text, due)?;
            println!("Added reminder {} (due {})", reminder.id, reminder.due.format("%b %d, %Y %I:%M %p"));
        }
        ReminderAction::List => {
            let now = chrono::Local::now();
            for reminder in tracker.reminders().list() {
                let overdue = if reminder.is_overdue(now) { "\toverdue" } else { "" };
                println!(
                    "{}\t{}\t{}{}",
                    reminder.id,
                    reminder.due.format("%b %d, %Y %I:%M %p"),
                    reminder.text,
                    overdue
                );
            }
        }
        ReminderAction::Remove { id } => {
            let removed = tracker.remove_reminder(&id)?;
            println!("Removed reminder: {}", removed.text);
        }
    }
    Ok(())
}
