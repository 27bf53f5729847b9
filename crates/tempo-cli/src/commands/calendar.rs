use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use tempo_core::Config;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Add an event
    Add {
        /// Event description
        text: String,
        /// Event date
        #[arg(long, value_parser = super::parse_date)]
        date: NaiveDate,
        /// Event time
        #[arg(long, value_parser = super::parse_time, default_value = "09:00")]
        time: NaiveTime,
        /// Hex color (defaults to the configured color)
        #[arg(long)]
        color: Option<String>,
    },
    /// List events, optionally for a single day
    List {
        /// Only events on this day
        #[arg(long, value_parser = super::parse_date)]
        date: Option<NaiveDate>,
    },
    /// The next upcoming events, soonest first
    Upcoming {
        /// How many events to show
        #[arg(long, default_value = "7")]
        limit: usize,
    },
    /// Remove an event by id
    Remove {
        /// Event id (see `calendar list`)
        id: String,
    },
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let mut tracker = super::open_tracker(&config)?;

    match action {
        CalendarAction::Add { text, date, time, color } => {
            let due = super::local_datetime(date, time)?;
            let color = color.unwrap_or_else(|| config.ui.default_color.clone());
            let event = tracker.add_event(&text, due, &color)?;
            println!("Added event {} ({})", event.id, event.due.format("%b %d, %Y %I:%M %p"));
        }
        CalendarAction::List { date } => {
            let print = |e: &tempo_core::CalendarEvent| {
                println!("{}\t{}\t{}", e.id, e.due.format("%b %d, %Y %I:%M %p"), e.text);
            };
            match date {
                Some(date) => tracker.calendar().events_on(date).for_each(print),
                None => tracker.calendar().list().iter().for_each(print),
            }
        }
        CalendarAction::Upcoming { limit } => {
            let today = tracker.today();
            for event in tracker.calendar().upcoming(today, limit) {
                let days_until = (event.due.date_naive() - today).num_days();
                println!(
                    "{}\t{}\t{}d\t{}",
                    event.due.format("%a %b %d %I:%M %p"),
                    event.text,
                    days_until,
                    event.id
                );
            }
        }
        CalendarAction::Remove { id } => {
            let removed = tracker.remove_event(&id)?;
            println!("Removed event: {}", removed.text);
        }
    }
    Ok(())
}
