use chrono::NaiveDate;
use clap::Args;
use tempo_core::Config;

use super::format_duration;

#[derive(Args)]
pub struct SummaryArgs {
    /// Day to summarize (defaults to today)
    #[arg(long, value_parser = super::parse_date)]
    date: Option<NaiveDate>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let tracker = super::open_tracker(&config)?;

    let date = args.date.unwrap_or_else(|| tracker.today());
    let rows = tracker.summarize(date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Summary for {date}");
    for row in rows {
        let mut line = format!("{}\t{}", row.activity, format_duration(row.total_secs));
        if let Some(fraction) = tempo_core::progress_fraction(row.total_secs, row.target_secs) {
            let target = row.target_secs.unwrap_or(0);
            line.push_str(&format!(
                "\t{:.0}% of {}",
                fraction * 100.0,
                format_duration(target as f64)
            ));
        }
        if row.completed {
            line.push_str("\tdone");
        }
        println!("{line}");
    }
    Ok(())
}
