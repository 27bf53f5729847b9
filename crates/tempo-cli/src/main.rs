use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tempo", version, about = "Tempo productivity tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activity catalog management
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Session control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Daily summary
    Summary(commands::summary::SummaryArgs),
    /// Reminder management
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Calendar event management
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Notebook management
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Delete all stored data and return to defaults
    Reset(commands::reset::ResetArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Summary(args) => commands::summary::run(args),
        Commands::Reminder { action } => commands::reminder::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Reset(args) => commands::reset::run(args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tempo", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
