mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jesa")]
#[command(about = "Track memorial rites for your loved ones and export them as a calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every memorial with its ritual badges
    List,
    /// Show the full rite timeline for one memorial
    Show {
        /// Memorial id, or a name to search for
        memorial: String,
    },
    /// Add a loved one
    Add {
        name: String,

        /// Date of passing (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Photo path or reference
        #[arg(short, long)]
        photo: Option<String>,
    },
    /// Edit a memorial in place
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Date of passing (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        photo: Option<String>,
    },
    /// Remove a memorial (permanent entries are hidden, not deleted)
    Remove {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Export all upcoming rites as an .ics calendar
    Export {
        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = "jesa-rituals.ics")]
        out: String,
    },
    /// Manage prayer intentions
    Prayer {
        #[command(subcommand)]
        command: PrayerCommands,
    },
}

#[derive(Subcommand)]
enum PrayerCommands {
    /// List prayer intentions
    List,
    /// Add a prayer intention
    Add {
        category: String,

        /// Detail line (names, specifics)
        #[arg(short, long)]
        detail: Option<String>,
    },
    /// Remove a prayer intention
    Remove { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::run(),
        Commands::Show { memorial } => commands::show::run(&memorial),
        Commands::Add { name, date, photo } => commands::add::run(name, &date, photo),
        Commands::Edit {
            id,
            name,
            date,
            photo,
        } => commands::edit::run(&id, name, date.as_deref(), photo),
        Commands::Remove { id, force } => commands::remove::run(&id, force),
        Commands::Export { out } => commands::export::run(&out),
        Commands::Prayer { command } => match command {
            PrayerCommands::List => commands::prayer::list(),
            PrayerCommands::Add { category, detail } => commands::prayer::add(category, detail),
            PrayerCommands::Remove { id } => commands::prayer::remove(&id),
        },
    }
}
