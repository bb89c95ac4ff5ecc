use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ecotrack
#[derive(Parser)]
#[command(
    name = "ecotrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily travel, estimate its CO2 footprint and keep a low-emission streak",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },

    /// Record a travel activity
    Add {
        /// Date of the trip (YYYY-MM-DD)
        date: String,

        /// Category: car, bus, train, moto, cycle (or the full label)
        category: String,

        /// Distance travelled (km)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        #[arg(
            long = "hours",
            allow_hyphen_values = true,
            help = "Duration of the trip in hours (default 0)"
        )]
        hours: Option<String>,

        #[arg(long = "note", help = "Optional free-text note")]
        note: Option<String>,
    },

    /// Delete a log entry by id
    Del {
        /// Id of the entry (see `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List log entries
    List {
        #[arg(long = "date", help = "Only entries for this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "today", conflicts_with = "date", help = "Only today's entries")]
        now: bool,
    },

    /// Daily total, rating and streak
    Summary {
        #[arg(long = "date", help = "Day to summarize (default: today)")]
        date: Option<String>,
    },

    /// Consecutive low-emission days ending today
    Streak {
        #[arg(long = "date", help = "Count backward from this day (default: today)")]
        date: Option<String>,
    },

    /// Per-day totals for the last days
    History {
        #[arg(long = "days", help = "Number of days to show (default from config)")]
        days: Option<u32>,
    },

    /// Show the emission factor table
    Factors,

    /// Short opinion quiz about travel habits
    Quiz {
        #[arg(
            long = "answers",
            help = "Comma separated answers 1-5 (skip the interactive prompt)"
        )]
        answers: Option<String>,
    },

    /// Export log entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY-MM:YYYY-MM)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Version, data locations and optional artwork
    About,
}
