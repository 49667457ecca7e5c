use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for irrical
/// CLI application to plan irrigation days and watering times with SQLite
#[derive(Parser)]
#[command(
    name = "irrical",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple irrigation planning CLI: schedule watering days per month using SQLite",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the month calendar, time slots and schedule status
    Show {
        /// Month to display (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long = "slots", help = "Show only the time slot list")]
        slots_only: bool,
    },

    /// Toggle a watering day on the month calendar
    Toggle {
        /// Day of month (1-31)
        day: u32,

        /// Month the day belongs to (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Schedule every remaining day of a month
    Fill {
        /// Month to fill (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Unschedule every day of a month
    Clear {
        /// Month to clear (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Manage watering time slots
    Slot {
        /// Add a slot at the given 12-hour time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        add: Option<String>,

        /// AM or PM period for --add
        #[arg(long, default_value = "AM")]
        period: String,

        /// Enable a slot by id
        #[arg(long, value_name = "ID")]
        enable: Option<i64>,

        /// Disable a slot by id
        #[arg(long, value_name = "ID")]
        disable: Option<i64>,

        /// Delete a slot by id
        #[arg(long, value_name = "ID")]
        del: Option<i64>,

        /// List all slots
        #[arg(long)]
        list: bool,
    },

    /// Export scheduled days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to one month (YYYY-MM)
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
