use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI timesheet: clock in/out, breaks, overtime and late-night minutes on SQLite
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: clock in/out, breaks, overtime and late-night minutes using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the display timezone (e.g. +09:00, UTC)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Instant to use as "now" (RFC 3339), instead of the wall clock
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show today's work status
    Status {
        #[arg(long = "json", help = "Print status and stamp as JSON")]
        json: bool,
    },

    /// Start the working day
    ClockIn,

    /// End the working day (an open break must be ended first)
    ClockOut,

    /// Start a break
    BreakStart,

    /// End the current break
    BreakEnd,

    /// Show the attendance record of a single day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "json", help = "Print the record as JSON")]
        json: bool,

        #[arg(long = "raw", help = "Print the stored stamp instead of the computed record")]
        raw: bool,
    },

    /// Attendance records and totals over a period
    Report {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2025-06-01:2025-06-10")
        #[arg(long = "period", short = 'p', conflicts_with_all = ["from", "week"])]
        period: Option<String>,

        /// First day (YYYY-MM-DD), requires --to
        #[arg(long = "from", requires = "to")]
        from: Option<String>,

        /// Last day (YYYY-MM-DD), requires --from
        #[arg(long = "to", requires = "from")]
        to: Option<String>,

        /// Current calendar week (Monday to Sunday)
        #[arg(long = "week", conflicts_with = "from")]
        week: bool,

        #[arg(long = "json", help = "Print records and summary as JSON")]
        json: bool,
    },

    /// Export attendance records
    Export {
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Output file (absolute path, ~ allowed)
        #[arg(long = "file")]
        file: String,

        /// Period to export (same syntax as `report --period`); default: all
        #[arg(long = "range")]
        range: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long = "force")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Copy the database to a backup file
    Backup {
        #[arg(long = "file")]
        file: String,

        #[arg(long = "compress", help = "Zip the backup copy")]
        compress: bool,

        /// Overwrite an existing file without asking
        #[arg(long = "force")]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },
}
