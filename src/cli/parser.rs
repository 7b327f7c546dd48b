use crate::models::day::Weekday;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSchedule
/// CLI application to print a weekly office-hours schedule as a PDF
#[derive(Parser)]
#[command(
    name = "rschedule",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple weekly schedule CLI: list classes and office hours and print them as a one-page PDF",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Add an event to a schedule file (the file is created if missing)
    Add {
        /// Schedule file (YAML, or JSON with a .json extension)
        file: String,

        #[arg(long, help = "Event title, e.g. \"Office Hours\"")]
        title: String,

        #[arg(long, help = "Day of the week: mon, tue, wed, thu, fri")]
        day: String,

        #[arg(long, help = "Start time, e.g. 9:30 AM, 14:30, 2 PM")]
        start: String,

        #[arg(long, help = "End time, e.g. 11 AM, 16:00")]
        end: String,

        #[arg(long, help = "Room or building")]
        location: Option<String>,

        #[arg(long, help = "Preset color name (Blue, ETSU Gold, ...) or #rrggbb")]
        color: Option<String>,
    },

    /// Delete an event from a schedule file by its id (see `list`)
    Del {
        /// Schedule file
        file: String,

        /// Event id, as shown by `list`
        id: u32,
    },

    /// List the events of a schedule file in entry order
    List {
        /// Schedule file
        file: String,

        #[arg(long, help = "Print events as JSON")]
        json: bool,
    },

    /// Generate the printable PDF schedule
    Generate {
        /// Schedule file
        file: String,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output PDF path")]
        out: String,

        #[arg(
            long,
            value_enum,
            value_delimiter = ',',
            help = "Days to include, e.g. mon,wed,fri (default: from file or config)"
        )]
        days: Option<Vec<Weekday>>,

        #[arg(long, help = "Last printed hour: 6 PM .. 11 PM (default: from file or config)")]
        end: Option<String>,

        #[arg(long, help = "Name or title shown in the header")]
        owner: Option<String>,

        #[arg(long, help = "Semester caption, e.g. \"Spring 2026\"")]
        term: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },
}
