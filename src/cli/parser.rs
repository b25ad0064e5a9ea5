use crate::export::ExportFormat;
use crate::models::priority::Priority;
use crate::models::selection::{GroupingMode, SortDirection, SortKey, ViewFilter};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDeadliner
/// CLI application to track deadline-bound events with partitions and countdowns
#[derive(Parser)]
#[command(
    name = "rdeadliner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple deadline tracking CLI: events, partitions, urgency countdowns and views",
    long_about = None
)]
pub struct Cli {
    /// Override event store path (useful for tests or custom stores)
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
    /// Initialize the event store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the event store (integrity checks, stats, etc.)
    Db {
        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new event
    Add {
        /// Event title
        title: String,

        /// Deadline: YYYY-MM-DD [HH:MM[:SS]] or relative +Nm/+Nh/+Nd
        #[arg(long = "deadline")]
        deadline: String,

        /// Priority level
        #[arg(long = "priority", value_enum, default_value = "medium")]
        priority: Priority,

        /// Optional description
        #[arg(long = "desc")]
        description: Option<String>,

        /// Urgency window in hours (default from config, normally 24)
        #[arg(long = "urgent-hours")]
        urgent_hours: Option<i64>,

        /// Partition id to file the event under
        #[arg(long = "partition")]
        partition: Option<i64>,
    },

    /// Update fields of an existing event (unspecified fields are kept)
    Edit {
        /// Event id
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        /// New deadline: YYYY-MM-DD [HH:MM[:SS]] or relative +Nm/+Nh/+Nd
        #[arg(long = "deadline")]
        deadline: Option<String>,

        #[arg(long = "priority", value_enum)]
        priority: Option<Priority>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long = "urgent-hours")]
        urgent_hours: Option<i64>,

        /// Move the event into this partition
        #[arg(long = "partition", conflicts_with = "no_partition")]
        partition: Option<i64>,

        /// Move the event to "unclassified"
        #[arg(long = "no-partition")]
        no_partition: bool,
    },

    /// Toggle an event between open and completed
    Done {
        /// Event id
        id: i64,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show events through a view
    List {
        #[arg(long = "view", value_enum, default_value = "all")]
        view: ViewFilter,

        /// Show only events of this partition (all view only)
        #[arg(long = "partition")]
        partition: Option<i64>,

        #[arg(long = "mode", value_enum, default_value = "grid")]
        mode: GroupingMode,

        #[arg(long = "sort", value_enum, default_value = "deadline")]
        sort: SortKey,

        #[arg(long = "direction", value_enum, default_value = "asc")]
        direction: SortDirection,

        #[arg(long = "details", help = "Include descriptions and creation dates")]
        details: bool,
    },

    /// Live view: refresh countdowns once per interval
    Watch {
        #[arg(long = "view", value_enum, default_value = "all")]
        view: ViewFilter,

        #[arg(long = "partition")]
        partition: Option<i64>,

        #[arg(long = "mode", value_enum, default_value = "grid")]
        mode: GroupingMode,

        #[arg(long = "sort", value_enum, default_value = "deadline")]
        sort: SortKey,

        #[arg(long = "direction", value_enum, default_value = "asc")]
        direction: SortDirection,

        /// Seconds between refreshes
        #[arg(long = "interval", default_value_t = 1)]
        interval: u64,

        /// Stop after N renders (0 = run until interrupted)
        #[arg(long = "ticks", default_value_t = 0, hide = true)]
        ticks: u64,
    },

    /// Manage partitions (categories)
    Partition {
        #[command(subcommand)]
        action: PartitionAction,
    },

    /// Create a backup copy of the event store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export event data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export only what this view shows (default: everything)
        #[arg(long = "view", value_enum)]
        view: Option<ViewFilter>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PartitionAction {
    /// Create a partition
    Add {
        name: String,

        /// Display color as #rrggbb
        #[arg(long = "color")]
        color: Option<String>,
    },

    /// List partitions with their event counts
    List,

    /// Rename a partition
    Rename { id: i64, name: String },

    /// Change a partition's display color
    Color { id: i64, color: String },

    /// Delete a partition (its events become unclassified)
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
