use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "almarec", bin_name = "almarec", version)]
#[command(about = "Inspect and merge library-services user records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a user document
    #[command(display_order = 1)]
    Show {
        /// User JSON file, or - for stdin
        file: PathBuf,

        /// Print the whole document instead of a summary
        #[arg(long)]
        raw: bool,
    },

    /// Apply an incoming partial user onto a stored one and print the result
    #[command(display_order = 2)]
    Merge {
        /// Stored user JSON file
        stored: PathBuf,

        /// Incoming user JSON file, or - for stdin
        incoming: PathBuf,

        /// Merge action: create, update or sync (defaults to config)
        #[arg(short, long)]
        action: Option<String>,
    },

    /// Print a stored user, or one of its fields
    #[command(display_order = 3)]
    Get {
        /// Primary id
        id: String,

        /// Field name (e.g. user_group, user_identifier)
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Write a user to the data directory, merging with what is stored
    #[command(display_order = 4)]
    Put {
        /// Primary id
        id: String,

        /// User JSON file, or - for stdin
        file: PathBuf,

        /// Merge action: create, update or sync (defaults to config)
        #[arg(short, long)]
        action: Option<String>,
    },

    /// List stored user ids
    #[command(alias = "ls", display_order = 5)]
    List,
}
