//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sched_core::Date;

/// Recurring weekly availability.
///
/// Reads calendars as JSON (`{"schedules": [...]}`) and expands, merges or
/// validates their schedules.
#[derive(Debug, Parser)]
#[command(name = "sched", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the slots that apply on every date of the calendar.
    Expand {
        /// Calendar JSON file, or `-` for stdin.
        file: PathBuf,

        /// Last date to expand (YYYY-MM-DD). Defaults to today plus the
        /// configured horizon.
        #[arg(long)]
        until: Option<Date>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Intersect the first schedule with the rest, in file order.
    Merge {
        /// Calendar JSON file, or `-` for stdin.
        file: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check every schedule's date range.
    Validate {
        /// Calendar JSON file, or `-` for stdin.
        file: PathBuf,
    },

    /// Check whether two weekday slots overlap (e.g. "Monday 23:00-01:00").
    Overlaps {
        /// First slot.
        a: String,

        /// Second slot.
        b: String,
    },
}
