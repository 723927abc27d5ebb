//! CLI argument parsing for the smartpack-worker binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::Direction;

#[derive(Parser)]
#[command(name = "smartpack-worker", about = "Staff taxi Smart Pack worker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the worker server (default if no subcommand given)
    Serve,
    /// Plan shared routes for a JSON file of bookings and print them
    Plan {
        /// JSON array of booking records
        #[arg(long)]
        input: PathBuf,
        /// inbound (to the hub) or outbound (from the hub)
        #[arg(long)]
        direction: Direction,
        /// Only plan bookings on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Validate the zone cluster configuration and exit
    CheckClusters,
}

impl Command {
    /// Only the long-running server keeps a log file; offline commands log
    /// to stderr alone
    pub fn persists_logs(&self) -> bool {
        matches!(self, Command::Serve)
    }
}
