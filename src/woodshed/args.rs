use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "woodshed")]
#[command(about = "Folder-aware practice tracker for musical scores", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library root (bypasses config discovery)
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the library and register new tunes and parts
    #[command(alias = "s")]
    Scan,

    /// List sections, sets, tunes and parts with practice status
    #[command(alias = "ls")]
    List {
        /// Show only focused sets
        #[arg(long)]
        focus: bool,
    },

    /// Start a practice session for a tune or part (resets its streak)
    Start {
        /// Item id, e.g. "Section 1 - Marches|Set 01 - Medley|Set 01a - March"
        id: String,

        /// Instrument to practice on (remembered for the set)
        #[arg(short, long)]
        instrument: Option<String>,
    },

    /// Record a successful repetition
    Pass {
        /// Item id of the tune or part being practiced
        id: String,
    },

    /// Record a failed repetition (resets streak and score)
    Fail {
        /// Item id of the tune or part being practiced
        id: String,
    },

    /// Reset an item's streak and score
    Reset {
        /// Item id of the tune or part to reset
        id: String,
    },

    /// Print the score and audio paths for an item
    Assets {
        /// Item id of a set, tune, or part
        id: String,

        /// Instrument whose score PDF to prefer
        #[arg(short, long)]
        instrument: Option<String>,
    },

    /// Get or set configuration (decay-rate, instrument, library)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
