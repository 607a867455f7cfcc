use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for eurostat-cli
#[derive(Debug, Parser)]
#[command(
    name = "eurostat",
    version,
    about = "Download, cache and reshape Eurostat bulk datasets, dictionaries and NUTS boundaries"
)]
pub struct CliArgs {
    /// Cache directory (created if missing)
    #[arg(short = 'c', long = "cache-dir", env = "EUROSTAT_CACHE_DIR", default_value = "cache", global = true)]
    pub cache_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download a URL into a file unless a fresh copy exists
    Fetch {
        url: String,
        destination: PathBuf,
        /// Keep the raw bytes instead of requiring UTF-8 text
        #[arg(long)]
        binary: bool,
        /// Unwrap a gzip-compressed response
        #[arg(long)]
        gzip: bool,
    },

    /// Print a code dictionary as JSON
    Dictionary {
        /// Dictionary name (e.g. geo, unit)
        name: String,
        /// Map labels to codes instead of codes to labels
        #[arg(long)]
        inverse: bool,
    },

    /// Print a dataset as CSV
    Dataset {
        /// Dataset code (e.g. tps00001)
        name: String,
        /// Keep every code untranslated
        #[arg(long = "raw-codes")]
        raw_codes: bool,
        /// Keep one row per series instead of one row per period
        #[arg(long = "no-transpose")]
        no_transpose: bool,
        /// Coded dimension to leave untranslated (repeatable)
        #[arg(short = 'k', long = "keep")]
        keep: Vec<String>,
    },

    /// Print NUTS boundaries of one level as JSON properties
    #[cfg(feature = "geodata")]
    Geodata {
        /// NUTS level (0 = countries)
        #[arg(short = 'l', long = "level", default_value_t = 0)]
        level: i64,
    },

    /// Show the age in hours of a cached file (-1 if absent)
    Age { path: PathBuf },
}
