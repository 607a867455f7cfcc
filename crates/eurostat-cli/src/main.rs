//! eurostat: command-line front end for eurostat-core
//!
//! Usage examples
//! --------------
//!
//! - Code dictionary, label to code
//!   $ eurostat dictionary geo --inverse
//!
//! - Dataset with periods as rows, country codes kept
//!   $ eurostat dataset tps00001 --keep geo > population.csv
//!
//! - Dataset in its upstream orientation, nothing translated
//!   $ eurostat dataset nama_10_gdp --raw-codes --no-transpose
//!
//! - NUTS 1 regions
//!   $ eurostat geodata --level 1
//!
//! Every download is cached under `--cache-dir` (default `./cache`) and
//! reused for 24 hours.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use eurostat_core::{Compression, Config, ContentMode, DatasetOptions, Eurostat, FetchOutcome};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    std::fs::create_dir_all(&args.cache_dir)
        .with_context(|| format!("creating cache directory {}", args.cache_dir.display()))?;
    let eurostat = Eurostat::new(Config::new(&args.cache_dir))?;

    match args.command {
        Commands::Fetch {
            url,
            destination,
            binary,
            gzip,
        } => {
            let mode = if binary { ContentMode::Binary } else { ContentMode::Text };
            let compression = if gzip { Compression::Gzip } else { Compression::None };
            match eurostat.fetch(&url, &destination, mode, compression) {
                FetchOutcome::Fresh => println!("{}: fresh, not downloaded", destination.display()),
                FetchOutcome::Fetched => println!("{}: downloaded", destination.display()),
                FetchOutcome::FetchFailed(reason) => {
                    anyhow::bail!("{}: download failed: {reason}", destination.display())
                }
            }
        }

        Commands::Dictionary { name, inverse } => {
            let dictionary = eurostat.load_dictionary(&name, inverse);
            if dictionary.is_empty() {
                log::warn!("dictionary '{name}' is empty or unavailable");
            }
            let sorted: std::collections::BTreeMap<_, _> = dictionary.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        }

        Commands::Dataset {
            name,
            raw_codes,
            no_transpose,
            keep,
        } => {
            let options = DatasetOptions {
                translate_codes: !raw_codes,
                transpose: !no_transpose,
                untranslated_codes: keep,
            };
            let table = eurostat
                .load_dataset(&name, &options)
                .with_context(|| format!("loading dataset {name}"))?;
            let stdout = io::stdout();
            table.write_csv(stdout.lock())?;
        }

        #[cfg(feature = "geodata")]
        Commands::Geodata { level } => {
            use std::io::Write;
            let features = eurostat.load_geodata(level)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{} features at level {level}", features.len())?;
            if let Some(crs) = features.crs() {
                writeln!(out, "crs: {crs}")?;
            }
            for feature in &features {
                writeln!(out, "{}", serde_json::to_string(&feature.properties)?)?;
            }
        }

        Commands::Age { path } => {
            println!("{}", eurostat.age_in_hours(&path));
        }
    }

    Ok(())
}
