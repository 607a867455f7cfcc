//! Error handling example for eurostat-rs
//!
//! This example demonstrates how failures surface: downloads never fail
//! loudly, loaders report what they could not work with.

use eurostat_rs::prelude::*;
use eurostat_rs::parse_dictionary;

fn main() -> Result<()> {
    println!("=== Eurostat-RS Error Handling Example ===\n");

    let cache = std::env::temp_dir().join("eurostat-demo-errors");
    std::fs::create_dir_all(&cache)?;

    // Example 1: Client construction
    println!("--- Example 1: Building the HTTP client ---");
    let eurostat = match Eurostat::new(Config::new(&cache)) {
        Ok(e) => {
            println!("✓ Client ready");
            e
        }
        Err(e) => {
            eprintln!("✗ Failed to build client: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: A failed fetch is an outcome, not an error
    println!("--- Example 2: Fetching an unreachable URL ---");
    let outcome = eurostat.fetch(
        "https://invalid.example/missing.tsv",
        cache.join("missing.tsv"),
        ContentMode::Text,
        Compression::None,
    );
    match outcome {
        FetchOutcome::FetchFailed(reason) => println!("  Failed as expected: {reason}"),
        other => println!("  Unexpected: {other:?}"),
    }
    println!();

    // Example 3: Unknown dictionaries come back empty
    println!("--- Example 3: Unknown dictionary ---");
    let dictionary = eurostat.load_dictionary("no_such_dictionary", false);
    println!("  Entries: {}", dictionary.len());
    println!();

    // Example 4: Unknown datasets have nothing cached to parse
    println!("--- Example 4: Unknown dataset ---");
    match eurostat.load_dataset("no_such_dataset", &DatasetOptions::default()) {
        Ok(table) => println!("  Loaded {} rows", table.row_count()),
        Err(EurostatError::NotCached(path)) => println!("  Nothing cached at {}", path.display()),
        Err(e) => println!("  Other error: {e}"),
    }
    println!();

    // Example 5: Malformed dictionary lines are skipped
    println!("--- Example 5: Parsing a hand-written dictionary ---");
    let parsed = parse_dictionary("A\tAlpha\nbroken line\nB\t Beta \n", false);
    println!("  {parsed:?}");

    Ok(())
}
