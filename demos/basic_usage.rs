//! Basic usage example for eurostat-rs
//!
//! This example demonstrates how to:
//! - Load a code dictionary in both directions
//! - Load a dataset with translated codes, periods as rows
//! - Keep one dimension coded for joins
//! - Load NUTS boundaries of one level

use eurostat_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Eurostat-RS Basic Usage Example ===\n");

    let cache = std::env::temp_dir().join("eurostat-demo-cache");
    std::fs::create_dir_all(&cache)?;
    let eurostat = Eurostat::new(Config::new(&cache))?;
    println!("Cache directory: {}\n", cache.display());

    // Example 1: Dictionary
    println!("--- Example 1: Country dictionary ---");
    let geo = eurostat.load_dictionary("geo", false);
    println!("Entries: {}", geo.len());
    for code in ["DE", "FR", "EU27_2020"] {
        println!("  {code} -> {}", geo.get(code).map_or("?", String::as_str));
    }
    let by_label = eurostat.load_dictionary("geo", true);
    println!("  Germany -> {:?}", by_label.get("Germany"));
    println!();

    // Example 2: Dataset, default shape
    println!("--- Example 2: Population on 1 January ---");
    let table = eurostat.load_dataset("tps00001", &DatasetOptions::default())?;
    println!(
        "{} periods x {} series ({:?})",
        table.row_count(),
        table.column_count(),
        table.layout()
    );
    if let Some(last) = table.periods().last() {
        println!("Latest period: {last}");
    }
    println!();

    // Example 3: Keep country codes, one row per series
    println!("--- Example 3: Wide layout with coded countries ---");
    let options = DatasetOptions::default().transpose(false).keep_code("geo");
    let table = eurostat.load_dataset("tps00001", &options)?;
    let period = table.periods().len().saturating_sub(1);
    for code in ["DE", "FR", "IT"] {
        let row = table
            .dimension_values("geo")
            .and_then(|geos| geos.iter().position(|g| *g == code));
        match row.and_then(|r| table.value(r, period)) {
            Some(v) => println!("  {code}: {v}"),
            None => println!("  {code}: no value"),
        }
    }
    println!(
        "Cached copy is {}h old",
        eurostat.age_in_hours(eurostat.config().dataset_path("tps00001"))
    );
    println!();

    // Example 4: Boundaries
    println!("--- Example 4: NUTS level 0 ---");
    let countries = eurostat.load_geodata(0)?;
    println!("Features: {}", countries.len());
    for feature in countries.iter().take(5) {
        println!("  {:?}", feature.property("NUTS_ID"));
    }

    Ok(())
}
