//! YGO Pack Value - set price dump analysis
//!
//! Converts a six-lines-per-card price dump into CSV, tallies cards per
//! rarity and estimates the market value of a booster pack and box.

pub mod config;
pub mod csv_export;
pub mod error;
pub mod models;
pub mod pack_model;
pub mod parser;
pub mod report;
pub mod stats;

// Re-export commonly used items
pub use config::RunConfig;
pub use csv_export::{read_csv, write_csv};
pub use error::{PackError, Result};
pub use models::CardRecord;
pub use pack_model::{evaluate, ExpectedValue, PackModel};
pub use parser::{parse_lines, parse_listing, read_listing};
pub use report::{format_report, Report};
pub use stats::{average_price, count_by_rarity, rarity_exists, rarity_statistics, RarityStats};

/// Runs the whole pipeline: read the dump, export CSV, tally rarities and
/// compute the expected pack value.
pub fn run(config: &RunConfig) -> Result<Report> {
    let records = read_listing(&config.input_path)?;

    let csv_path = if config.write_csv {
        write_csv(&records, &config.output_path)?;
        Some(config.output_path.clone())
    } else {
        log::info!("CSV export disabled");
        None
    };

    let rarity_counts = count_by_rarity(&records);
    log::info!(
        "Counted {} cards across {} rarities",
        records.len(),
        rarity_counts.len()
    );

    let expected_value = evaluate(&records, config.packs_per_box);
    if expected_value.is_none() {
        log::warn!("No known pack configuration matches this set, skipping expected value");
    }

    Ok(Report {
        record_count: records.len(),
        csv_path,
        rarity_counts,
        expected_value,
    })
}
