use crate::pack_model::ExpectedValue;
use std::collections::HashMap;
use std::path::PathBuf;

/// Outcome of one run, ready to be printed
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub record_count: usize,
    /// Where the CSV export went, if it was written
    pub csv_path: Option<PathBuf>,
    pub rarity_counts: HashMap<String, usize>,
    pub expected_value: Option<ExpectedValue>,
}

/// Formats an amount as dollars with two decimals, e.g. "$12.34"
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// One "<rarity>: <n> cards" line per rarity, sorted by rarity label.
pub fn format_rarity_counts(counts: &HashMap<String, usize>) -> String {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut output = String::new();
    for (rarity, count) in entries {
        output.push_str(&format!("{rarity}: {count} cards\n"));
    }
    output
}

pub fn format_expected_value(ev: &ExpectedValue) -> String {
    let mut output = String::new();
    output.push_str(&format!("Pack model: {}\n", ev.model));
    output.push_str(&format!(
        "Expected value of a pack: {}\n",
        format_currency(ev.per_pack)
    ));
    output.push_str(&format!(
        "Expected value of {} packs: {}\n",
        ev.packs_per_box,
        format_currency(ev.per_box)
    ));
    output
}

pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    if let Some(path) = &report.csv_path {
        output.push_str(&format!(
            "Data extraction complete! Saved to {}\n",
            path.display()
        ));
    }

    output.push_str(&format!("Parsed {} cards\n", report.record_count));
    output.push_str(&format_rarity_counts(&report.rarity_counts));

    match &report.expected_value {
        Some(ev) => output.push_str(&format_expected_value(ev)),
        None => output.push_str("No known pack configuration found; expected value skipped.\n"),
    }

    output
}
