//! Pull-rate models for the supported booster products and the expected
//! value of a pack under each of them.

use crate::models::{rarity, CardRecord};
use crate::stats::{rarity_exists, rarity_statistics, RarityStats};
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;

/// Packs in one sealed box
pub const DEFAULT_PACKS_PER_BOX: u32 = 24;

/// Pull-rate table of one product.
///
/// Every pack holds `base_slots` cards of `base_rarity` plus one foil slot.
/// The foil slot is `residual_rarity` unless one of the `fixed_rates` hits.
#[derive(Debug, Clone, Copy)]
pub struct PackTable {
    pub base_rarity: &'static str,
    pub base_slots: u32,
    pub residual_rarity: &'static str,
    pub fixed_rates: &'static [(&'static str, f64)],
}

impl PackTable {
    /// Probability of the residual tier: whatever the fixed rates leave over.
    pub fn residual_rate(&self) -> f64 {
        self.fixed_rates.iter().fold(1.0_f64, |rest, (_, rate)| rest - rate)
    }
}

const QUARTER_CENTURY_TABLE: PackTable = PackTable {
    base_rarity: rarity::COMMON,
    base_slots: 8,
    residual_rarity: rarity::SUPER_RARE,
    fixed_rates: &[
        (rarity::ULTRA_RARE, 1.0 / 4.0),
        (rarity::SECRET_RARE, 1.0 / 12.0),
        (rarity::QUARTER_CENTURY_SECRET_RARE, 1.0 / 96.0),
    ],
};

const REGULAR_TABLE: PackTable = PackTable {
    base_rarity: rarity::COMMON,
    base_slots: 8,
    residual_rarity: rarity::SUPER_RARE,
    fixed_rates: &[
        (rarity::ULTRA_RARE, 1.0 / 4.0),
        (rarity::SECRET_RARE, 1.0 / 12.0),
        (rarity::STARLIGHT_RARE, 1.0 / 288.0),
    ],
};

const COLLECTORS_TABLE: PackTable = PackTable {
    base_rarity: rarity::RARE,
    base_slots: 8,
    residual_rarity: rarity::SUPER_RARE,
    fixed_rates: &[
        (rarity::ULTRA_RARE, 1.0 / 8.0),
        (rarity::COLLECTORS_RARE, 1.0 / 96.0),
    ],
};

/// The booster products we know pull rates for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackModel {
    /// Sets with Quarter Century Secret Rares
    QuarterCentury,
    /// Core sets with Starlight Rares
    Regular,
    /// Collector's Rare products
    Collectors,
}

impl PackModel {
    /// All models, in the order they are tried by [`PackModel::select`]
    pub const ALL: [PackModel; 3] = [
        PackModel::QuarterCentury,
        PackModel::Regular,
        PackModel::Collectors,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PackModel::QuarterCentury => "QCR",
            PackModel::Regular => "Regular",
            PackModel::Collectors => "Collector's",
        }
    }

    /// Rarity whose presence in a set identifies this product
    pub fn distinguishing_rarity(&self) -> &'static str {
        match self {
            PackModel::QuarterCentury => rarity::QUARTER_CENTURY_SECRET_RARE,
            PackModel::Regular => rarity::STARLIGHT_RARE,
            PackModel::Collectors => rarity::COLLECTORS_RARE,
        }
    }

    pub fn table(&self) -> &'static PackTable {
        match self {
            PackModel::QuarterCentury => &QUARTER_CENTURY_TABLE,
            PackModel::Regular => &REGULAR_TABLE,
            PackModel::Collectors => &COLLECTORS_TABLE,
        }
    }

    /// Picks the first model whose distinguishing rarity appears in the records.
    pub fn select(records: &[CardRecord]) -> Option<PackModel> {
        Self::ALL
            .into_iter()
            .find(|model| rarity_exists(records, model.distinguishing_rarity()))
    }

    /// Foil slot probabilities, residual tier first. Sums to 1.
    pub fn probabilities(&self) -> Vec<(&'static str, f64)> {
        let table = self.table();
        let mut rates = Vec::with_capacity(table.fixed_rates.len() + 1);
        rates.push((table.residual_rarity, table.residual_rate()));
        rates.extend_from_slice(table.fixed_rates);
        rates
    }

    /// Expected market value of one pack given the average price per rarity.
    /// Rarities missing from `stats` are worth 0.
    pub fn expected_value(&self, stats: &HashMap<String, RarityStats>) -> f64 {
        let table = self.table();
        let base = table.base_slots as f64 * stats_average(stats, table.base_rarity);

        self.probabilities()
            .into_iter()
            .fold(base, |total, (rarity, rate)| {
                let avg = stats_average(stats, rarity);
                debug!("{}: {rarity} avg {avg:.4} x {rate:.6}", self.name());
                total + rate * avg
            })
    }
}

fn stats_average(stats: &HashMap<String, RarityStats>, rarity: &str) -> f64 {
    stats.get(rarity).map_or(0.0, |s| s.average_price)
}

impl fmt::Display for PackModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected value of a pack and of a full box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedValue {
    pub model: PackModel,
    pub per_pack: f64,
    pub packs_per_box: u32,
    pub per_box: f64,
}

/// Selects the pack model for the records and computes its expected value.
/// Returns `None` when no known product matches.
pub fn evaluate(records: &[CardRecord], packs_per_box: u32) -> Option<ExpectedValue> {
    let model = PackModel::select(records)?;
    let per_pack = model.expected_value(&rarity_statistics(records));
    info!("Selected {model} pack model, expected value per pack {per_pack:.4}");

    Some(ExpectedValue {
        model,
        per_pack,
        packs_per_box,
        per_box: per_pack * packs_per_box as f64,
    })
}
