use crate::models::CardRecord;
use std::collections::HashMap;

/// Card count and mean price for one rarity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RarityStats {
    pub count: usize,
    pub average_price: f64,
}

/// Counts records per rarity label. Every rarity present in the input gets an entry.
pub fn count_by_rarity(records: &[CardRecord]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.rarity.clone()).or_insert(0) += 1;
    }
    counts
}

/// Mean price of the records with the given rarity, or 0.0 if there are none.
pub fn average_price(records: &[CardRecord], rarity: &str) -> f64 {
    let (total, count) = records
        .iter()
        .filter(|r| r.is_rarity(rarity))
        .fold((0.0, 0usize), |(total, count), r| (total + r.price, count + 1));

    if count == 0 {
        return 0.0;
    }
    total / count as f64
}

/// Returns true if at least one record has the given rarity
pub fn rarity_exists(records: &[CardRecord], rarity: &str) -> bool {
    records.iter().any(|r| r.is_rarity(rarity))
}

/// Count and average price for every rarity present in the input
pub fn rarity_statistics(records: &[CardRecord]) -> HashMap<String, RarityStats> {
    let mut totals: HashMap<String, (usize, f64)> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.rarity.clone()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.price;
    }

    totals
        .into_iter()
        .map(|(rarity, (count, total))| {
            let stats = RarityStats {
                count,
                average_price: total / count as f64,
            };
            (rarity, stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rarity: &str, price: f64) -> CardRecord {
        CardRecord::new("Test Card", rarity, "TST-EN001", price)
    }

    fn sample_cards() -> Vec<CardRecord> {
        vec![
            card("Common", 0.5),
            card("Common", 0.5),
            card("Common", 0.5),
            card("Ultra Rare", 5.0),
            card("Quarter Century Secret Rare", 50.0),
        ]
    }

    #[test]
    fn test_count_by_rarity() {
        let counts = count_by_rarity(&sample_cards());

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["Common"], 3);
        assert_eq!(counts["Ultra Rare"], 1);
        assert_eq!(counts["Quarter Century Secret Rare"], 1);
    }

    #[test]
    fn test_count_by_rarity_empty() {
        assert!(count_by_rarity(&[]).is_empty());
    }

    #[test]
    fn test_average_price() {
        let cards = vec![card("Super Rare", 1.0), card("Super Rare", 2.0), card("Common", 9.0)];
        assert!((average_price(&cards, "Super Rare") - 1.5).abs() < 1e-9);
        assert!((average_price(&cards, "Common") - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_price_missing_rarity_is_zero() {
        assert_eq!(average_price(&sample_cards(), "Starlight Rare"), 0.0);
        assert_eq!(average_price(&[], "Common"), 0.0);
    }

    #[test]
    fn test_rarity_exists() {
        let cards = sample_cards();
        assert!(rarity_exists(&cards, "Quarter Century Secret Rare"));
        assert!(!rarity_exists(&cards, "Starlight Rare"));
        assert!(!rarity_exists(&cards, "common"));
    }

    #[test]
    fn test_rarity_statistics_matches_single_queries() {
        let cards = sample_cards();
        let stats = rarity_statistics(&cards);
        let counts = count_by_rarity(&cards);

        assert_eq!(stats.len(), counts.len());
        for (rarity, entry) in &stats {
            assert_eq!(entry.count, counts[rarity]);
            assert!((entry.average_price - average_price(&cards, rarity)).abs() < 1e-9);
        }
    }
}
