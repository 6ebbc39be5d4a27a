use serde::{Deserialize, Serialize};

/// Rarity labels the pack models know about. The rarity field on a
/// record stays free-form; anything else is simply counted.
pub mod rarity {
    pub const COMMON: &str = "Common";
    pub const RARE: &str = "Rare";
    pub const SUPER_RARE: &str = "Super Rare";
    pub const ULTRA_RARE: &str = "Ultra Rare";
    pub const SECRET_RARE: &str = "Secret Rare";
    pub const STARLIGHT_RARE: &str = "Starlight Rare";
    pub const QUARTER_CENTURY_SECRET_RARE: &str = "Quarter Century Secret Rare";
    pub const COLLECTORS_RARE: &str = "Collector's Rare";
}

/// One card listing taken from the price dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Set and Card Number")]
    pub set_and_number: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl CardRecord {
    pub fn new(
        name: impl Into<String>,
        rarity: impl Into<String>,
        set_and_number: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            rarity: rarity.into(),
            set_and_number: set_and_number.into(),
            price,
        }
    }

    /// Returns true if this card has the given rarity label
    pub fn is_rarity(&self, rarity: &str) -> bool {
        self.rarity == rarity
    }
}
