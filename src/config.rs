use crate::pack_model::DEFAULT_PACKS_PER_BOX;
use std::path::PathBuf;

/// Default price dump location
pub const DEFAULT_INPUT_PATH: &str = "amde_prices.txt";
/// Default CSV export location
pub const DEFAULT_OUTPUT_PATH: &str = "amde.csv";

/// Settings for one run over a price dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub packs_per_box: u32,
    /// Skip the CSV export when false
    pub write_csv: bool,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            packs_per_box: DEFAULT_PACKS_PER_BOX,
            write_csv: true,
        }
    }
}
