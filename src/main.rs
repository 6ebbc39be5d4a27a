//! YGO Pack Value - expected value of a booster pack from a set price dump

use clap::Parser;
use std::path::PathBuf;
use ygo_pack_value::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use ygo_pack_value::pack_model::DEFAULT_PACKS_PER_BOX;
use ygo_pack_value::{format_report, run, RunConfig};

/// Export a set price dump to CSV and estimate pack and box value
#[derive(Parser, Debug)]
#[command(name = "ygo_pack_value")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the price dump (six lines per card)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Path of the CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Number of packs in a box
    #[arg(long, default_value_t = DEFAULT_PACKS_PER_BOX)]
    packs_per_box: u32,

    /// Do not write the CSV export
    #[arg(long, default_value_t = false)]
    no_csv: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            input_path: args.input,
            output_path: args.output,
            packs_per_box: args.packs_per_box,
            write_csv: !args.no_csv,
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=ygo_pack_value=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from(Args::parse());
    log::info!("Input: {}", config.input_path.display());

    match run(&config) {
        Ok(report) => print!("{}", format_report(&report)),
        Err(e) => {
            log::error!("Application error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let config = RunConfig::from(Args::try_parse_from(["ygo_pack_value"]).unwrap());
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_args_paths_and_flags() {
        let args = Args::try_parse_from([
            "ygo_pack_value",
            "--input",
            "dumps/rota.txt",
            "-o",
            "out/rota.csv",
            "--packs-per-box",
            "36",
            "--no-csv",
        ])
        .unwrap();
        let config = RunConfig::from(args);

        assert_eq!(config.input_path, PathBuf::from("dumps/rota.txt"));
        assert_eq!(config.output_path, PathBuf::from("out/rota.csv"));
        assert_eq!(config.packs_per_box, 36);
        assert!(!config.write_csv);
    }
}
