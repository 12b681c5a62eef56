use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Strip packing: Tabu Search + IDBS over the skyline heuristic")]
pub struct Cli {
    /// Rectangle file in the format of spec.md §6: count, then `W H_target`, then `w h` per line.
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Optional JSON-serialized SolverConfig; defaults are used if omitted.
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Where to write the resulting `{ height, placements }` JSON.
    #[arg(short, long, value_name = "FILE")]
    pub output_file: PathBuf,
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}
