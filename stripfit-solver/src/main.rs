use std::path::Path;

use clap::Parser as ClapParser;
use log::warn;

use stripfit_core::entities::solution::Solution;
use stripfit_core::heuristic;
use stripfit_solver::config::SolverConfig;
use stripfit_solver::io;
use stripfit_solver::io::cli::Cli;
use stripfit_solver::race;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("no config file provided, use --config-file to provide a custom SolverConfig");
            SolverConfig::default()
        }
        Some(path) => io::read_config(&path)?,
    };

    let parsed = io::format::parse_instance(&args.input_file)?;
    let outcome = race::run(
        &parsed.rectangles,
        parsed.width,
        parsed.target_height,
        &config,
    );

    let solution = match outcome.result {
        Some(best) => {
            // The race only tracks the winning (permutation, height) pair; replay the
            // heuristic once more to recover the actual placement coordinates.
            let max_spread = config.max_spread.unwrap_or(best.height);
            let replay = heuristic::run(&best.permutation, parsed.width, best.height, max_spread);
            Solution {
                height: best.height,
                placements: replay.placements,
            }
        }
        None => {
            warn!("no feasible height was found within the time budget");
            Solution {
                height: 0,
                placements: Vec::new(),
            }
        }
    };

    io::write_json(&solution, Path::new(&args.output_file))?;
    Ok(())
}
