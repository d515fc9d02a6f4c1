//! Runs the OneMax parameter study.
//!
//! ```text
//! steady-ea <POPULATION_SIZE> <FUNCTION_EVALUATIONS> [--output-dir <DIR>]
//! ```
//!
//! Missing or non-numeric arguments print usage and exit with status 2. A
//! configuration the engine rejects (for example a zero population size) or
//! a failed run is logged and exits with status 1.

use std::{path::PathBuf, process};

use clap::{value_parser, Arg, Command};
use steady_ea::sweep::{run_sweep, ParameterGrid};
use tracing::{error, info, Level};

fn main() {
    tracing_subscriber::fmt()
        .with_thread_ids(true)
        .with_max_level(Level::INFO)
        .init();

    let matches = Command::new("steady-ea")
        .about("Steady-state evolutionary algorithm parameter study on OneMax")
        .arg(
            Arg::new("population-size")
                .help("Number of individuals in every run")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("function-evaluations")
                .help("Fitness evaluation budget of every run")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory receiving the per-run statistics files")
                .default_value("Data")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let population_size = matches
        .get_one::<usize>("population-size")
        .copied()
        .unwrap_or_default();
    let function_evaluations = matches
        .get_one::<usize>("function-evaluations")
        .copied()
        .unwrap_or_default();
    let output_dir = matches
        .get_one::<PathBuf>("output-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("Data"));

    let grid = ParameterGrid::reference(population_size, function_evaluations, output_dir);

    match run_sweep(&grid) {
        Ok(summaries) => {
            let failed_outputs = summaries.iter().filter(|s| s.sink_error.is_some()).count();
            info!(runs = summaries.len(), failed_outputs, "all runs finished");
        }
        Err(e) => {
            error!(error = %e, "sweep failed");
            process::exit(1);
        }
    }
}
