//! # Parameter sweep
//!
//! Runs OneMax over the cartesian product of a parameter grid. Runs are
//! independent: each owns its random source, population and output file, so
//! they execute on a bounded `rayon` pool without any shared mutable state
//! besides a progress counter.
//!
//! Every run writes its statistics to
//! `ProS_{size}/Es_{early_stop}/BITFLIP_{p:.2}_CROSSOVER_{c:.2}/randomSeed_{seed}.csv`
//! below the grid's output directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use steady_ea::sweep::{run_sweep, ParameterGrid};
//!
//! let grid = ParameterGrid::reference(100, 10_000, "Data");
//! let summaries = run_sweep(&grid).unwrap();
//! println!("{} runs finished", summaries.len());
//! ```

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    error::{GeneticError, Result},
    evolution::{EvolutionOptions, ReferenceLauncher},
    problem::OneMax,
    statistics::{CsvSink, NullSink},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub population_size: usize,
    pub max_function_evaluations: usize,
    pub seeds: Vec<u64>,
    pub problem_sizes: Vec<usize>,
    pub bit_flip_probabilities: Vec<f64>,
    pub crossover_probabilities: Vec<f64>,
    pub early_stop: Vec<bool>,
    /// Upper bound on concurrently executing runs.
    pub workers: usize,
    pub output_dir: PathBuf,
}

impl ParameterGrid {
    /// The study grid: seeds 1 to 99, problem sizes 25 and 50, bit-flip
    /// probabilities 0.05 to 0.30 in steps of 0.05, crossover probabilities
    /// 0 to 1 in steps of 0.25, early stop off and on, ten workers.
    pub fn reference<D: Into<PathBuf>>(
        population_size: usize,
        max_function_evaluations: usize,
        output_dir: D,
    ) -> Self {
        Self {
            population_size,
            max_function_evaluations,
            seeds: (1..100).collect(),
            problem_sizes: vec![25, 50],
            bit_flip_probabilities: (1..=6).map(|i| i as f64 * 0.05).collect(),
            crossover_probabilities: (0..=4).map(|i| i as f64 * 0.25).collect(),
            early_stop: vec![false, true],
            workers: 10,
            output_dir: output_dir.into(),
        }
    }

    /// Number of runs in the grid.
    pub fn len(&self) -> usize {
        self.seeds.len()
            * self.problem_sizes.len()
            * self.bit_flip_probabilities.len()
            * self.crossover_probabilities.len()
            * self.early_stop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the grid into validated run configurations, seed-major.
    pub fn combinations(&self) -> Result<Vec<EvolutionOptions>> {
        let mut combinations = Vec::with_capacity(self.len());
        for &seed in &self.seeds {
            for &problem_size in &self.problem_sizes {
                for &bit_flip in &self.bit_flip_probabilities {
                    for &crossover in &self.crossover_probabilities {
                        for &early_stop in &self.early_stop {
                            combinations.push(EvolutionOptions::new(
                                self.population_size,
                                self.max_function_evaluations,
                                crossover,
                                bit_flip,
                                problem_size,
                                early_stop,
                                seed,
                            )?);
                        }
                    }
                }
            }
        }
        Ok(combinations)
    }
}

/// Output file of one run below `output_dir`.
pub fn run_path(output_dir: &Path, options: &EvolutionOptions) -> PathBuf {
    output_dir
        .join(format!("ProS_{}", options.get_problem_size()))
        .join(format!("Es_{}", options.is_early_stop()))
        .join(format!(
            "BITFLIP_{:.2}_CROSSOVER_{:.2}",
            options.get_bit_flip_probability(),
            options.get_crossover_probability()
        ))
        .join(format!("randomSeed_{}.csv", options.get_random_seed()))
}

/// Result of one run in a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub options: EvolutionOptions,
    pub path: PathBuf,
    pub best_fitness: f64,
    pub function_evaluations: usize,
    pub terminated_early: bool,
    /// Set when the statistics file could not be created or written.
    pub sink_error: Option<String>,
}

/// Runs every grid combination and returns their summaries in grid order.
///
/// # Errors
///
/// Fails on an invalid grid or if any run fails algorithmically. Output
/// file failures do not fail the sweep; they are reported per run in
/// [`RunSummary::sink_error`].
pub fn run_sweep(grid: &ParameterGrid) -> Result<Vec<RunSummary>> {
    if grid.workers == 0 {
        return Err(GeneticError::Configuration(
            "Sweep needs at least one worker".to_string(),
        ));
    }

    let combinations = grid.combinations()?;
    let total = combinations.len();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(grid.workers)
        .build()
        .map_err(|e| GeneticError::Configuration(format!("Failed to build thread pool: {}", e)))?;

    info!(total, workers = grid.workers, output_dir = %grid.output_dir.display(), "starting sweep");

    let completed = AtomicUsize::new(0);
    let started = Instant::now();

    let summaries = pool.install(|| {
        combinations
            .into_par_iter()
            .map(|options| {
                let summary = run_single(&grid.output_dir, options)?;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                let percent = 100.0 * done as f64 / total as f64;
                let elapsed = started.elapsed();
                info!(
                    completed = done,
                    total,
                    percent,
                    elapsed = ?elapsed,
                    eta = ?estimate_remaining(elapsed, done, total),
                    "sweep progress"
                );
                Ok(summary)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    info!(total, elapsed = ?started.elapsed(), "sweep finished");
    Ok(summaries)
}

/// Remaining time assuming every outstanding run takes the average time of
/// the completed ones.
fn estimate_remaining(elapsed: Duration, completed: usize, total: usize) -> Duration {
    if completed == 0 {
        return Duration::ZERO;
    }
    let remaining = total.saturating_sub(completed);
    elapsed.div_f64(completed as f64).mul_f64(remaining as f64)
}

fn run_single(output_dir: &Path, options: EvolutionOptions) -> Result<RunSummary> {
    let path = run_path(output_dir, &options);
    let launcher = ReferenceLauncher::with_reference_strategies(
        options.clone(),
        OneMax::new(options.get_problem_size()),
    )?;

    let result = match CsvSink::create(&path) {
        Ok(mut sink) => launcher.run(&mut sink)?,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open statistics file, running without it");
            let mut result = launcher.run(&mut NullSink)?;
            result.sink_error = Some(e);
            result
        }
    };

    Ok(RunSummary {
        best_fitness: result.best_fitness(),
        function_evaluations: result.function_evaluations,
        terminated_early: result.terminated_early,
        sink_error: result.sink_error.map(|e| e.to_string()),
        options,
        path,
    })
}
