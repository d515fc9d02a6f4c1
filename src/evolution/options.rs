//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of a single run. It
//! is validated before anything is evaluated and never changes afterwards.
//!
//! ## Example
//!
//! ```rust
//! use steady_ea::evolution::options::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .max_function_evaluations(2_000)
//!     .crossover_probability(0.75)
//!     .bit_flip_probability(0.05)
//!     .problem_size(25)
//!     .early_stop(true)
//!     .random_seed(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_population_size(), 20);
//! ```
//!
//! ## Fields
//!
//! - `population_size`: number of individuals kept in the population.
//! - `max_function_evaluations`: evaluation budget bounding the main loop.
//! - `crossover_probability`: chance, per iteration, that crossover is applied.
//! - `bit_flip_probability`: per-bit flip chance used by mutation.
//! - `problem_size`: chromosome length.
//! - `early_stop`: stop as soon as a child reaches the optimum.
//! - `random_seed`: seed of the run's random source.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    max_function_evaluations: usize,
    crossover_probability: f64,
    bit_flip_probability: f64,
    problem_size: usize,
    early_stop: bool,
    random_seed: u64,
}

impl EvolutionOptions {
    /// Creates a validated `EvolutionOptions` instance with all parameters specified.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if any value is out of range.
    pub fn new(
        population_size: usize,
        max_function_evaluations: usize,
        crossover_probability: f64,
        bit_flip_probability: f64,
        problem_size: usize,
        early_stop: bool,
        random_seed: u64,
    ) -> Result<Self> {
        let options = Self {
            population_size,
            max_function_evaluations,
            crossover_probability,
            bit_flip_probability,
            problem_size,
            early_stop,
            random_seed,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks every field. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.max_function_evaluations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum function evaluations must be positive".to_string(),
            ));
        }
        if self.problem_size == 0 {
            return Err(GeneticError::Configuration(
                "Problem size must be positive".to_string(),
            ));
        }
        check_probability("Crossover probability", self.crossover_probability)?;
        check_probability("Bit-flip probability", self.bit_flip_probability)?;
        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_function_evaluations(&self) -> usize {
        self.max_function_evaluations
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_bit_flip_probability(&self) -> f64 {
        self.bit_flip_probability
    }

    pub fn get_problem_size(&self) -> usize {
        self.problem_size
    }

    pub fn is_early_stop(&self) -> bool {
        self.early_stop
    }

    pub fn get_random_seed(&self) -> u64 {
        self.random_seed
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset fields fall back to the defaults of [`EvolutionOptions::default`].
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_function_evaluations: 10_000,
            crossover_probability: 1.0,
            bit_flip_probability: 0.05,
            problem_size: 25,
            early_stop: false,
            random_seed: 1,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    max_function_evaluations: Option<usize>,
    crossover_probability: Option<f64>,
    bit_flip_probability: Option<f64>,
    problem_size: Option<usize>,
    early_stop: Option<bool>,
    random_seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_function_evaluations(mut self, value: usize) -> Self {
        self.max_function_evaluations = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn bit_flip_probability(mut self, value: f64) -> Self {
        self.bit_flip_probability = Some(value);
        self
    }

    pub fn problem_size(mut self, value: usize) -> Self {
        self.problem_size = Some(value);
        self
    }

    pub fn early_stop(mut self, value: bool) -> Self {
        self.early_stop = Some(value);
        self
    }

    pub fn random_seed(mut self, value: u64) -> Self {
        self.random_seed = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        EvolutionOptions::new(
            self.population_size.unwrap_or(defaults.population_size),
            self.max_function_evaluations
                .unwrap_or(defaults.max_function_evaluations),
            self.crossover_probability
                .unwrap_or(defaults.crossover_probability),
            self.bit_flip_probability
                .unwrap_or(defaults.bit_flip_probability),
            self.problem_size.unwrap_or(defaults.problem_size),
            self.early_stop.unwrap_or(defaults.early_stop),
            self.random_seed.unwrap_or(defaults.random_seed),
        )
    }
}
