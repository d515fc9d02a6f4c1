//! # steady_ea
//!
//! A steady-state evolutionary algorithm over fixed-length bit strings.
//!
//! The engine keeps a population of evaluated individuals and, one child at
//! a time, selects two parents, recombines and mutates them, evaluates the
//! child and merges it back into the population. Each part is a pluggable
//! strategy; the reference set is binary tournament selection, single-point
//! crossover, bit-flip mutation and elitist replacement. After every
//! iteration the engine reports mean fitness, diversity and the number of
//! distinct chromosomes to a statistics sink.
//!
//! ## Example
//!
//! ```rust
//! use steady_ea::evolution::{EvolutionOptions, ReferenceLauncher};
//! use steady_ea::problem::OneMax;
//! use steady_ea::statistics::MemorySink;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .max_function_evaluations(3_000)
//!     .problem_size(25)
//!     .early_stop(true)
//!     .random_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let launcher = ReferenceLauncher::with_reference_strategies(options, OneMax::new(25)).unwrap();
//! let mut sink = MemorySink::new();
//! let result = launcher.run(&mut sink).unwrap();
//!
//! assert!(result.function_evaluations <= 3_000);
//! assert_eq!(sink.records().len(), result.iterations);
//! ```
pub mod breeding;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod individual;
pub mod problem;
pub mod replacement;
pub mod rng;
pub mod selection;
pub mod statistics;
pub mod sweep;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, ReferenceLauncher};
pub use genome::BitString;
pub use individual::Individual;
pub use problem::{OneMax, Problem};
