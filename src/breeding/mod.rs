//! # Breeding
//!
//! Variation operators. A `CrossoverStrategy` combines two parents into a
//! single offspring and a `MutationStrategy` perturbs one individual. Both
//! return new, unevaluated individuals and leave their inputs untouched, so
//! the engine can pass references to parents that remain in the population.
pub mod bit_flip;
pub mod single_point;

use std::fmt::Debug;

use crate::{error::Result, individual::Individual, rng::RandomNumberGenerator};

pub use bit_flip::BitFlipMutation;
pub use single_point::SinglePointCrossover;

pub trait CrossoverStrategy: Debug + Send + Sync {
    /// Produces one offspring from two parents of equal length.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::LengthMismatch` when the parents differ in length.
    fn crossover(
        &self,
        first: &Individual,
        second: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual>;
}

pub trait MutationStrategy: Debug + Send + Sync {
    /// Returns a mutated copy of `individual`.
    fn mutate(&self, individual: &Individual, rng: &mut RandomNumberGenerator) -> Individual;

    /// Per-bit flip probability this strategy applies, if it has one.
    ///
    /// The launcher checks it against the configured bit-flip probability so
    /// the reported statistics describe the mutation that actually ran.
    fn probability(&self) -> Option<f64> {
        None
    }
}
