//! # Replacement
//!
//! A `ReplacementStrategy` folds offspring into the population and returns
//! the next population, which always has the same size as the current one.
pub mod elitist;

use std::fmt::Debug;

use crate::{error::Result, individual::Individual};

pub use elitist::ElitistReplacement;

pub trait ReplacementStrategy: Debug + Send + Sync {
    /// Merges a single evaluated offspring into `population`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population` is empty.
    fn replace(&self, population: Vec<Individual>, offspring: Individual)
        -> Result<Vec<Individual>>;
}
