use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks one parent from the current population. The
/// parent is returned by reference: it stays in the population and neither
/// the population nor the individual is modified.
///
/// # Examples
///
/// ```
/// use steady_ea::genome::BitString;
/// use steady_ea::individual::Individual;
/// use steady_ea::rng::RandomNumberGenerator;
/// use steady_ea::selection::{BinaryTournament, SelectionStrategy};
/// use steady_ea::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Individual> = (0..4)
///         .map(|_| Individual::new(BitString::zeros(8)))
///         .collect();
///     let mut rng = RandomNumberGenerator::from_seed(5);
///
///     let parent = BinaryTournament::new().select(&population, &mut rng)?;
///     assert_eq!(parent.len(), 8);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual from the population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the population is empty.
    fn select<'a>(
        &self,
        population: &'a [Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Individual>;
}
