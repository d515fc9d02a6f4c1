use super::CrossoverStrategy;
use crate::{
    error::{GeneticError, Result},
    genome::BitString,
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Single-point crossover.
///
/// A cut point is drawn uniformly from `1..len`; the offspring takes the
/// first `cut` bits of the first parent and the rest from the second. A
/// chromosome of length one (or zero) has no interior cut point and the
/// offspring is a copy of the first parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Offspring for an explicit cut point.
    pub fn cross_at(first: &Individual, second: &Individual, cut: usize) -> Individual {
        Individual::new(BitString::splice(
            first.chromosome(),
            second.chromosome(),
            cut,
        ))
    }
}

impl CrossoverStrategy for SinglePointCrossover {
    fn crossover(
        &self,
        first: &Individual,
        second: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if first.len() != second.len() {
            return Err(GeneticError::LengthMismatch {
                expected: first.len(),
                actual: second.len(),
            });
        }

        if first.len() < 2 {
            return Ok(Individual::new(first.chromosome().clone()));
        }

        let cut = rng.gen_range(1..first.len());
        Ok(Self::cross_at(first, second, cut))
    }
}
