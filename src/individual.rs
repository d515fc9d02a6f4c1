//! # Individual
//!
//! A chromosome together with its fitness. Fitness starts unset and is
//! assigned exactly once, by the engine, right after the individual is
//! created. Operators never modify an existing individual: crossover and
//! mutation always return a fresh, unevaluated one, so parents that are still
//! resident in the population stay valid.

use crate::genome::BitString;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    chromosome: BitString,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(chromosome: BitString) -> Self {
        Self {
            chromosome,
            fitness: None,
        }
    }

    pub fn chromosome(&self) -> &BitString {
        &self.chromosome
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness used for ranking. Unevaluated individuals rank below every
    /// evaluated one.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    pub(crate) fn assign_fitness(&mut self, fitness: f64) {
        debug_assert!(self.fitness.is_none(), "fitness assigned twice");
        self.fitness = Some(fitness);
    }
}

impl From<BitString> for Individual {
    fn from(chromosome: BitString) -> Self {
        Self::new(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unevaluated() {
        let individual = Individual::new(BitString::ones(4));

        assert!(!individual.is_evaluated());
        assert_eq!(individual.fitness(), None);
        assert_eq!(individual.score(), f64::NEG_INFINITY);
        assert_eq!(individual.len(), 4);
        assert!(!individual.is_empty());
        assert!(Individual::from(BitString::zeros(0)).is_empty());
    }

    #[test]
    fn test_assign_fitness() {
        let mut individual = Individual::from(BitString::zeros(3));
        individual.assign_fitness(2.0);

        assert!(individual.is_evaluated());
        assert_eq!(individual.fitness(), Some(2.0));
        assert_eq!(individual.score(), 2.0);
    }

    #[test]
    #[should_panic(expected = "fitness assigned twice")]
    #[cfg(debug_assertions)]
    fn test_assign_fitness_twice_panics_in_debug() {
        let mut individual = Individual::new(BitString::zeros(3));
        individual.assign_fitness(1.0);
        individual.assign_fitness(2.0);
    }
}
