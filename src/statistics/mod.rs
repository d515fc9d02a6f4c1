//! # Statistics
//!
//! Per-iteration population statistics and the sinks that receive them.
//!
//! - **Mean fitness**: arithmetic mean over the population.
//! - **Diversity**: mean Hamming distance over all `N·(N-1)/2` unordered
//!   pairs. This is the dominant per-iteration cost; it works directly on the
//!   packed chromosomes and allocates nothing.
//! - **Unique individuals**: number of structurally distinct chromosomes.
//!
//! ## Example
//!
//! ```rust
//! use steady_ea::genome::BitString;
//! use steady_ea::individual::Individual;
//! use steady_ea::statistics::{diversity, unique_individuals};
//!
//! let population = vec![
//!     Individual::new(BitString::from_bits(&[true, true])),
//!     Individual::new(BitString::from_bits(&[true, true])),
//!     Individual::new(BitString::from_bits(&[false, false])),
//! ];
//!
//! assert_eq!(unique_individuals(&population), 2);
//! assert!((diversity(&population) - 4.0 / 3.0).abs() < 1e-12);
//! ```
pub mod record;
pub mod sink;

use std::collections::HashSet;

use crate::individual::Individual;

pub use record::IterationRecord;
pub use sink::{CsvSink, MemorySink, NullSink, StatisticsSink};

/// Summary of one population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStatistics {
    pub mean_fitness: f64,
    pub diversity: f64,
    pub unique_individuals: usize,
}

impl PopulationStatistics {
    pub fn compute(population: &[Individual]) -> Self {
        Self {
            mean_fitness: mean_fitness(population),
            diversity: diversity(population),
            unique_individuals: unique_individuals(population),
        }
    }
}

/// Mean fitness of the population, `0.0` when empty.
pub fn mean_fitness(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: f64 = population.iter().map(Individual::score).sum();
    total / population.len() as f64
}

/// Mean pairwise Hamming distance, `0.0` when there are fewer than two
/// individuals.
pub fn diversity(population: &[Individual]) -> f64 {
    let n = population.len();
    if n < 2 {
        return 0.0;
    }

    let total: usize = population
        .iter()
        .enumerate()
        .map(|(i, a)| {
            population[i + 1..]
                .iter()
                .map(|b| a.chromosome().hamming_distance(b.chromosome()))
                .sum::<usize>()
        })
        .sum();

    let pairs = n * (n - 1) / 2;
    total as f64 / pairs as f64
}

/// Number of distinct chromosomes. Fitness plays no part.
pub fn unique_individuals(population: &[Individual]) -> usize {
    population
        .iter()
        .map(Individual::chromosome)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::BitString;

    fn individual(bits: &str, fitness: f64) -> Individual {
        let mut individual = Individual::new(bits.chars().map(|c| c == '1').collect());
        individual.assign_fitness(fitness);
        individual
    }

    #[test]
    fn test_mean_fitness() {
        let population = vec![
            individual("000", 0.0),
            individual("011", 2.0),
            individual("111", 3.0),
            individual("001", 1.0),
        ];
        assert_eq!(mean_fitness(&population), 1.5);
        assert_eq!(mean_fitness(&[]), 0.0);
    }

    #[test]
    fn test_diversity_matches_pairwise_sum() {
        let population = vec![individual("0000", 0.0), individual("1100", 2.0), individual("1111", 4.0)];
        // pairs: 2 + 4 + 2 over 3 pairs
        assert!((diversity(&population) - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_diversity_of_clones_is_zero() {
        let population = vec![individual("1010", 2.0); 5];
        assert_eq!(diversity(&population), 0.0);
        assert_eq!(diversity(&population[..1]), 0.0);
    }

    #[test]
    fn test_unique_ignores_fitness() {
        let population = vec![
            individual("101", 2.0),
            individual("101", 7.0),
            individual("010", 1.0),
        ];
        assert_eq!(unique_individuals(&population), 2);
    }

    #[test]
    fn test_unique_all_distinct() {
        let population: Vec<Individual> = (0..8u8)
            .map(|v| {
                let bits: BitString = (0..3).map(|i| (v >> i) & 1 == 1).collect();
                Individual::new(bits)
            })
            .collect();
        assert_eq!(unique_individuals(&population), 8);
    }

    #[test]
    fn test_compute_bundles_all_three() {
        let population = vec![individual("11", 2.0), individual("00", 0.0)];
        let stats = PopulationStatistics::compute(&population);

        assert_eq!(
            stats,
            PopulationStatistics {
                mean_fitness: 1.0,
                diversity: 2.0,
                unique_individuals: 2,
            }
        );
    }
}
