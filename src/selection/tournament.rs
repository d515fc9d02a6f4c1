use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Binary tournament selection.
///
/// Two distinct positions are drawn uniformly without replacement and the
/// fitter of the two individuals wins. On a tie the first drawn wins, so the
/// outcome is a pure function of the two draws.
///
/// A population of one has no distinct pair; its only member is returned
/// without consuming any draws.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct BinaryTournament;

impl BinaryTournament {
    pub fn new() -> Self {
        Self
    }

    /// Draws two distinct indices in `0..population_size`.
    ///
    /// The second draw is taken from `population_size - 1` slots and shifted
    /// past the first, which keeps both draws uniform.
    fn draw_pair(population_size: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        let first = rng.gen_index(population_size);
        let mut second = rng.gen_index(population_size - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}

impl SelectionStrategy for BinaryTournament {
    fn select<'a>(
        &self,
        population: &'a [Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Individual> {
        match population.len() {
            0 => Err(GeneticError::EmptyPopulation),
            1 => Ok(&population[0]),
            n => {
                let (first, second) = Self::draw_pair(n, rng);
                let (a, b) = (&population[first], &population[second]);
                Ok(if b.score() > a.score() { b } else { a })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::BitString;

    fn evaluated(bits: &[bool], fitness: f64) -> Individual {
        let mut individual = Individual::new(BitString::from_bits(bits));
        individual.assign_fitness(fitness);
        individual
    }

    #[test]
    fn test_draw_pair_is_distinct() {
        let mut rng = RandomNumberGenerator::from_seed(42);

        for size in 2..20 {
            for _ in 0..50 {
                let (a, b) = BinaryTournament::draw_pair(size, &mut rng);
                assert_ne!(a, b);
                assert!(a < size && b < size);
            }
        }
    }

    #[test]
    fn test_two_individuals_always_pick_fitter() {
        let population = vec![
            evaluated(&[false, false], 0.0),
            evaluated(&[true, true], 2.0),
        ];
        let mut rng = RandomNumberGenerator::from_seed(7);

        for _ in 0..100 {
            let winner = BinaryTournament::new().select(&population, &mut rng).unwrap();
            assert_eq!(winner.fitness(), Some(2.0));
        }
    }

    #[test]
    fn test_worst_never_wins() {
        let population: Vec<Individual> = (0..6)
            .map(|i| evaluated(&[i % 2 == 0; 3], i as f64))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(13);

        for _ in 0..500 {
            let winner = BinaryTournament::new().select(&population, &mut rng).unwrap();
            assert!(winner.score() > 0.0);
        }
    }

    #[test]
    fn test_tie_prefers_first_drawn() {
        let population = vec![
            evaluated(&[false, true], 1.0),
            evaluated(&[true, false], 1.0),
        ];
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut replay = rng.clone();

        for _ in 0..50 {
            let winner = BinaryTournament::new().select(&population, &mut rng).unwrap();
            let (first, _) = BinaryTournament::draw_pair(2, &mut replay);
            assert_eq!(winner, &population[first]);
        }
    }

    #[test]
    fn test_single_individual() {
        let population = vec![evaluated(&[true], 1.0)];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let winner = BinaryTournament::new().select(&population, &mut rng).unwrap();
        assert_eq!(winner, &population[0]);
    }

    #[test]
    fn test_empty_population() {
        let population: Vec<Individual> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = BinaryTournament::new().select(&population, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
