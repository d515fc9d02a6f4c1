use super::ReplacementStrategy;
use crate::{
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
};

/// Elitist steady-state replacement.
///
/// The offspring replaces the weakest member of the population only if it
/// is strictly fitter; otherwise the population is returned unchanged and
/// the offspring is dropped. The best fitness in the population can never
/// decrease. When several members share the lowest fitness the first of
/// them is the one evicted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistReplacement;

impl ElitistReplacement {
    pub fn new() -> Self {
        Self
    }

    /// Index of the first individual with the lowest fitness.
    pub fn weakest_index(population: &[Individual]) -> Option<usize> {
        population
            .iter()
            .enumerate()
            .fold(None, |weakest: Option<(usize, f64)>, (index, individual)| {
                match weakest {
                    Some((_, score)) if score <= individual.score() => weakest,
                    _ => Some((index, individual.score())),
                }
            })
            .map(|(index, _)| index)
    }
}

impl ReplacementStrategy for ElitistReplacement {
    fn replace(
        &self,
        mut population: Vec<Individual>,
        offspring: Individual,
    ) -> Result<Vec<Individual>> {
        let weakest = Self::weakest_index(&population)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        if offspring.score() > population[weakest].score() {
            population[weakest] = offspring;
        }

        Ok(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::BitString;

    fn evaluated(len: usize, fitness: f64) -> Individual {
        let mut individual = Individual::new(BitString::zeros(len));
        individual.assign_fitness(fitness);
        individual
    }

    fn scores(population: &[Individual]) -> Vec<f64> {
        population.iter().map(Individual::score).collect()
    }

    #[test]
    fn test_replaces_weakest_when_strictly_better() {
        let population = vec![evaluated(4, 3.0), evaluated(4, 1.0), evaluated(4, 2.0)];

        let next = ElitistReplacement::new()
            .replace(population, evaluated(4, 1.5))
            .unwrap();

        assert_eq!(scores(&next), vec![3.0, 1.5, 2.0]);
    }

    #[test]
    fn test_equal_fitness_does_not_replace() {
        let population = vec![evaluated(4, 3.0), evaluated(4, 1.0)];
        let mut offspring = Individual::new(BitString::ones(4));
        offspring.assign_fitness(1.0);

        let next = ElitistReplacement::new()
            .replace(population, offspring)
            .unwrap();

        assert_eq!(scores(&next), vec![3.0, 1.0]);
        assert_eq!(next[1].chromosome(), &BitString::zeros(4));
    }

    #[test]
    fn test_size_is_preserved() {
        let population: Vec<Individual> = (0..10).map(|i| evaluated(4, i as f64)).collect();
        let replacement = ElitistReplacement::new();

        let next = replacement.replace(population, evaluated(4, 100.0)).unwrap();
        assert_eq!(next.len(), 10);
        let next = replacement.replace(next, evaluated(4, -1.0)).unwrap();
        assert_eq!(next.len(), 10);
    }

    #[test]
    fn test_first_weakest_is_evicted() {
        let population = vec![evaluated(4, 2.0), evaluated(4, 0.0), evaluated(4, 0.0)];

        assert_eq!(ElitistReplacement::weakest_index(&population), Some(1));

        let next = ElitistReplacement::new()
            .replace(population, evaluated(4, 5.0))
            .unwrap();
        assert_eq!(scores(&next), vec![2.0, 5.0, 0.0]);
    }

    #[test]
    fn test_empty_population() {
        let result = ElitistReplacement::new().replace(Vec::new(), evaluated(4, 1.0));
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
