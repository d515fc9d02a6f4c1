use crate::evolution::options::EvolutionOptions;

use super::PopulationStatistics;

/// One row of run statistics, emitted after every main-loop iteration.
///
/// Field order is fixed and matches [`IterationRecord::COLUMNS`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub evaluations: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub diversity: f64,
    pub unique_individuals: usize,
    pub population_size: usize,
    pub problem_size: usize,
    pub bit_flip_probability: f64,
    pub crossover_probability: f64,
    pub random_seed: u64,
}

impl IterationRecord {
    pub const COLUMNS: [&'static str; 10] = [
        "Evaluations",
        "BestFitness",
        "MeanFitness",
        "Diversity",
        "UniqueIndividuals",
        "PopulationSize",
        "ProblemSize",
        "BitFlipProbability",
        "CrossoverProbability",
        "RandomSeed",
    ];

    /// Header line as written by [`CsvSink`](super::CsvSink).
    pub const HEADER: &'static str = "Evaluations;BestFitness;MeanFitness;Diversity;UniqueIndividuals;PopulationSize;ProblemSize;BitFlipProbability;CrossoverProbability;RandomSeed";

    pub fn new(
        options: &EvolutionOptions,
        evaluations: usize,
        best_fitness: f64,
        stats: PopulationStatistics,
    ) -> Self {
        Self {
            evaluations,
            best_fitness,
            mean_fitness: stats.mean_fitness,
            diversity: stats.diversity,
            unique_individuals: stats.unique_individuals,
            population_size: options.get_population_size(),
            problem_size: options.get_problem_size(),
            bit_flip_probability: options.get_bit_flip_probability(),
            crossover_probability: options.get_crossover_probability(),
            random_seed: options.get_random_seed(),
        }
    }

    /// Row fields in column order. Mean and diversity carry four decimals,
    /// probabilities two.
    pub fn to_fields(&self) -> [String; 10] {
        [
            self.evaluations.to_string(),
            self.best_fitness.to_string(),
            format!("{:.4}", self.mean_fitness),
            format!("{:.4}", self.diversity),
            self.unique_individuals.to_string(),
            self.population_size.to_string(),
            self.problem_size.to_string(),
            format!("{:.2}", self.bit_flip_probability),
            format!("{:.2}", self.crossover_probability),
            self.random_seed.to_string(),
        ]
    }
}
