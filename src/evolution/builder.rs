use crate::{
    breeding::{CrossoverStrategy, MutationStrategy},
    error::{GeneticError, Result},
    problem::Problem,
    replacement::ReplacementStrategy,
    selection::SelectionStrategy,
};

use super::{options::EvolutionOptions, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] from individually supplied parts.
///
/// Every part is required; `build` reports the first missing one as a
/// configuration error.
pub struct EvolutionLauncherBuilder<P, S, C, M, R>
where
    P: Problem,
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    R: ReplacementStrategy,
{
    options: Option<EvolutionOptions>,
    problem: Option<P>,
    selection_strategy: Option<S>,
    crossover_strategy: Option<C>,
    mutation_strategy: Option<M>,
    replacement_strategy: Option<R>,
}

impl<P, S, C, M, R> EvolutionLauncherBuilder<P, S, C, M, R>
where
    P: Problem,
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    R: ReplacementStrategy,
{
    pub fn new() -> Self {
        Self {
            options: None,
            problem: None,
            selection_strategy: None,
            crossover_strategy: None,
            mutation_strategy: None,
            replacement_strategy: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_crossover_strategy(mut self, crossover_strategy: C) -> Self {
        self.crossover_strategy = Some(crossover_strategy);
        self
    }

    pub fn with_mutation_strategy(mut self, mutation_strategy: M) -> Self {
        self.mutation_strategy = Some(mutation_strategy);
        self
    }

    pub fn with_replacement_strategy(mut self, replacement_strategy: R) -> Self {
        self.replacement_strategy = Some(replacement_strategy);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<P, S, C, M, R>> {
        let options = self
            .options
            .ok_or_else(|| GeneticError::Configuration("Options not specified".to_string()))?;

        let problem = self
            .problem
            .ok_or_else(|| GeneticError::Configuration("Problem not specified".to_string()))?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover_strategy = self.crossover_strategy.ok_or_else(|| {
            GeneticError::Configuration("Crossover strategy not specified".to_string())
        })?;

        let mutation_strategy = self.mutation_strategy.ok_or_else(|| {
            GeneticError::Configuration("Mutation strategy not specified".to_string())
        })?;

        let replacement_strategy = self.replacement_strategy.ok_or_else(|| {
            GeneticError::Configuration("Replacement strategy not specified".to_string())
        })?;

        EvolutionLauncher::new(
            options,
            problem,
            selection_strategy,
            crossover_strategy,
            mutation_strategy,
            replacement_strategy,
        )
    }
}

impl<P, S, C, M, R> Default for EvolutionLauncherBuilder<P, S, C, M, R>
where
    P: Problem,
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    R: ReplacementStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        breeding::{BitFlipMutation, SinglePointCrossover},
        problem::OneMax,
        replacement::ElitistReplacement,
        selection::BinaryTournament,
    };

    type Builder = EvolutionLauncherBuilder<
        OneMax,
        BinaryTournament,
        SinglePointCrossover,
        BitFlipMutation,
        ElitistReplacement,
    >;

    #[test]
    fn test_build_with_all_parts() {
        let options = EvolutionOptions::builder()
            .problem_size(10)
            .bit_flip_probability(0.1)
            .build()
            .unwrap();
        let launcher = Builder::new()
            .with_options(options)
            .with_problem(OneMax::new(10))
            .with_selection_strategy(BinaryTournament::new())
            .with_crossover_strategy(SinglePointCrossover::new())
            .with_mutation_strategy(BitFlipMutation::new(0.1).unwrap())
            .with_replacement_strategy(ElitistReplacement::new())
            .build();

        assert!(launcher.is_ok());
    }

    #[test]
    fn test_mutation_rate_must_match_options() {
        let options = EvolutionOptions::builder()
            .problem_size(10)
            .bit_flip_probability(0.05)
            .build()
            .unwrap();
        let result = Builder::new()
            .with_options(options)
            .with_problem(OneMax::new(10))
            .with_selection_strategy(BinaryTournament::new())
            .with_crossover_strategy(SinglePointCrossover::new())
            .with_mutation_strategy(BitFlipMutation::new(1.0).unwrap())
            .with_replacement_strategy(ElitistReplacement::new())
            .build();

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_missing_part_is_reported() {
        let options = EvolutionOptions::builder().problem_size(10).build().unwrap();
        let result = Builder::new()
            .with_options(options)
            .with_problem(OneMax::new(10))
            .with_selection_strategy(BinaryTournament::new())
            .with_mutation_strategy(BitFlipMutation::new(0.1).unwrap())
            .with_replacement_strategy(ElitistReplacement::new())
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert_eq!(msg, "Crossover strategy not specified")
            }
            _ => panic!("Expected Configuration error"),
        }
    }
}
