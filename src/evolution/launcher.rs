use tracing::{debug, info, warn};

use super::options::EvolutionOptions;
use crate::{
    breeding::{BitFlipMutation, CrossoverStrategy, MutationStrategy, SinglePointCrossover},
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    problem::Problem,
    replacement::{ElitistReplacement, ReplacementStrategy},
    rng::RandomNumberGenerator,
    selection::{BinaryTournament, SelectionStrategy},
    statistics::{IterationRecord, PopulationStatistics, StatisticsSink},
};

/// Outcome of a run.
#[derive(Debug)]
pub struct EvolutionResult {
    /// Fittest individual evaluated during the run, whether or not it is
    /// still in the final population.
    pub best: Individual,
    /// Total fitness evaluations, seeding included.
    pub function_evaluations: usize,
    /// Main-loop iterations executed.
    pub iterations: usize,
    /// The run stopped because a child reached the optimum.
    pub terminated_early: bool,
    /// First error reported by the statistics sink, if any.
    pub sink_error: Option<GeneticError>,
}

impl EvolutionResult {
    pub fn best_fitness(&self) -> f64 {
        self.best.score()
    }
}

/// Launcher wired with the reference strategies: binary tournament,
/// single-point crossover, bit-flip mutation and elitist replacement.
pub type ReferenceLauncher<P> =
    EvolutionLauncher<P, BinaryTournament, SinglePointCrossover, BitFlipMutation, ElitistReplacement>;

/// Steady-state evolutionary algorithm over bit strings.
///
/// Each main-loop iteration selects two parents, produces one child by
/// (optional) crossover followed by mutation, evaluates it, merges it into
/// the population and reports statistics for the resulting population. The
/// loop ends when the evaluation budget is spent or, with early stop
/// enabled, when a child reaches fitness equal to the problem size.
///
/// A launcher holds no per-run state and can be run any number of times.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<P, S, C, M, R>
where
    P: Problem,
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    R: ReplacementStrategy,
{
    options: EvolutionOptions,
    problem: P,
    selection: S,
    crossover: C,
    mutation: M,
    replacement: R,
}

/// Mutable bookkeeping of a single run.
struct RunState {
    function_evaluations: usize,
    best: Option<Individual>,
    sink_error: Option<GeneticError>,
}

impl RunState {
    fn new() -> Self {
        Self {
            function_evaluations: 0,
            best: None,
            sink_error: None,
        }
    }

    fn best_score(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::NEG_INFINITY, Individual::score)
    }

    /// Keeps the first sink failure; later ones are dropped silently.
    fn note_sink_result(&mut self, result: Result<()>) {
        if let Err(e) = result {
            if self.sink_error.is_none() {
                warn!(
                    evaluations = self.function_evaluations,
                    error = %e,
                    "statistics sink failed, continuing without retry"
                );
                self.sink_error = Some(e);
            }
        }
    }
}

impl<P, S, C, M, R> EvolutionLauncher<P, S, C, M, R>
where
    P: Problem,
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    R: ReplacementStrategy,
{
    /// Creates a launcher after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid or
    /// the problem's chromosome length differs from the configured problem
    /// size, or if the mutation strategy flips bits at a rate other than the
    /// configured bit-flip probability.
    pub fn new(
        options: EvolutionOptions,
        problem: P,
        selection: S,
        crossover: C,
        mutation: M,
        replacement: R,
    ) -> Result<Self> {
        options.validate()?;

        if problem.size() != options.get_problem_size() {
            return Err(GeneticError::Configuration(format!(
                "Problem size {} does not match configured problem size {}",
                problem.size(),
                options.get_problem_size()
            )));
        }

        if let Some(probability) = mutation.probability() {
            if probability != options.get_bit_flip_probability() {
                return Err(GeneticError::Configuration(format!(
                    "Mutation strategy flips bits with probability {} but the configured bit-flip probability is {}",
                    probability,
                    options.get_bit_flip_probability()
                )));
            }
        }

        Ok(Self {
            options,
            problem,
            selection,
            crossover,
            mutation,
            replacement,
        })
    }

    pub fn get_options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn get_problem(&self) -> &P {
        &self.problem
    }

    /// Runs the algorithm with a random source seeded from the configured seed.
    ///
    /// Two calls on the same launcher produce identical runs.
    pub fn run<K>(&self, sink: &mut K) -> Result<EvolutionResult>
    where
        K: StatisticsSink + ?Sized,
    {
        let mut rng = RandomNumberGenerator::from_seed(self.options.get_random_seed());
        self.run_with_rng(&mut rng, sink)
    }

    /// Runs the algorithm drawing from the supplied random source.
    ///
    /// # Errors
    ///
    /// Fails if the problem returns a non-finite fitness or a strategy
    /// reports an error. Statistics sink failures do not fail the run; the
    /// first one is returned in [`EvolutionResult::sink_error`].
    #[tracing::instrument(
        skip_all,
        fields(
            seed = self.options.get_random_seed(),
            population_size = self.options.get_population_size(),
            problem_size = self.options.get_problem_size()
        )
    )]
    pub fn run_with_rng<K>(
        &self,
        rng: &mut RandomNumberGenerator,
        sink: &mut K,
    ) -> Result<EvolutionResult>
    where
        K: StatisticsSink + ?Sized,
    {
        let population_size = self.options.get_population_size();
        let max_evaluations = self.options.get_max_function_evaluations();
        let crossover_probability = self.options.get_crossover_probability();
        let optimum = self.options.get_problem_size() as f64;

        info!(
            max_evaluations,
            crossover_probability,
            bit_flip_probability = self.options.get_bit_flip_probability(),
            early_stop = self.options.is_early_stop(),
            "starting run"
        );

        let mut run = RunState::new();

        // Seeding is not budget-limited; the budget is first checked by the loop.
        let mut population = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let mut individual = self.problem.generate_random_individual(rng);
            self.evaluate(&mut individual, &mut run)?;
            population.push(individual);
        }

        let mut iterations = 0;
        let mut terminated_early = false;

        while run.function_evaluations < max_evaluations {
            let first = self.selection.select(&population, rng)?;
            let second = self.selection.select(&population, rng)?;

            let mut child = if rng.chance(crossover_probability) {
                let offspring = self.crossover.crossover(first, second, rng)?;
                self.mutation.mutate(&offspring, rng)
            } else {
                self.mutation.mutate(first, rng)
            };

            self.evaluate(&mut child, &mut run)?;
            let child_fitness = child.score();

            population = self.replacement.replace(population, child)?;
            debug_assert_eq!(population.len(), population_size);
            iterations += 1;

            let stats = PopulationStatistics::compute(&population);
            debug!(
                evaluations = run.function_evaluations,
                best = run.best_score(),
                mean = stats.mean_fitness,
                diversity = stats.diversity,
                unique = stats.unique_individuals,
                "iteration"
            );
            let record = IterationRecord::new(
                &self.options,
                run.function_evaluations,
                run.best_score(),
                stats,
            );
            run.note_sink_result(sink.record(&record));

            if self.options.is_early_stop() && child_fitness == optimum {
                terminated_early = true;
                break;
            }
        }

        run.note_sink_result(sink.finish());

        let best = run
            .best
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        info!(
            evaluations = run.function_evaluations,
            iterations,
            best_fitness = best.score(),
            terminated_early,
            "run finished"
        );

        Ok(EvolutionResult {
            best,
            function_evaluations: run.function_evaluations,
            iterations,
            terminated_early,
            sink_error: run.sink_error,
        })
    }

    /// Scores a fresh individual, counts the evaluation and updates the best
    /// record when the new fitness is strictly higher.
    fn evaluate(&self, individual: &mut Individual, run: &mut RunState) -> Result<()> {
        let fitness = self.problem.evaluate(individual);
        if !fitness.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                fitness
            )));
        }

        individual.assign_fitness(fitness);
        run.function_evaluations += 1;

        if fitness > run.best_score() {
            debug!(evaluations = run.function_evaluations, fitness, "new best");
            run.best = Some(individual.clone());
        }

        Ok(())
    }
}

impl<P: Problem> ReferenceLauncher<P> {
    /// Creates a launcher with the reference strategies, taking the
    /// mutation rate from the options.
    pub fn with_reference_strategies(options: EvolutionOptions, problem: P) -> Result<Self> {
        let mutation = BitFlipMutation::new(options.get_bit_flip_probability())?;
        Self::new(
            options,
            problem,
            BinaryTournament::new(),
            SinglePointCrossover::new(),
            mutation,
            ElitistReplacement::new(),
        )
    }
}
