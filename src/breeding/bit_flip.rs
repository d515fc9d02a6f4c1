use super::MutationStrategy;
use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Independent bit-flip mutation: every position is flipped with the same
/// probability, one Bernoulli trial per bit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    probability: f64,
}

impl BitFlipMutation {
    /// # Errors
    ///
    /// Returns a configuration error if `probability` is not in `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Bit-flip probability must be in [0, 1], got {}",
                probability
            )));
        }
        Ok(Self { probability })
    }

    pub fn get_probability(&self) -> f64 {
        self.probability
    }
}

impl MutationStrategy for BitFlipMutation {
    fn mutate(&self, individual: &Individual, rng: &mut RandomNumberGenerator) -> Individual {
        let mut chromosome = individual.chromosome().clone();
        for index in 0..chromosome.len() {
            if rng.chance(self.probability) {
                chromosome.flip(index);
            }
        }
        Individual::new(chromosome)
    }

    fn probability(&self) -> Option<f64> {
        Some(self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::BitString;

    fn sample() -> Individual {
        Individual::new(BitString::from_bits(&[
            true, false, false, true, true, false, true, false, true, true,
        ]))
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mutation = BitFlipMutation::new(0.0).unwrap();

        let child = mutation.mutate(&sample(), &mut rng);
        assert_eq!(child.chromosome(), sample().chromosome());
    }

    #[test]
    fn test_full_probability_is_complement() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mutation = BitFlipMutation::new(1.0).unwrap();

        let child = mutation.mutate(&sample(), &mut rng);
        assert_eq!(child.chromosome(), &sample().chromosome().complement());
    }

    #[test]
    fn test_does_not_touch_input() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mutation = BitFlipMutation::new(0.5).unwrap();
        let mut parent = sample();
        parent.assign_fitness(6.0);

        let child = mutation.mutate(&parent, &mut rng);

        assert_eq!(parent.chromosome(), sample().chromosome());
        assert_eq!(parent.fitness(), Some(6.0));
        assert!(!child.is_evaluated());
    }

    #[test]
    fn test_flip_rate_roughly_matches_probability() {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let mutation = BitFlipMutation::new(0.25).unwrap();
        let parent = Individual::new(BitString::zeros(4000));

        let flipped = mutation.mutate(&parent, &mut rng).chromosome().count_ones();
        assert!((800..1200).contains(&flipped), "flipped {}", flipped);
    }

    #[test]
    fn test_reports_probability() {
        let mutation = BitFlipMutation::new(0.3).unwrap();
        assert_eq!(mutation.probability(), Some(0.3));
        assert_eq!(mutation.get_probability(), 0.3);
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        assert!(BitFlipMutation::new(-0.1).is_err());
        assert!(BitFlipMutation::new(1.5).is_err());
        assert!(BitFlipMutation::new(f64::NAN).is_err());
    }
}
