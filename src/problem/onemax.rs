use super::Problem;
use crate::individual::Individual;

/// OneMax: fitness is the number of set bits. The optimum equals the
/// chromosome length and is reached only by the all-ones string.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneMax {
    size: usize,
}

impl OneMax {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Problem for OneMax {
    fn size(&self) -> usize {
        self.size
    }

    fn evaluate(&self, individual: &Individual) -> f64 {
        individual.chromosome().count_ones() as f64
    }
}
