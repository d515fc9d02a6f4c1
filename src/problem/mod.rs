//! # Problem
//!
//! The `Problem` trait is the fitness landscape the engine optimizes. It
//! creates random individuals of the problem's length and scores them,
//! higher being better. Both operations must be pure with respect to the
//! engine's state: the only side effect allowed is consuming draws from the
//! supplied random source.
//!
//! Problems that take part in early stopping should return integral fitness
//! values, since the optimum check compares fitness to the problem size
//! exactly.
pub mod onemax;

use std::fmt::Debug;

use crate::{genome::BitString, individual::Individual, rng::RandomNumberGenerator};

pub use onemax::OneMax;

pub trait Problem: Debug + Send + Sync {
    /// Length of every chromosome for this problem.
    fn size(&self) -> usize;

    /// Creates an unevaluated individual with uniformly random bits.
    fn generate_random_individual(&self, rng: &mut RandomNumberGenerator) -> Individual {
        Individual::new(BitString::random(self.size(), rng))
    }

    /// Scores an individual. Must return a finite value.
    fn evaluate(&self, individual: &Individual) -> f64;
}
