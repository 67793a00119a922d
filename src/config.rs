use crate::Population;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to set up a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimConfig {
    pub height: usize,
    pub width: usize,
    pub population: Population,
    /// Seed for the population draw. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// A `height` x `width` grid with a fifth of its cell count drawn alive.
    pub fn new(height: usize, width: usize) -> Self {
        SimConfig {
            height,
            width,
            population: Population::Count(height.saturating_mul(width) / 5),
            seed: None,
        }
    }

    pub fn with_population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}
