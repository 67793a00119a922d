use crate::{advance, GenerationDriver, Grid, Result, SimConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// A grid together with the long-lived driver that steps it.
///
/// The same driver is resumed across every generation; each step hands the
/// freshly built grid back as the source of the next one.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    driver: GenerationDriver,
    generation: u64,
}

impl Simulation {
    /// Build and randomly populate a grid as described by `config`.
    pub fn new(config: SimConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = Grid::new(config.height, config.width)?;
        grid.populate(config.population, &mut rng)?;
        info!(
            height = config.height,
            width = config.width,
            population = ?config.population,
            seed = ?config.seed,
            alive = grid.alive_count(),
            "simulation populated"
        );
        Ok(Self::from_grid(grid))
    }

    /// Start from an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        let driver = GenerationDriver::for_grid(&grid);
        Simulation {
            grid,
            driver,
            generation: 0,
        }
    }

    /// Advance one generation.
    ///
    /// On failure the current grid is kept, the driver is rewound to the start
    /// of a sweep, and the error is returned.
    pub fn step(&mut self) -> Result<&Grid> {
        match advance(&self.grid, &mut self.driver) {
            Ok(next) => {
                self.grid = next;
                self.generation += 1;
                debug!(
                    generation = self.generation,
                    alive = self.grid.alive_count(),
                    "generation complete"
                );
                Ok(&self.grid)
            }
            Err(e) => {
                warn!(error = %e, "generation aborted, resetting driver");
                self.driver.reset();
                Err(e)
            }
        }
    }

    /// Advance `generations` generations, stopping at the first failure.
    pub fn advance(&mut self, generations: usize) -> Result<&Grid> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(&self.grid)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations produced since this simulation was built. Failed steps
    /// are not counted.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
