/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens uniformly random sites on a fresh grid until it
/// percolates and records the fraction of open sites at that moment. Trials
/// are independent, so they run on the rayon pool with one grid per trial.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::coordinates::{from_linear, site_count};
use crate::error::{PercolationError, Result};
use crate::percolation::PercolationGrid;

/// z-score for a two-sided 95% interval
const CONFIDENCE_95: f64 = 1.96;

/// Parameters for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub grid_size: usize,
    pub trials: usize,
    /// Trial `i` is seeded with `seed + i`; `None` draws fresh entropy
    pub seed: Option<u64>,
}

impl StatsConfig {
    pub fn new(grid_size: usize, trials: usize) -> Self {
        StatsConfig {
            grid_size,
            trials,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be at least 1, got {}",
                self.grid_size
            )));
        }
        if self.trials < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "trial count must be at least 1, got {}",
                self.trials
            )));
        }
        Ok(())
    }
}

/// Run a single trial on a fresh n-by-n grid and return the threshold
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = PercolationGrid::new(n)?;
    let sites = site_count(n)?;

    while !grid.percolates() {
        let (row, col) = from_linear(rng.gen_range(0..sites), n)?;
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }

    Ok(grid.open_sites() as f64 / sites as f64)
}

/// Thresholds sampled over a number of independent trials
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Perform `trials` independent experiments on an n-by-n grid
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        Self::run(&StatsConfig::new(grid_size, trials))
    }

    pub fn run(config: &StatsConfig) -> Result<Self> {
        config.validate()?;
        let n = config.grid_size;

        let thresholds = (0..config.trials)
            .into_par_iter()
            .map(|i| -> Result<f64> {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                    None => StdRng::from_entropy(),
                };
                let threshold = run_trial(n, &mut rng)?;
                log::debug!("trial {i}: threshold {threshold:.6}");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;

        let stats = PercolationStats { thresholds };
        log::info!(
            "{} trials on {n}x{n} grid: mean {:.6}, stddev {:.6}",
            config.trials,
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    /// Raw per-trial thresholds, in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation; NaN for a single trial
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len();
        if t < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.thresholds.iter().map(|x| (x - mean).powi(2)).sum();
        (sum_sq / (t - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
