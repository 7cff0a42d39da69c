use crate::error::{PixswapError, Result};

/// Exponential interpolation from `t_initial` at step 0 to `t_final` at step
/// `total_steps - 1`.
///
/// # Panics
///
/// Panics if `total_steps < 2`, where the interpolation fraction is undefined.
pub fn temperature(step: usize, total_steps: usize, t_initial: f64, t_final: f64) -> f64 {
    assert!(
        total_steps >= 2,
        "temperature schedule needs at least 2 steps, got {total_steps}"
    );
    if step + 1 == total_steps {
        return t_final;
    }
    let fraction = step as f64 / (total_steps - 1) as f64;
    t_initial * (t_final / t_initial).powf(fraction)
}

/// Validated cooling schedule for a run of `total_steps` steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule {
    total_steps: usize,
    t_initial: f64,
    t_final: f64,
}

impl Schedule {
    pub fn new(total_steps: usize, t_initial: f64, t_final: f64) -> Result<Self> {
        if total_steps < 2 {
            return Err(PixswapError::Config(format!(
                "step count must be at least 2, got {total_steps}"
            )));
        }
        if !(t_initial.is_finite() && t_initial > 0.0) {
            return Err(PixswapError::Config(format!(
                "initial temperature must be positive and finite, got {t_initial}"
            )));
        }
        if !(t_final.is_finite() && t_final > 0.0) {
            return Err(PixswapError::Config(format!(
                "final temperature must be positive and finite, got {t_final}"
            )));
        }
        Ok(Self { total_steps, t_initial, t_final })
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn at(&self, step: usize) -> f64 {
        temperature(step, self.total_steps, self.t_initial, self.t_final)
    }
}
