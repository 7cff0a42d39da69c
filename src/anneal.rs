use log::{debug, info, log_enabled, Level};

use crate::energy::{swap_delta, total_energy};
use crate::error::{PixswapError, Result};
use crate::mapping::Mapping;
use crate::pixel::Pixel;
use crate::rank::rank_order;
use crate::rng::RandomSource;
use crate::schedule::Schedule;

/// What a single annealing step did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The partner rank clamped onto the picked rank; nothing was tried.
    Skipped,
    Accepted { delta: f64 },
    Rejected { delta: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnnealStats {
    pub steps: u64,
    pub skipped: u64,
    pub accepted_downhill: u64,
    pub accepted_uphill: u64,
    pub rejected: u64,
}

impl AnnealStats {
    pub fn accepted(&self) -> u64 {
        self.accepted_downhill + self.accepted_uphill
    }

    /// Accepted swaps over attempted (non-skipped) swaps.
    pub fn acceptance_rate(&self) -> f64 {
        let attempted = self.steps - self.skipped;
        if attempted == 0 {
            0.0
        } else {
            self.accepted() as f64 / attempted as f64
        }
    }

    fn since(&self, earlier: &AnnealStats) -> AnnealStats {
        AnnealStats {
            steps: self.steps - earlier.steps,
            skipped: self.skipped - earlier.skipped,
            accepted_downhill: self.accepted_downhill - earlier.accepted_downhill,
            accepted_uphill: self.accepted_uphill - earlier.accepted_uphill,
            rejected: self.rejected - earlier.rejected,
        }
    }
}

pub(crate) fn check_dimensions(src_pixels: usize, tgt_pixels: usize) -> Result<()> {
    if src_pixels != tgt_pixels {
        return Err(PixswapError::DimensionMismatch { src_pixels, tgt_pixels });
    }
    Ok(())
}

pub(crate) fn check_radius(radius: usize, pixel_count: usize) -> Result<()> {
    if radius == 0 || radius >= pixel_count {
        return Err(PixswapError::Config(format!(
            "swap radius must be in [1, {}] for {} pixels, got {}",
            pixel_count.saturating_sub(1),
            pixel_count,
            radius
        )));
    }
    Ok(())
}

/// Simulated annealing over the source-to-target assignment.
///
/// Proposals swap the assignments of two target positions whose ranks in the
/// target's color ordering are at most `radius` apart. Both pixel buffers are
/// borrowed read-only for the whole run; the mapping and running energy are
/// owned here and only ever change together.
pub struct Annealer<'a> {
    src: &'a [Pixel],
    tgt: &'a [Pixel],
    tgt_order: Vec<usize>,
    mapping: Mapping,
    energy: f64,
    initial_energy: f64,
    radius: usize,
    stats: AnnealStats,
}

impl<'a> Annealer<'a> {
    /// Rank both images, align them rank for rank and compute the starting
    /// energy. Fails before any sorting if the pixel counts differ or the
    /// radius is outside `[1, N-1]`.
    pub fn new(src: &'a [Pixel], tgt: &'a [Pixel], radius: usize) -> Result<Self> {
        check_dimensions(src.len(), tgt.len())?;
        check_radius(radius, src.len())?;

        let src_order = rank_order(src);
        let tgt_order = rank_order(tgt);
        let mapping = Mapping::rank_aligned(&src_order, &tgt_order);
        let energy = total_energy(mapping.as_slice(), src, tgt);
        debug!("Rank-aligned start: N={}, E={:.1}", src.len(), energy);

        Ok(Self {
            src,
            tgt,
            tgt_order,
            mapping,
            energy,
            initial_energy: energy,
            radius,
            stats: AnnealStats::default(),
        })
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }

    /// Running energy, updated incrementally on every accepted swap.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn initial_energy(&self) -> f64 {
        self.initial_energy
    }

    /// Energy recomputed from scratch over the current mapping.
    pub fn recompute_energy(&self) -> f64 {
        total_energy(self.mapping.as_slice(), self.src, self.tgt)
    }

    pub fn stats(&self) -> &AnnealStats {
        &self.stats
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// One Metropolis step at `temperature`.
    ///
    /// Draw order is fixed: the rank, then the offset, then (only for an
    /// uphill move) the acceptance float. A zero offset is bumped to +1
    /// rather than redrawn.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R, temperature: f64) -> StepOutcome {
        let n = self.mapping.len();
        let radius = self.radius as isize;
        self.stats.steps += 1;

        let k = rng.uniform_int(n);
        let mut dk = rng.uniform_int(2 * self.radius + 1) as isize - radius;
        if dk == 0 {
            dk = 1;
        }
        let k2 = (k as isize + dk).clamp(0, n as isize - 1) as usize;
        if k2 == k {
            self.stats.skipped += 1;
            return StepOutcome::Skipped;
        }

        let i = self.tgt_order[k];
        let j = self.tgt_order[k2];
        let delta = swap_delta(self.mapping.as_slice(), self.src, self.tgt, i, j);

        let accept = delta <= 0.0 || rng.uniform_float() < (-delta / temperature).exp();
        if !accept {
            self.stats.rejected += 1;
            return StepOutcome::Rejected { delta };
        }

        self.mapping.swap(i, j);
        self.energy += delta;
        if delta <= 0.0 {
            self.stats.accepted_downhill += 1;
        } else {
            self.stats.accepted_uphill += 1;
        }
        StepOutcome::Accepted { delta }
    }

    /// Run every step of `schedule`. With `progress_every > 0` an info line is
    /// logged each time that many steps have completed.
    pub fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R, schedule: &Schedule, progress_every: usize) {
        let total = schedule.total_steps();
        info!(
            "Annealing: N={}, steps={}, radius={}, T={:.4}->{:.4}",
            self.mapping.len(),
            total,
            self.radius,
            schedule.at(0),
            schedule.at(total - 1)
        );

        let mut last = self.stats;
        for step in 0..total {
            let t = schedule.at(step);
            self.step(rng, t);

            if progress_every > 0 && (step + 1) % progress_every == 0 {
                let window = self.stats.since(&last);
                info!(
                    "step={}/{}, T={:.5}, E={:.1}, accept={:.4}",
                    step + 1,
                    total,
                    t,
                    self.energy,
                    window.acceptance_rate()
                );
                last = self.stats;
            }
        }

        info!(
            "Annealing done: E {:.1} -> {:.1}, accepted={} (uphill {}), rejected={}, skipped={}",
            self.initial_energy,
            self.energy,
            self.stats.accepted(),
            self.stats.accepted_uphill,
            self.stats.rejected,
            self.stats.skipped
        );
        if log_enabled!(Level::Debug) {
            let exact = self.recompute_energy();
            debug!("Energy drift: tracked={:.3}, exact={:.3}, diff={:.3e}", self.energy, exact, self.energy - exact);
        }
    }
}
