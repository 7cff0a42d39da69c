pub mod anneal;
pub mod energy;
pub mod error;
pub mod image_io;
pub mod mapping;
pub mod pixel;
pub mod rank;
pub mod rng;
pub mod schedule;

use std::time::{Duration, Instant};

use image::{DynamicImage, RgbaImage};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

pub use anneal::{AnnealStats, Annealer, StepOutcome};
pub use energy::{pix_energy, swap_delta, total_energy};
pub use error::{PixswapError, Result};
pub use image_io::{decode, encode};
pub use mapping::Mapping;
pub use pixel::{color_key, Pixel};
pub use rank::rank_order;
pub use rng::RandomSource;
pub use schedule::{temperature, Schedule};

#[derive(Debug, Clone)]
pub struct Config {
    /// Total annealing steps, at least 2.
    pub steps: usize,
    /// Largest rank distance between the two halves of a proposed swap.
    pub radius: usize,
    pub t_initial: f64,
    pub t_final: f64,
    pub seed: u64,
    /// Log progress every this many steps; 0 turns progress lines off.
    pub progress_every: usize,
}

pub fn default_config(fast: bool) -> Config {
    if fast {
        Config { steps: 4_000_000, radius: 2000, t_initial: 2.0, t_final: 1e-3, seed: 12345, progress_every: 1_000_000 }
    } else {
        Config { steps: 40_000_000, radius: 8000, t_initial: 2.0, t_final: 1e-3, seed: 12345, progress_every: 5_000_000 }
    }
}

impl Config {
    /// Checks that do not depend on the images.
    pub fn schedule(&self) -> Result<Schedule> {
        Schedule::new(self.steps, self.t_initial, self.t_final)
    }

    /// Full validation once the pixel count is known.
    pub fn validate(&self, pixel_count: usize) -> Result<Schedule> {
        let schedule = self.schedule()?;
        anneal::check_radius(self.radius, pixel_count)?;
        Ok(schedule)
    }
}

#[derive(Debug, Clone)]
pub struct Params {
    pub src_image_name: String,
    pub tgt_image_name: String,
    pub out_image_name: String,
    pub config: Config,
}

/// Result of optimizing one pixel assignment.
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    pub mapping: Mapping,
    /// Source pixels rearranged into the target's layout.
    pub pixels: Vec<Pixel>,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub stats: AnnealStats,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub width: u32,
    pub height: u32,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub stats: AnnealStats,
    pub elapsed: Duration,
}

/// Core pipeline on raw pixel buffers: validate, rank, anneal, assemble.
pub fn swap_pixels(src: &[Pixel], tgt: &[Pixel], config: &Config) -> Result<SwapOutcome> {
    anneal::check_dimensions(src.len(), tgt.len())?;
    let schedule = config.validate(src.len())?;

    let mut annealer = Annealer::new(src, tgt, config.radius)?;
    let mut rng = Pcg32::seed_from_u64(config.seed);
    annealer.run(&mut rng, &schedule, config.progress_every);

    let initial_energy = annealer.initial_energy();
    let final_energy = annealer.energy();
    let stats = *annealer.stats();
    let mapping = annealer.into_mapping();
    let pixels = mapping.assemble(src);
    Ok(SwapOutcome { mapping, pixels, initial_energy, final_energy, stats })
}

/// Rearrange `src` to approximate `tgt` in memory. The result has the
/// target's dimensions.
pub fn process_dynamic(src: &DynamicImage, tgt: &DynamicImage, config: &Config) -> Result<(RgbaImage, RunReport)> {
    let start = Instant::now();
    let (_, _, src_pixels) = image_io::pixels_from_image(src);
    let (w, h, tgt_pixels) = image_io::pixels_from_image(tgt);

    let outcome = swap_pixels(&src_pixels, &tgt_pixels, config)?;
    let out = image_io::image_from_pixels(w, h, &outcome.pixels)
        .ok_or(PixswapError::DimensionMismatch { src_pixels: outcome.pixels.len(), tgt_pixels: tgt_pixels.len() })?;
    let report = RunReport {
        width: w,
        height: h,
        initial_energy: outcome.initial_energy,
        final_energy: outcome.final_energy,
        stats: outcome.stats,
        elapsed: start.elapsed(),
    };
    Ok((out, report))
}

/// File-to-file pipeline. Nothing is written unless the whole run succeeds.
pub fn process(params: Params) -> Result<RunReport> {
    let Params { src_image_name, tgt_image_name, out_image_name, config } = params;
    let start = Instant::now();
    info!("Starting pixswap");
    info!("Source image: {}", src_image_name);
    info!("Target image: {}", tgt_image_name);
    info!("Output image: {}", out_image_name);

    config.schedule()?;
    let (sw, sh, src_pixels) = decode(&src_image_name)?;
    let (w, h, tgt_pixels) = decode(&tgt_image_name)?;
    info!("Source {}x{}, target {}x{}", sw, sh, w, h);

    let outcome = swap_pixels(&src_pixels, &tgt_pixels, &config)?;
    encode(&out_image_name, w, h, &outcome.pixels)?;
    info!("Final output saved");

    Ok(RunReport {
        width: w,
        height: h,
        initial_energy: outcome.initial_energy,
        final_energy: outcome.final_energy,
        stats: outcome.stats,
        elapsed: start.elapsed(),
    })
}
