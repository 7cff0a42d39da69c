// CLI entry for pixswap
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use pixswap::{default_config, process, Config, Params};

#[derive(Parser, Debug)]
#[command(name = "pixswap", version, about = "Rebuild a target image from a source image's pixels")]
struct Cli {
    /// Fast preset (fewer steps, tighter swap radius)
    #[arg(short = 'f', long = "fast", action = ArgAction::SetTrue)]
    fast: bool,

    /// Total annealing steps (at least 2)
    #[arg(short = 'n', long = "steps")]
    steps: Option<usize>,
    /// Maximum rank distance between swapped pixels
    #[arg(short = 'r', long = "radius")]
    radius: Option<usize>,
    /// Initial temperature
    #[arg(long = "t-initial")]
    t_initial: Option<f64>,
    /// Final temperature
    #[arg(long = "t-final")]
    t_final: Option<f64>,
    /// Random seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
    /// Log progress every N steps (0 disables)
    #[arg(long = "progress-every")]
    progress_every: Option<usize>,

    /// Image whose pixels are rearranged
    #[arg(value_hint = ValueHint::FilePath)]
    source: String,
    /// Image whose layout is approximated
    #[arg(value_hint = ValueHint::FilePath)]
    target: String,
    /// Output image path
    #[arg(value_hint = ValueHint::FilePath)]
    output: String,
}

fn build_config(cli: &Cli) -> Config {
    let mut cfg = default_config(cli.fast);
    if let Some(v) = cli.steps { cfg.steps = v; }
    if let Some(v) = cli.radius { cfg.radius = v; }
    if let Some(v) = cli.t_initial { cfg.t_initial = v; }
    if let Some(v) = cli.t_final { cfg.t_final = v; }
    if let Some(v) = cli.seed { cfg.seed = v; }
    if let Some(v) = cli.progress_every { cfg.progress_every = v; }
    cfg
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = build_config(&cli);
    let params = Params {
        src_image_name: cli.source.clone(),
        tgt_image_name: cli.target.clone(),
        out_image_name: cli.output.clone(),
        config: cfg,
    };
    let report = process(params).with_context(|| format!("pixswap {} -> {} failed", cli.source, cli.target))?;
    println!(
        "Energy {:.1} -> {:.1} ({} swaps accepted)",
        report.initial_energy,
        report.final_energy,
        report.stats.accepted()
    );
    println!("Total runtime = {:.4} s", report.elapsed.as_secs_f64());
    Ok(())
}
