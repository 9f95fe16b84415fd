use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use percolation::{PercolationStats, StatsConfig};

/// Parse a strictly positive integer (grid size or trial count)
fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|e| format!("Invalid number: {e}"))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

/// Estimate the percolation threshold of an n-by-n grid by Monte Carlo simulation
///
/// Each trial opens random sites until the grid percolates; the fraction of
/// open sites at that moment is one sample of the threshold.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length (n)
    #[clap(value_name = "GRID_SIZE", value_parser = parse_positive)]
    grid_size: usize,

    /// Number of independent trials (T)
    #[clap(value_name = "TRIALS", value_parser = parse_positive)]
    trials: usize,

    /// Seed for reproducible runs (trial i uses seed + i)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Number of threads for running trials
    #[clap(short = 't', long = "threads", default_value = "1")]
    threads: usize,

    /// Quiet mode (no progress output)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Value errors carry no usage line of their own
            let message = e.render().to_string();
            eprint!("{message}");
            if !message.contains("Usage:") {
                eprintln!("\n{}", Args::command().render_usage());
            }
            std::process::exit(e.exit_code());
        }
    };

    // Set up rayon thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("Failed to build thread pool")?;

    let mut config = StatsConfig::new(args.grid_size, args.trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if !args.quiet {
        eprintln!(
            "Running {} trials on a {}x{} grid with {} thread(s)...",
            args.trials, args.grid_size, args.grid_size, args.threads
        );
    }

    let stats = PercolationStats::run(&config).context("Simulation failed")?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = {}, {}",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
