use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use u_cpusched::config::SimulationConfig;
use u_cpusched::report;
use u_cpusched::{Policy, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Rr,
    Priority,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate FCFS, Round Robin and Priority CPU scheduling over a random
/// process set.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// JSON configuration file. Command-line flags override its values.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of processes to generate.
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// Round Robin time quantum.
    #[clap(short = 'q', long)]
    quantum: Option<u64>,

    /// RNG seed for reproducible process sets.
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Policy to simulate.
    #[clap(short = 'p', long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Output format.
    #[clap(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output. Specify multiple times to increase verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(opts: &Opts) -> Result<SimulationConfig> {
    let config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SimulationConfig::from_json(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    let config = config.merge(opts.count, opts.quantum, opts.seed);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = load_config(&opts)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Simulating {} processes (quantum {}, seed {})",
        config.count, config.time_quantum, seed
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let simulation = Simulation::generate(&config.generator(), config.count, &mut rng)
        .context("Failed to generate process set")?;

    let policies = match opts.policy {
        PolicyArg::Fcfs => vec![Policy::Fcfs],
        PolicyArg::Rr => vec![Policy::round_robin(config.time_quantum)],
        PolicyArg::Priority => vec![Policy::Priority],
        PolicyArg::All => vec![
            Policy::Fcfs,
            Policy::round_robin(config.time_quantum),
            Policy::Priority,
        ],
    };
    let comparison = simulation.compare(&policies)?;

    match opts.format {
        OutputFormat::Text => print!("{}", report::render_comparison(&comparison)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
    }

    Ok(())
}
