use anyhow::Result;
use clap::Parser;

use lattica_core::metrics::init_logging;
use lattica_core::seed::{PatternPlacement, SeedStrategy, DEFAULT_FILL_PROBABILITY};
use lattica_lib::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the lattice size
    #[arg(long)]
    size: Option<usize>,

    /// Override the pass cadence, in seconds
    #[arg(long)]
    cadence: Option<f64>,

    /// Seeding strategy override
    #[arg(long, value_enum)]
    seed: Option<SeedMode>,

    /// Fill probability for the random strategy
    #[arg(long)]
    probability: Option<f64>,

    /// RLE pattern file for the pattern strategy
    #[arg(long)]
    pattern: Option<String>,

    /// Place the pattern at the slice origin instead of centered
    #[arg(long)]
    origin: bool,

    /// Stop after observing this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print the central z-slice as each generation arrives
    #[arg(long)]
    watch: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum SeedMode {
    Random,
    Cluster,
    Pattern,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config);
    if let Some(size) = args.size {
        config.lattice.size = size;
    }
    if let Some(cadence) = args.cadence {
        config.timing.cadence_seconds = cadence;
    }
    match args.seed {
        Some(SeedMode::Random) => {
            config.seeding = SeedStrategy::UniformRandom {
                probability: args.probability.unwrap_or(DEFAULT_FILL_PROBABILITY),
            };
        }
        Some(SeedMode::Cluster) => {
            config.seeding = SeedStrategy::CenterCluster;
        }
        Some(SeedMode::Pattern) => {
            let path = args.pattern.as_deref().ok_or_else(|| {
                anyhow::anyhow!("--pattern <file> is required with --seed pattern")
            })?;
            let rle = std::fs::read_to_string(path)?;
            let placement = if args.origin {
                PatternPlacement::Offset { x: 0, y: 0 }
            } else {
                PatternPlacement::Centered
            };
            config.seeding = SeedStrategy::Pattern { rle, placement };
        }
        None => {}
    }

    let mut app = App::new(config)?;
    let res = app.run(args.generations, args.watch);

    if let Err(e) = res {
        eprintln!("Application error: {e}");
    } else {
        println!("Exited clean.");
    }

    Ok(())
}
