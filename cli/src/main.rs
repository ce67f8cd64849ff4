use anyhow::Context;
use clap::Parser;
use cmdsweep_core::GameConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::filter::LevelFilter;

use driver::{Driver, Outcome};

mod driver;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Smallest board size the game accepts
    #[arg(long, default_value_t = GameConfig::DEFAULT_MIN_SIZE)]
    min_size: usize,

    /// Largest board size the game accepts
    #[arg(long, default_value_t = GameConfig::DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Chance in percent that a cell is a mine
    #[arg(long, default_value_t = GameConfig::DEFAULT_MINE_PROBABILITY)]
    mine_probability: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(filter: log::LevelFilter) -> anyhow::Result<()> {
    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    // stdout belongs to the game screen
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter())?;

    let config = GameConfig::new(args.min_size, args.max_size, args.mine_probability)
        .context("--min-size must be positive and at most --max-size, --mine-probability at most 100")?;
    log::debug!("config: {:?}, seed: {:?}", config, args.seed);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match Driver::new(stdin.lock(), stdout.lock(), config).run(&mut rng)? {
        Outcome::GameOver => log::debug!("Game finished"),
        Outcome::InputClosed => log::warn!("Input closed before the game ended"),
    }

    Ok(())
}
