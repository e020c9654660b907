use std::path::Path;

use clap::Parser;
use judge::{Console, Game, GameConfig, TerminalConsole};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a properties file describing the game, or a number from 3 to 6
    /// for a three-player game with that many counters in a row.
    /// Standard Connect Four if omitted.
    game: Option<String>,

    /// RNG seed for the computer players
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // All human players share this one console
    let mut console = TerminalConsole::new(std::io::stdin().lock(), std::io::stdout().lock());

    let config = match args.game.as_deref() {
        None => {
            console.write_line(
                "No config file supplied. Creating a standard game of Connect Four...",
            )?;
            GameConfig::default()
        }
        Some(game) => match game.parse::<usize>() {
            Ok(counters) => GameConfig::connect_n(counters)?,
            Err(_) => GameConfig::load(Path::new(game))?,
        },
    };
    debug!(?config, "Loaded configuration");

    let mut game = Game::from_config(&config, &mut rng, &mut console)?;
    let result = game.play()?;
    debug!(?result, "Game over");

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
