use anyhow::Context;
use clap::Parser;
use conquista_engine::{load_builtin_map, Dice, Faction, GameState, DEFAULT_MAP, DEFAULT_PLAYER};
use tracing::{info, Level};

mod session;

#[derive(Parser)]
#[command(name = "conquista")]
#[command(about = "Turn-based territory conquest against a secret mission")]
struct Cli {
    /// RNG seed for a reproducible game (default: seeded from the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Army color you play as
    #[arg(long, default_value = DEFAULT_PLAYER)]
    player: String,
    /// Built-in map to play on
    #[arg(long, default_value = DEFAULT_MAP)]
    map: String,
    /// Don't wait for Enter after each action
    #[arg(long, default_value_t = false)]
    no_pause: bool,
    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let map = load_builtin_map(&cli.map).context("fatal setup error")?;
    let dice = match cli.seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_clock(),
    };
    info!(seed = ?dice.seed(), "dice ready");
    let mut game = GameState::new(map, Faction::new(cli.player), dice).context("fatal setup error")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut game, stdin.lock(), stdout.lock(), !cli.no_pause)
}
