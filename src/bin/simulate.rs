//! Synthetic match driver.
//!
//! Plays a scripted opponent deck through the noisy synthetic sensor, runs it
//! through the tracker service in real time, and prints JSON snapshots.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use royale_scout::{
    spawn_sensor_loop, CardId, CardRegistry, Clock, ElixirMode, MatchTracker, NoiseRng, Position,
    Result, SyntheticSensor, SystemClock, Timestamp, TrackerConfig, TrackerService,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_DECK: [&str; 8] = [
    "hog_rider",
    "musketeer",
    "valkyrie",
    "ice_spirit",
    "skeletons",
    "fireball",
    "zap",
    "cannon",
];

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Run a synthetic match through the opponent tracker", long_about = None)]
struct Args {
    /// Tracker configuration (TOML). Defaults are used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra card catalog (TOML) merged over the builtin table.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Opponent deck, comma separated. Eight cards.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_DECK.map(String::from))]
    deck: Vec<String>,

    /// Noise seed.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Match length in seconds.
    #[arg(long, default_value_t = 30)]
    seconds: u64,

    /// Seconds between opponent plays.
    #[arg(long, default_value_t = 3.0)]
    play_every: f64,

    /// Elixir mode at match start: normal, double or triple.
    #[arg(long, default_value = "normal")]
    mode: ElixirMode,

    /// Switch to double elixir after this many seconds.
    #[arg(long)]
    double_after: Option<u64>,

    /// Snapshot print interval in milliseconds.
    #[arg(long, default_value_t = 1000)]
    print_ms: u64,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<CardRegistry> {
    let mut catalog = CardRegistry::builtin();
    if let Some(path) = path {
        let overridden = catalog.merge(CardRegistry::load(path)?);
        if !overridden.is_empty() {
            tracing::info!(count = overridden.len(), "Catalog overrides applied");
        }
    }
    Ok(catalog)
}

/// Opponent plays: cycle the deck the way the game does (hand of four,
/// played card goes to the back of the queue), picking from the hand at
/// random.
fn script_sensor(args: &Args, until: Timestamp) -> SyntheticSensor {
    let mut rng = NoiseRng::new(args.seed).for_context("opponent");
    let mut queue: Vec<CardId> = args.deck.iter().map(CardId::new).collect();
    let mut sensor = SyntheticSensor::new(args.seed).with_clutter(0.3, queue.clone());
    if queue.is_empty() {
        return sensor;
    }

    let mut at = Timestamp::from_secs_f64(1.0);
    let step = Duration::from_secs_f64(args.play_every.max(2.5));
    while at < until {
        let pick = rng.gen_index(queue.len().min(4));
        let card = queue.remove(pick);
        // Cell centres keep jittered copies inside one cooldown cell.
        let position = Position::new(
            25.0 + 50.0 * rng.gen_index(14) as f32,
            25.0 + 50.0 * rng.gen_index(12) as f32,
        );
        sensor = sensor.with_play(at, card.clone(), position);
        queue.push(card);
        at = at + step;
    }
    sensor
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    let catalog = Arc::new(load_catalog(args.catalog.as_ref())?);
    for card in &args.deck {
        if !catalog.contains(card) {
            tracing::warn!(card = card.as_str(), "Deck card is not in the catalog; it will be ignored");
        }
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let until = Timestamp::new(Duration::from_secs(args.seconds));
    let sensor = script_sensor(&args, until);
    tracing::info!(plays = sensor.plays().len(), seed = args.seed, "Synthetic match scripted");

    let tracker = MatchTracker::new(&config, catalog, Arc::clone(&clock))?;
    let (handle, worker) = TrackerService::spawn(tracker, &config)?;
    handle.start().await?;
    if args.mode != ElixirMode::Normal {
        handle.set_mode(args.mode).await?;
    }
    let sensor_loop = spawn_sensor_loop(sensor, handle.clone(), config.service.poll_interval);

    let mut printer = tokio::time::interval(Duration::from_millis(args.print_ms.max(50)));
    let mut doubled = false;
    while clock.now() < until {
        printer.tick().await;
        if let Some(after) = args.double_after {
            if !doubled && clock.now().offset() >= Duration::from_secs(after) {
                handle.set_mode(ElixirMode::Double).await?;
                doubled = true;
            }
        }
        let snapshot = handle.snapshot().await;
        println!("{}", serde_json::to_string(&snapshot).unwrap_or_default());
    }

    sensor_loop.stop().await;
    handle.stop().await?;
    let stats = handle.dedup_stats().await?;
    let snapshot = handle.snapshot().await;
    handle.shutdown().await?;
    let _ = worker.await;

    tracing::info!(
        frames = stats.frames,
        candidates = stats.candidates,
        emitted = stats.emitted,
        acceptance = stats.acceptance_rate(),
        "Deduplication summary"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot).unwrap_or_default());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
