//! Lawnkeeper command-line simulator.
//!
//! Generates a lawn, drops the mower on it and animates the coverage run
//! in the terminal, either automatically or one keypress per tick.
//!
//! Usage:
//!   lawnkeeper --size normal --obstacle-rate 15 --seed 42
//!   lawnkeeper --config configs/lawnkeeper.yaml --manual
//!   lawnkeeper --width 8 --height 6 --start 1,1 --quiet

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use lawnkeeper::{
    AutoStep, MapSize, MowerError, Session, SimulationConfig, StartPolicy, StepControl,
    StepSignal, TickOutcome, render_ascii,
};

/// Lawn size presets
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Small,
    Normal,
    Large,
}

impl From<SizeArg> for MapSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Small => MapSize::Small,
            SizeArg::Normal => MapSize::Normal,
            SizeArg::Large => MapSize::Large,
        }
    }
}

/// Greedy lawn mower coverage simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/lawnkeeper.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lawn size preset
    #[arg(short, long, value_enum)]
    size: Option<SizeArg>,

    /// Lawn width in cells, fence included
    #[arg(long)]
    width: Option<usize>,

    /// Lawn height in cells, fence included
    #[arg(long)]
    height: Option<usize>,

    /// Percent of interior cells turned into stones or trees
    #[arg(short, long)]
    obstacle_rate: Option<u8>,

    /// RNG seed (0 = random each run)
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as ROW,COL (random when omitted)
    #[arg(long, value_parser = parse_start)]
    start: Option<(i32, i32)>,

    /// Step with Enter, quit with q
    #[arg(short, long)]
    manual: bool,

    /// Delay between automatic ticks in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,

    /// Only print the final map and summary
    #[arg(short, long)]
    quiet: bool,
}

fn parse_start(s: &str) -> Result<(i32, i32), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("bad col: {}", e))?;
    Ok((row, col))
}

/// Waits for Enter before every tick; `q` or end of input aborts.
struct StdinStep {
    stdin: io::Stdin,
}

impl StdinStep {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl StepControl for StdinStep {
    fn next_signal(&mut self) -> Result<StepSignal, MowerError> {
        print!("[Enter] step, [q] quit: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(StepSignal::Abort);
        }
        if line.trim().eq_ignore_ascii_case("q") {
            Ok(StepSignal::Abort)
        } else {
            Ok(StepSignal::Advance)
        }
    }
}

/// Ctrl-C raises the returned stop flag.
fn setup_stop_flag() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let stop = Arc::new(AtomicBool::new(false));
    let s = stop.clone();
    ctrlc::set_handler(move || {
        s.store(true, Ordering::SeqCst);
    })?;
    Ok(stop)
}

fn build_config(args: &Args) -> Result<SimulationConfig, MowerError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::load_default()?,
    };

    if let Some(size) = args.size {
        config = config.with_map_size(size.into());
    }
    if args.width.is_some() {
        config.width = args.width;
    }
    if args.height.is_some() {
        config.height = args.height;
    }
    if let Some(rate) = args.obstacle_rate {
        config = config.with_obstacle_rate(rate);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some((row, col)) = args.start {
        config = config.with_start(StartPolicy::Fixed { row, col });
    }

    config.validate()?;
    Ok(config)
}

fn draw(session: &Session, outcome: Option<&TickOutcome>) {
    print!("\x1b[2J\x1b[H{}", render_ascii(session.grid()));
    match outcome {
        Some(o) => println!(
            "Step {:>4}  at {}  facing {}  [{}]",
            session.steps(),
            o.position,
            o.facing.as_char(),
            o.state.name()
        ),
        None => println!(
            "Mower at {}, {} grass cells to mow",
            session.navigator().position(),
            session.grass_total()
        ),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let stop = setup_stop_flag()?;

    let mut session = Session::new(&config)?;
    let quiet = args.quiet;
    if !quiet {
        draw(&session, None);
    }

    let on_tick = |s: &Session, o: &TickOutcome| {
        if !quiet {
            draw(s, Some(o));
        }
    };

    let report = if args.manual {
        session.run(&mut StdinStep::new(), &stop, on_tick)?
    } else if args.delay_ms == 0 || quiet {
        session.run(&mut AutoStep::new(), &stop, on_tick)?
    } else {
        let delay = Duration::from_millis(args.delay_ms);
        session.run(&mut AutoStep::with_delay(delay), &stop, on_tick)?
    };

    if quiet {
        print!("{}", render_ascii(session.grid()));
    }
    println!("{}", report);

    Ok(())
}
