use anyhow::Context;
use clap::Parser;
use minesweeper_core::save::{DEFAULT_SAVE_FILE, JsonFileStore};
use minesweeper_core::*;
use std::io;
use std::path::{Path, PathBuf};

mod color;
mod input;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the square board
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIDE)]
    size: Coord,

    /// Number of mines, one per eight tiles when omitted
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Resume a saved game instead of starting a new one
    #[arg(short, long, value_name = "SAVE_FILE")]
    load: Option<PathBuf>,

    /// Where the `save` command writes the game
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Print the board without colors
    #[arg(long)]
    no_color: bool,
}

fn init_logging(filter: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // also installs the bridge that forwards `log` records
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn new_board(args: &Args) -> anyhow::Result<Board> {
    let config = match args.mines {
        Some(mines) => GameConfig::new(args.size, mines),
        None => GameConfig::with_default_mines(args.size),
    }
    .context("Invalid board configuration")?;

    let generator = match args.seed {
        Some(seed) => RandomMinefieldGenerator::new(seed),
        None => RandomMinefieldGenerator::from_entropy(),
    };
    Ok(Board::generate(config, generator))
}

fn load_board(path: &Path, args: &Args) -> anyhow::Result<Board> {
    if args.mines.is_some() || args.seed.is_some() || args.size != DEFAULT_SIDE {
        log::warn!("Board options are ignored when loading a saved game");
    }
    JsonFileStore::new(path)
        .load()
        .with_context(|| format!("Could not load game from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());
    log::debug!("{:?}", args);

    let board = match &args.load {
        Some(path) => load_board(path, &args)?,
        None => new_board(&args)?,
    };

    let source = input::Prompt::new(io::stdin().lock(), io::stdout());
    let view = view::TerminalView::new(io::stdout(), !args.no_color);
    let store = JsonFileStore::new(&args.save_file);

    let mut game = GameController::new(board, source, view, store);
    let outcome = game.run().context("Game aborted")?;
    log::debug!("Exiting after {:?}", outcome);
    Ok(())
}
