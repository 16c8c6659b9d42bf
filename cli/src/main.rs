use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, GameError, GameSession, InputController, Snapshot};

mod config;
mod script;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with `width`, `height`, `mines` and `tile_size`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width in tiles
    #[arg(short = 'W', long)]
    width: Option<Coord>,

    /// Board height in tiles
    #[arg(short = 'H', long)]
    height: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Tile edge length in pixels, used to map clicks to tiles
    #[arg(long)]
    tile_size: Option<u32>,

    /// Event script, one event per line, read from stdin when absent
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = config::Settings::resolve(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session =
        GameSession::seeded(settings.board, seed).context("Invalid board configuration")?;
    session.start_new_game()?;
    let controller = InputController::new(settings.tile_size);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.context("Could not read event script")?;
        let Some(event) =
            script::parse_line(&line).with_context(|| format!("line {}", line_number))?
        else {
            continue;
        };

        match controller.handle(&mut session, event) {
            Ok(outcome) => log::info!("{:?} -> {:?}", event, outcome),
            Err(GameError::OutOfBounds) => {
                log::warn!("line {}: {:?} is outside of the board", line_number, event)
            }
            Err(err) => log::debug!("line {}: {:?} ignored: {}", line_number, event, err),
        }
    }
    log::info!("Finished in state {:?}", session.state());

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &Snapshot::from_session(&session))?;
    writeln!(stdout)?;
    Ok(())
}
