mod config;
mod food;
mod game;
mod grid;
mod layout;
mod palette;
mod score;
mod session;
mod snake;
mod surface;
mod term;

use std::{fs::File, sync::Mutex, thread::sleep, time::Duration};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LOG_FILE_ENV, LOG_FILTER_ENV};
use crate::game::SnakeGame;
use crate::term::{Input, TermBell, TermSurface, TERM_CELL};

pub type GridInt = u16;
/// `(row, col)`
pub type Coords = (GridInt, GridInt);

/// Roughly one display refresh.
const FRAME_INTERVAL_MS: u64 = 16;

fn main() -> Result<()> {
    init_logging()?;

    let surface = TermSurface::open()?;
    let mut game = SnakeGame::new(Config::default(), StdRng::from_entropy(), surface, TermBell::new(), TERM_CELL);
    game.start();

    loop {
        sleep(Duration::from_millis(FRAME_INTERVAL_MS));

        for input in term::read_input_queue()? {
            match input {
                Input::Steer(direction) => game.steer(direction),
                Input::Resize(w, h) => game.resize((w, h)),
                Input::Quit => {
                    tracing::info!(score = game.session().score().value(), "quit");
                    return Ok(());
                }
            }
        }

        game.frame()?;
    }
}

/// Logs go to a file, never to the terminal the game is drawing on.
fn init_logging() -> Result<()> {
    let path = match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = File::create(&path).with_context(|| format!("Error creating log file {:?}", path))?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
