//! X-Rudder command-line game
//!
//! Play against another person at the same terminal, against the engine, or
//! watch two engines play each other.

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xrudder::game::{ConsoleController, Controller, Game, SearchController};
use xrudder::XRudderConfig;

/// Who sits in each seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans
    Pvp,
    /// Human first, engine second
    Pva,
    /// Engine first, human second
    Avp,
    /// Two engines
    Ava,
}

/// X-Rudder - form an X with five tokens before your opponent does
#[derive(Parser, Debug)]
#[command(name = "xrudder")]
#[command(about = "Play X-Rudder in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Seats: pvp, pva, avp, or ava
    #[arg(short, long, value_enum, default_value = "pva")]
    mode: Mode,

    /// Glyph for player 1
    #[arg(long, default_value = "■")]
    p1_glyph: char,

    /// Glyph for player 2
    #[arg(long, default_value = "□")]
    p2_glyph: char,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting search depth, overriding the config file
    #[arg(short, long)]
    depth: Option<u8>,

    /// Stop after this many turns
    #[arg(long)]
    max_turns: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.p1_glyph == cli.p2_glyph {
        bail!("players need different glyphs, both are {:?}", cli.p1_glyph);
    }

    let mut config = match &cli.config {
        Some(path) => XRudderConfig::from_file(path)?,
        None => XRudderConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.engine.initial_depth = depth;
    }
    config.validate()?;

    info!(mode = ?cli.mode, "Starting X-Rudder");
    print_welcome_banner(&config);

    let state = config.new_state([cli.p1_glyph, cli.p2_glyph]);
    let human = |name: &str| -> Box<dyn Controller> {
        Box::new(ConsoleController::new(
            name,
            BufReader::new(io::stdin()),
            io::stdout(),
        ))
    };
    let engine = |name: &str| -> Box<dyn Controller> {
        Box::new(SearchController::new(name, config.engine()))
    };
    let controllers = match cli.mode {
        Mode::Pvp => [human("Player 1"), human("Player 2")],
        Mode::Pva => [human("Player 1"), engine("Engine 2")],
        Mode::Avp => [engine("Engine 1"), human("Player 2")],
        Mode::Ava => [engine("Engine 1"), engine("Engine 2")],
    };

    let mut game = Game::new(state, controllers);
    if let Some(limit) = cli.max_turns {
        game = game.with_turn_limit(limit);
    }

    let outcome = game.play(&mut io::stdout())?;
    info!(?outcome, "Finished");
    Ok(())
}

fn print_welcome_banner(config: &XRudderConfig) {
    println!("==================== X-RUDDER ====================");
    println!(
        "Board {}x{}, {} tokens each, {} token moves shared by both players.",
        config.board.width,
        config.board.height,
        config.rules.tokens_per_player,
        config.rules.moves
    );
    println!("Win by forming an X: a token with all four diagonal neighbours.");
    println!("An X is struck through when the opponent holds both cells beside its centre.");
    println!("==================================================");
}
