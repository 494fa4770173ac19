//! Terminal tic-tac-toe against the minimax engine
//!
//! Moves are typed as 1-based `row col`. The Computer plays `O`, the
//! Human plays `X`.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;
use tictactoe::{parse_move, Engine, Game, GameStatus, Player, Preset, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play N×N tic-tac-toe against a minimax opponent")]
struct Args {
    /// Base configuration
    #[arg(long, value_enum, default_value_t = Preset::Classic)]
    preset: Preset,

    /// Board size (overrides the preset)
    #[arg(long)]
    size: Option<usize>,

    /// Marks in a row needed to win; defaults to min(size, 5) when --size is given
    #[arg(long)]
    run_length: Option<usize>,

    /// Maximum search depth
    #[arg(long)]
    depth: Option<u8>,

    /// Worker threads for root analysis
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Score positions where no line can be completed as draws
    #[arg(long)]
    early_draw: bool,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let base = SearchConfig::preset(self.preset);
        let size = self.size.unwrap_or(base.size);
        let run_length = match (self.run_length, self.size) {
            (Some(run_length), _) => run_length,
            (None, Some(size)) => size.min(5),
            (None, None) => base.run_length,
        };
        SearchConfig::new(size, run_length, self.depth.unwrap_or(base.max_depth))
            .with_early_draw(self.early_draw)
            .with_threads(self.threads)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config();
    info!("starting with {:?}", config);

    let engine = match args.seed {
        Some(seed) => Engine::with_seed(config, seed)?,
        None => Engine::new(config)?,
    };
    let first = if args.computer_first {
        Player::Computer
    } else {
        Player::Human
    };
    let mut game = Game::new(engine, first);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    while game.status() == GameStatus::InProgress {
        match game.to_move() {
            Player::Human => {
                write!(out, "{}", game.board())?;
                write!(out, "Your turn (row col): ")?;
                out.flush()?;
                let Some(line) = lines.next() else {
                    info!("input closed, leaving the game");
                    return Ok(());
                };
                let played = parse_move(&line?, config.size).and_then(|pos| game.play_human(pos));
                if let Err(err) = played {
                    writeln!(out, "Invalid move: {err}")?;
                }
            }
            Player::Computer => {
                writeln!(out, "Computer's turn:")?;
                game.play_computer()?;
            }
        }
    }

    write!(out, "{}", game.board())?;
    match game.status() {
        GameStatus::Won(Player::Human) => writeln!(out, "You win")?,
        GameStatus::Won(Player::Computer) => writeln!(out, "You lose")?,
        GameStatus::Draw | GameStatus::InProgress => writeln!(out, "Draw")?,
    }
    Ok(())
}
