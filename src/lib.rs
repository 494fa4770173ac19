//! Minimax engine for N×N tic-tac-toe
//!
//! A human plays against a computer opponent driven by depth-limited
//! minimax with alpha-beta pruning:
//! - Small boards (run length == board size): full rows, columns and
//!   diagonals win
//! - Larger boards (shorter run length, e.g. five in a row on 7×7): any
//!   run of `L` marks in four directions wins
//!
//! # Architecture
//!
//! - [`board`]: Board, cells, players, scoped move/undo
//! - [`rules`]: Win detection for both regimes, dead positions
//! - [`eval`]: Outcome scores and the evaluator
//! - [`search`]: Alpha-beta and plain minimax
//! - [`engine`]: Root analysis and random tie-breaking
//! - [`game`]: Turn tracking for terminal play
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Engine, Player, Pos, SearchConfig};
//!
//! let config = SearchConfig::classic();
//! let mut engine = Engine::new(config).unwrap();
//! let mut board = Board::new(config.size);
//!
//! // Human threatens the top row; the computer has to block
//! board.apply(Pos::new(0, 0), Player::Human);
//! board.apply(Pos::new(1, 1), Player::Computer);
//! board.apply(Pos::new(0, 1), Player::Human);
//!
//! let reply = engine.choose_move(&mut board);
//! assert_eq!(reply, Pos::new(0, 2));
//! ```
//!
//! # Scores
//!
//! Scores are seen from the Computer's side: [`OutcomeScore::WIN`] when the
//! Computer owns a line, [`OutcomeScore::LOSS`] when the Human does, and 0
//! for draws and for positions cut off by the depth limit.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::{Preset, Regime, SearchConfig};
pub use engine::{Engine, MoveResult};
pub use error::{ConfigError, MoveError};
pub use eval::{evaluate, OutcomeScore, Score};
pub use game::{parse_move, Game, GameStatus};
pub use search::{SearchStats, Searcher};
