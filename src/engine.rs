//! Computer move selection on top of the alpha-beta searcher
//!
//! For each empty cell the engine places the Computer's mark, searches the
//! Human's reply with a full window, and takes the mark back. All moves
//! that reach the best root score are kept, and one of them is picked
//! uniformly at random.
//!
//! With `threads > 1` the root candidates are split into contiguous chunks.
//! Each worker searches its chunk on its own copy of the board, and the
//! results are merged in row-major order with the same tie rule.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Engine, Pos, Player, SearchConfig};
//!
//! let mut engine = Engine::with_seed(SearchConfig::classic(), 7).unwrap();
//! let mut board = Board::new(3);
//! board.apply(Pos::new(1, 1), Player::Human);
//!
//! let reply = engine.choose_move(&mut board);
//! assert_ne!(reply, Pos::new(1, 1));
//! assert_eq!(board.mark_count(), 2);
//! ```

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player, Pos};
use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::eval::Score;
use crate::search::{SearchStats, Searcher};

/// Result of a root analysis.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Every move reaching `score`, row-major
    pub best_moves: Vec<Pos>,
    /// Best root score
    pub score: Score,
    /// Score of each candidate, row-major
    pub root_scores: Vec<(Pos, Score)>,
    /// Search diagnostics, summed over workers
    pub stats: SearchStats,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Best score and all moves that reach it, in input order.
fn select_best(root_scores: &[(Pos, Score)]) -> (Score, Vec<Pos>) {
    let mut best_score = Score::MIN;
    let mut best_moves = Vec::new();
    for &(pos, score) in root_scores {
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }
    (best_score, best_moves)
}

/// Move chooser for the Computer side.
#[derive(Debug)]
pub struct Engine {
    config: SearchConfig,
    rng: StdRng,
}

impl Engine {
    /// Create an engine seeded from the OS.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create an engine whose tie-breaking is reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Root score of a single Computer move.
    pub fn score_move(&self, board: &mut Board, pos: Pos) -> Score {
        Searcher::new(self.config).score_move(board, pos)
    }

    /// Score every empty cell for the Computer without changing the board.
    ///
    /// # Panics
    ///
    /// Panics if the board is full or its size differs from the
    /// configuration.
    pub fn analyze(&self, board: &mut Board) -> MoveResult {
        assert_eq!(
            board.size(),
            self.config.size,
            "board size does not match the search configuration"
        );
        assert!(!board.is_full(), "no move to choose on a full board");

        let start = Instant::now();
        let moves: Vec<Pos> = board.empty_cells().collect();
        let (root_scores, stats) = if self.config.threads > 1 && moves.len() > 1 {
            self.root_scores_parallel(board, &moves)
        } else {
            self.root_scores_serial(board, &moves)
        };

        if log_enabled!(Level::Trace) {
            for (pos, score) in &root_scores {
                trace!("root ({}, {}) -> {}", pos.row, pos.col, score);
            }
        }

        let (score, best_moves) = select_best(&root_scores);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "analysis: score {} with {} tied moves, {} nodes, {} cutoffs, {}ms",
            score,
            best_moves.len(),
            stats.nodes,
            stats.cutoffs,
            time_ms
        );

        MoveResult {
            best_moves,
            score,
            root_scores,
            stats,
            time_ms,
        }
    }

    /// Pick one of the best moves at random, play it, and return it.
    ///
    /// # Panics
    ///
    /// Panics if the board is full.
    pub fn choose_move(&mut self, board: &mut Board) -> Pos {
        let result = self.analyze(board);
        let pos = result.best_moves[self.rng.gen_range(0..result.best_moves.len())];
        board.apply(pos, Player::Computer);
        debug!("computer plays ({}, {})", pos.row, pos.col);
        pos
    }

    fn root_scores_serial(
        &self,
        board: &mut Board,
        moves: &[Pos],
    ) -> (Vec<(Pos, Score)>, SearchStats) {
        let mut searcher = Searcher::new(self.config);
        let mut scores = Vec::with_capacity(moves.len());
        for &pos in moves {
            scores.push((pos, searcher.score_move(board, pos)));
        }
        (scores, searcher.stats())
    }

    fn root_scores_parallel(
        &self,
        board: &Board,
        moves: &[Pos],
    ) -> (Vec<(Pos, Score)>, SearchStats) {
        let threads = self.config.threads.min(moves.len());
        let chunk_size = moves.len().div_ceil(threads);
        let config = self.config;

        std::thread::scope(|scope| {
            let handles: Vec<_> = moves
                .chunks(chunk_size)
                .map(|chunk| {
                    let mut work_board = board.clone();
                    scope.spawn(move || {
                        let mut searcher = Searcher::new(config);
                        let scores: Vec<(Pos, Score)> = chunk
                            .iter()
                            .map(|&pos| (pos, searcher.score_move(&mut work_board, pos)))
                            .collect();
                        (scores, searcher.stats())
                    })
                })
                .collect();

            let mut all = Vec::with_capacity(moves.len());
            let mut stats = SearchStats::default();
            for handle in handles {
                match handle.join() {
                    Ok((scores, worker_stats)) => {
                        all.extend(scores);
                        stats.merge(&worker_stats);
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            (all, stats)
        })
    }
}
