//! Minimax search with alpha-beta pruning and a depth cutoff
//!
//! This module implements the core search algorithm. Scores are always seen
//! from the Computer's side: Computer maximizes, Human minimizes.
//!
//! Every node checks, in order:
//! 1. Depth past `max_depth` -> 0 (unknown)
//! 2. A completed line -> win/loss score
//! 3. Full board -> draw
//! 4. Optional dead-position check -> draw
//!
//! The board is searched in place. Each child is entered through a
//! [`Placement`](crate::board::Placement) guard, so every cell is cleared
//! again before control returns to the parent, pruned loops included.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::Searcher;
//! use tictactoe::SearchConfig;
//!
//! let mut searcher = Searcher::new(SearchConfig::new(3, 3, 9));
//! let mut board = Board::new(3);
//!
//! // Perfect play from the empty board is a draw
//! assert_eq!(searcher.search(&mut board, Player::Computer), 0);
//! ```

use crate::board::{Board, Player, Pos};
use crate::config::SearchConfig;
use crate::eval::{evaluate, OutcomeScore, Score};
use crate::rules::is_dead_position;

/// Infinity score for alpha-beta bounds
pub const INF: Score = OutcomeScore::WIN + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Loops stopped early because beta <= alpha
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Depth-limited game-tree searcher for one configuration.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics accumulated since creation or the last reset
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Value of `board` with `to_move` to play, full window, depth 0.
    pub fn search(&mut self, board: &mut Board, to_move: Player) -> Score {
        self.alpha_beta(board, 0, to_move, -INF, INF)
    }

    /// Value of playing `pos` for Computer: place it, search Human's reply
    /// from depth 0, take it back.
    pub fn score_move(&mut self, board: &mut Board, pos: Pos) -> Score {
        let mut child = board.place(pos, Player::Computer);
        self.search(&mut child, Player::Human)
    }

    /// Score for nodes that are not expanded, `None` otherwise.
    #[inline]
    fn leaf_score(&self, board: &Board, depth: u32) -> Option<Score> {
        if depth > u32::from(self.config.max_depth) {
            return Some(0);
        }
        let result = evaluate(board, &self.config);
        if OutcomeScore::is_decisive(result) {
            return Some(result);
        }
        if board.is_full() {
            return Some(OutcomeScore::DRAW);
        }
        if self.config.early_draw && is_dead_position(board, self.config.run_length) {
            return Some(OutcomeScore::DRAW);
        }
        None
    }

    /// Fail-hard alpha-beta.
    ///
    /// `alpha` is what Computer can already guarantee on this path, `beta`
    /// what Human can. Once `beta <= alpha` the remaining siblings cannot
    /// affect the parent and are skipped.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        to_move: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return score;
        }

        let maximizing = to_move == Player::Computer;
        let mut best_score = if maximizing { -INF } else { INF };
        let moves: Vec<Pos> = board.empty_cells().collect();

        for pos in moves {
            let score = {
                let mut child = board.place(pos, to_move);
                self.alpha_beta(&mut child, depth + 1, to_move.opponent(), alpha, beta)
            };

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best_score
    }

    /// Plain minimax over the whole depth-limited tree, no pruning.
    pub fn minimax(&mut self, board: &mut Board, depth: u32, to_move: Player) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return score;
        }

        let maximizing = to_move == Player::Computer;
        let mut best_score = if maximizing { -INF } else { INF };
        let moves: Vec<Pos> = board.empty_cells().collect();

        for pos in moves {
            let mut child = board.place(pos, to_move);
            let score = self.minimax(&mut child, depth + 1, to_move.opponent());
            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}
