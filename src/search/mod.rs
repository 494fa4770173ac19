//! Search module
//!
//! Contains:
//! - Alpha-beta minimax with a depth cutoff
//! - Plain minimax (reference for the pruned search)
//! - Search statistics

pub mod alphabeta;

pub use alphabeta::{SearchStats, Searcher, INF};
