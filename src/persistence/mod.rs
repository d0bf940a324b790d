//! Score persistence
//!
//! Scores are kept in a flat, append-only log: one non-negative integer
//! per line. Nothing is ever rewritten or trimmed.

pub mod score_log;

pub use score_log::{MemoryScores, ScoreLog, ScoreLogError, ScoreStore};
