use thiserror::Error;

pub type Score = i32;

/// Forced-mate sentinel. Exceeds any attainable material + positional sum,
/// so a mate always outranks even the largest material swing, while staying
/// far from integer overflow range.
pub const SCORE_MATE: Score = 99_999;

/// Search window bound, strictly above the mate sentinel.
pub const SCORE_INFINITY: Score = 1_000_000;

/// Search parameters for one difficulty tier: fixed search depth in plies
/// and the probability that the root move is picked uniformly at random
/// instead of searched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub depth: u8,
    pub randomness: f64,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Unrecognized difficulty name. Caller error, never silently defaulted.
    #[error("unknown difficulty tier '{0}'")]
    InvalidTier(String),

    /// The rules engine rejected a move the search believed legal. Signals
    /// an enumeration or ordering bug, so it aborts the whole search call.
    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("FEN describes an illegal position: {0}")]
    InvalidPosition(String),
}
