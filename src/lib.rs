//! Difficulty-tiered chess AI.
//!
//! A fixed-depth minimax searcher with alpha-beta pruning over a
//! shakmaty-backed rules facade. Strength is tuned per named tier by
//! search depth and by a single root-level randomness draw that can
//! replace the search with a uniformly random move.
//!
//! ```no_run
//! use woodpusher::{Game, game::uci, select_move};
//!
//! let mut game = Game::new();
//! if let Some(mv) = select_move(&mut game, "expert").unwrap() {
//!     println!("engine plays {}", uci(&mv));
//! }
//! ```

pub mod difficulty;
pub mod evaluation;
pub mod game;
pub mod ordering;
pub mod pst;
pub mod search;
pub mod types;

pub use difficulty::{Difficulty, profile_for};
pub use game::Game;
pub use search::{alphabeta, select_move, select_move_with};
pub use types::{DifficultyProfile, EngineError, SCORE_INFINITY, SCORE_MATE, Score};
