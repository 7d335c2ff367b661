use rand::Rng;
use shakmaty::{Color, Move};

use crate::difficulty::Difficulty;
use crate::evaluation::evaluate;
use crate::game::Game;
use crate::ordering::order_moves;
use crate::types::{DifficultyProfile, EngineError, SCORE_INFINITY, Score};

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Scores are always from White's perspective; the maximizing role belongs
/// to White and the minimizing role to Black, with no sign flipping.
/// Pruning never changes the returned value relative to an exhaustive
/// search at the same depth — it only skips subtrees that cannot affect it.
///
/// Moves are applied to and reverted from the shared `Game` in place, so a
/// single `Game` must never be searched concurrently.
pub fn alphabeta(
    game: &mut Game,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Result<Score, EngineError> {
    if depth == 0 || game.is_game_over() {
        return Ok(evaluate(game));
    }

    let moves = order_moves(game.legal_moves());

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in &moves {
            game.apply_move(mv)?;
            let value = alphabeta(game, depth - 1, alpha, beta, false);
            game.undo_last_move();
            let value = value?;
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in &moves {
            game.apply_move(mv)?;
            let value = alphabeta(game, depth - 1, alpha, beta, true);
            game.undo_last_move();
            let value = value?;
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}

/// Picks a move for the side to move at the named tier, drawing randomness
/// from the thread-local RNG. `Ok(None)` means there is no legal move —
/// the caller is expected to have recognized game over already.
pub fn select_move(game: &mut Game, tier: &str) -> Result<Option<Move>, EngineError> {
    let profile = tier.parse::<Difficulty>()?.profile();
    select_move_with(game, profile, &mut rand::thread_rng())
}

/// [`select_move`] with the search parameters and RNG passed explicitly.
/// The profile is consumed as an immutable per-call snapshot; a seeded RNG
/// makes the handicap branch reproducible.
pub fn select_move_with(
    game: &mut Game,
    profile: DifficultyProfile,
    rng: &mut impl Rng,
) -> Result<Option<Move>, EngineError> {
    let moves = game.legal_moves();
    if moves.is_empty() {
        return Ok(None);
    }

    // Handicap: a single draw at the root decides between a uniformly
    // random move and the full search. Randomness is never injected at
    // interior plies, so a call is either fully random or fully searched.
    if profile.randomness > 0.0 && rng.r#gen::<f64>() < profile.randomness {
        let mv = moves[rng.gen_range(0..moves.len())].clone();
        return Ok(Some(mv));
    }

    let maximizing = game.turn() == Color::White;
    let moves = order_moves(moves);

    let mut best_move = moves[0].clone();
    let mut best_value = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    // Every candidate gets the full window; only a strictly better value
    // displaces the incumbent, so ties keep the earliest candidate
    for mv in &moves {
        game.apply_move(mv)?;
        let value = alphabeta(
            game,
            profile.depth.saturating_sub(1),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            !maximizing,
        );
        game.undo_last_move();
        let value = value?;

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_move = mv.clone();
        }
    }

    Ok(Some(best_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::uci;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Trips if the selector touches the RNG at all.
    struct PanicRng;

    impl RngCore for PanicRng {
        fn next_u32(&mut self) -> u32 {
            panic!("selector touched the RNG");
        }
        fn next_u64(&mut self) -> u64 {
            panic!("selector touched the RNG");
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("selector touched the RNG");
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("selector touched the RNG");
        }
    }

    fn deterministic(depth: u8) -> DifficultyProfile {
        DifficultyProfile {
            depth,
            randomness: 0.0,
        }
    }

    /// Exhaustive minimax without pruning, as a reference oracle.
    fn minimax_plain(game: &mut Game, depth: u8, maximizing: bool) -> Score {
        if depth == 0 || game.is_game_over() {
            return evaluate(game);
        }
        let moves = game.legal_moves();
        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        for mv in &moves {
            game.apply_move(mv).unwrap();
            let value = minimax_plain(game, depth - 1, !maximizing);
            game.undo_last_move();
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut game = Game::new();
        let score = alphabeta(&mut game, 0, -SCORE_INFINITY, SCORE_INFINITY, true).unwrap();
        assert_eq!(score, evaluate(&game));
    }

    #[test]
    fn test_pruning_never_changes_the_value() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
            "8/5k2/8/8/8/8/4K3/4R3 w - - 0 1",
        ];
        for fen in fens {
            let mut game = Game::from_fen(fen).unwrap();
            for maximizing in [true, false] {
                let pruned =
                    alphabeta(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, maximizing).unwrap();
                let exhaustive = minimax_plain(&mut game, 3, maximizing);
                assert_eq!(pruned, exhaustive, "divergence at {fen} (max={maximizing})");
            }
        }
    }

    #[test]
    fn test_search_leaves_position_untouched() {
        let mut game =
            Game::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3")
                .unwrap();
        let before = game.fen();
        alphabeta(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, false).unwrap();
        assert_eq!(game.fen(), before);

        select_move_with(&mut game, deterministic(2), &mut PanicRng).unwrap();
        assert_eq!(game.fen(), before);
    }

    #[test]
    fn test_finds_mate_in_one_for_white() {
        // Only Ra8 mates; any other move lets the king out
        let mut game = Game::from_fen("7k/8/6K1/8/8/8/8/R7 w - - 0 1").unwrap();
        for depth in 1..=2 {
            let mv = select_move_with(&mut game, deterministic(depth), &mut PanicRng)
                .unwrap()
                .unwrap();
            assert_eq!(uci(&mv), "a1a8", "depth {depth}");
        }
    }

    #[test]
    fn test_finds_mate_in_one_for_black() {
        // Mirror: Black to move, only Ra1 mates
        let mut game = Game::from_fen("r7/8/8/8/8/6k1/8/7K b - - 0 1").unwrap();
        let mv = select_move_with(&mut game, deterministic(2), &mut PanicRng)
            .unwrap()
            .unwrap();
        assert_eq!(uci(&mv), "a8a1");
    }

    #[test]
    fn test_game_over_returns_no_move() {
        // Fool's mate: White has no legal moves
        let mut game =
            Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 2 3")
                .unwrap();
        let picked = select_move_with(&mut game, deterministic(3), &mut PanicRng).unwrap();
        assert!(picked.is_none());
    }

    #[test]
    fn test_zero_randomness_never_draws() {
        // PanicRng proves the deterministic path skips the RNG entirely
        let mut game = Game::new();
        let mv = select_move_with(&mut game, deterministic(1), &mut PanicRng)
            .unwrap()
            .unwrap();
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn test_full_randomness_never_searches() {
        // An absurd depth would never return if the search ran
        let profile = DifficultyProfile {
            depth: 50,
            randomness: 1.0,
        };
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = select_move_with(&mut game, profile, &mut rng)
                .unwrap()
                .unwrap();
            assert!(game.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_random_branch_reproducible_with_seed() {
        let profile = DifficultyProfile {
            depth: 1,
            randomness: 1.0,
        };
        let mut game = Game::new();
        let a = select_move_with(&mut game, profile, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .unwrap();
        let b = select_move_with(&mut game, profile, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefers_winning_capture() {
        // White knight on f3 can take a hanging queen on e5
        let mut game =
            Game::from_fen("rnb1kbnr/pppp1ppp/8/4q3/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 0 1")
                .unwrap();
        let mv = select_move_with(&mut game, deterministic(2), &mut PanicRng)
            .unwrap()
            .unwrap();
        assert_eq!(uci(&mv), "f3e5");
    }
}

// Selection flow: resolve the tier profile, enumerate legal moves, then
// either short-circuit into a uniform random pick (handicap) or run each
// candidate through the fixed-depth alpha-beta search and keep the best.

// The search is deliberately plain: no iterative deepening, no
// transposition table, no quiescence, no time-based cutoff. A shallow
// fixed depth is the tunable knob the difficulty tiers are built on, and
// the resulting horizon instability at low tiers is part of the handicap.
