use shakmaty::{Color, Position, Square};

use crate::game::Game;
use crate::pst::{PIECE_VALUE, piece_square_value, role_index};
use crate::types::{SCORE_MATE, Score};

/// Static evaluation from White's perspective: positive favors White,
/// negative favors Black.
///
/// Checkmate returns the mate sentinel signed against the side to move
/// (the side to move is the one that got mated). Any draw returns 0.
/// Otherwise: material + piece-square bonus per occupied square, plus a
/// tenth of a centipawn per legal move for the side about to act.
///
/// Pure function of the position — no hidden state, no randomness.
pub fn evaluate(game: &Game) -> Score {
    if game.is_checkmate() {
        return match game.turn() {
            Color::White => -SCORE_MATE,
            Color::Black => SCORE_MATE,
        };
    }
    if game.is_draw() {
        return 0;
    }

    let mut score: Score = 0;
    let board = game.position().board();
    for sq in Square::ALL {
        if let Some(piece) = board.piece_at(sq) {
            let value =
                PIECE_VALUE[role_index(piece.role)] + piece_square_value(piece.role, piece.color, sq);
            score += if piece.color == Color::White { value } else { -value };
        }
    }

    // Mobility: reward the side about to act for having options
    let mobility = game.legal_moves().len() as Score / 10;
    score += match game.turn() {
        Color::White => mobility,
        Color::Black => -mobility,
    };

    score
}
