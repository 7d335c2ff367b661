use std::cmp::Reverse;

use shakmaty::{Move, MoveList};

use crate::pst::{PIECE_VALUE, role_index};
use crate::types::Score;

/// Most-valuable-victim ordering: captures first, sorted by the material
/// value of the captured piece, so likely-strong moves are searched early
/// and beta cutoffs come sooner.
///
/// The sort is stable — non-captures and equal-victim captures keep the
/// rules engine's enumeration order.
pub fn order_moves(mut moves: MoveList) -> MoveList {
    moves.sort_by_key(|mv| Reverse(victim_value(mv)));
    moves
}

fn victim_value(mv: &Move) -> Score {
    mv.capture().map_or(0, |role| PIECE_VALUE[role_index(role)])
}
