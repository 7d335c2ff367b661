use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position, Square};

use crate::types::EngineError;

/// Rules-engine facade: a shakmaty position plus an explicit undo stack.
///
/// The engine never inspects or mutates board state except through this
/// type. `apply_move` snapshots the whole position before playing, so
/// `undo_last_move` restores every bit of incidental state — castling
/// rights, en passant square, move counters — and repeated apply/undo
/// cycles are exact inverses.
///
/// A `Game` must be owned by at most one in-flight search at a time;
/// independent searches need independent `Game` values.
#[derive(Debug, Clone)]
pub struct Game {
    pos: Chess,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    pos: Chess,
    mv: Move,
    /// Repetition key of `pos`, computed once at push time.
    key: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position.
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| EngineError::InvalidFen(e.to_string()))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidPosition(e.to_string()))?;
        Ok(Self {
            pos,
            history: Vec::new(),
        })
    }

    pub fn fen(&self) -> String {
        Fen(self.pos.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    /// Applies a move in place. Moves that are not currently legal are
    /// rejected without touching the position.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), EngineError> {
        if !self.pos.is_legal(mv) {
            return Err(EngineError::IllegalMove {
                mv: uci(mv),
                fen: self.fen(),
            });
        }
        self.history.push(HistoryEntry {
            pos: self.pos.clone(),
            mv: mv.clone(),
            key: repetition_key(&self.pos),
        });
        self.pos.play_unchecked(mv);
        Ok(())
    }

    /// Reverts the most recently applied move, restoring the exact prior
    /// state. Returns the reverted move, or `None` if there is nothing
    /// to undo.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        self.pos = entry.pos;
        Some(entry.mv)
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    /// Stalemate, insufficient material, the 50-move rule, or threefold
    /// repetition within this game's own move history.
    pub fn is_draw(&self) -> bool {
        self.pos.is_stalemate()
            || self.pos.is_insufficient_material()
            || self.pos.halfmoves() >= 100
            || self.is_repetition()
    }

    pub fn is_game_over(&self) -> bool {
        self.pos.is_checkmate() || self.is_draw()
    }

    /// 8x8 grid with rank 8 first (row 0 = rank 8, row 7 = rank 1) and
    /// files a..h within each row.
    pub fn board_snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for sq in Square::ALL {
            if let Some(piece) = self.pos.board().piece_at(sq) {
                let row = 7 - sq.rank() as usize;
                let col = sq.file() as usize;
                grid[row][col] = Some(piece);
            }
        }
        grid
    }

    pub(crate) fn position(&self) -> &Chess {
        &self.pos
    }

    fn is_repetition(&self) -> bool {
        // A position can only have repeated within the reversible-move
        // window; two prior occurrences need at least 8 halfmoves.
        if self.pos.halfmoves() < 8 {
            return false;
        }
        let current = repetition_key(&self.pos);
        let mut seen = 1;
        for entry in &self.history {
            if entry.key == current {
                seen += 1;
                if seen >= 3 {
                    return true;
                }
            }
        }
        false
    }
}

/// Compact origin + destination + optional promotion form, e.g. "e2e4"
/// or "e7e8q".
pub fn uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Board, turn, castling rights, and en passant square. Move counters are
/// dropped so recurring positions compare equal.
fn repetition_key(pos: &Chess) -> String {
    let fen = Fen(pos.clone().into_setup(EnPassantMode::Legal)).to_string();
    fen.split(' ').take(4).collect::<Vec<_>>().join(" ")
}
