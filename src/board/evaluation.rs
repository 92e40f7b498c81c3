use rustc_hash::FxHashSet;

use crate::{board::Board, color::Color, end_state::EndState, piece::Piece, square::Square};

impl Board {
    /// Whether any piece of color `by` could legally move onto `square`.
    /// Castling is never counted as an attack.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(start, _)| self.is_legal(start, square, false))
    }
    /// Whether the king of `color` is attacked. A board without that king is
    /// never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king(color)
            .is_some_and(|king| self.is_square_attacked(king, !color))
    }
    /// Every square the piece on `start` can move to without leaving its own
    /// king in check, en passant and castling included.
    pub fn legal_destinations(&self, start: Square) -> FxHashSet<Square> {
        let Some(piece) = self[start] else {
            return FxHashSet::default();
        };
        let mut scratch = self.clone();
        Square::all()
            .filter(|end| self.is_legal(start, *end, true))
            .filter(|end| scratch.is_safe(piece, start, *end))
            .collect()
    }
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.clone();
        self.pieces(color).any(|(start, piece)| {
            Square::all().any(|end| {
                self.is_legal(start, end, true) && scratch.is_safe(piece, start, end)
            })
        })
    }
    /// In check with no legal move. A board without that king is never
    /// checkmate.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }
    /// Not in check yet without any legal move. A board without that king is
    /// never stalemate.
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.king(color).is_some() && !self.is_in_check(color) && !self.has_legal_move(color)
    }
    /// How the game ends if `color` is to move now, if it does.
    pub fn end_state(&self, color: Color) -> Option<EndState> {
        if self.king(color).is_none() || self.has_legal_move(color) {
            None
        } else if self.is_in_check(color) {
            Some(EndState::Win(!color))
        } else {
            Some(EndState::Draw)
        }
    }
    /// Plays a legal move on a scratch board, checks the mover's king and
    /// takes the move back.
    fn is_safe(&mut self, piece: Piece, start: Square, end: Square) -> bool {
        let undo = self.apply(piece, start, end);
        let safe = !self.is_in_check(piece.color);
        self.undo(undo);
        safe
    }
}
