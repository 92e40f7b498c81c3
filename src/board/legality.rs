use crate::{
    board::Board,
    castling_right::CastlingSide,
    piece::{Piece, PieceKind},
    square::Square,
};

impl Board {
    /// Whether the piece on `start` may move to `end`, without regard to
    /// whether the move leaves its own king in check.
    ///
    /// With `allow_castling` unset, two-file king steps are rejected outright.
    /// Attack probes use that so castling never asks about castling.
    pub fn is_legal(&self, start: Square, end: Square, allow_castling: bool) -> bool {
        let Some(piece) = self[start] else {
            return false;
        };
        if self[end].is_some_and(|target| target.color == piece.color) {
            return false;
        }
        let movement = end - start;
        match piece.kind {
            PieceKind::Pawn => self.is_legal_pawn_move(piece, start, end),
            PieceKind::King if movement.file.abs() == 2 && movement.rank == 0 => {
                allow_castling && self.is_castling(piece, start, end)
            }
            PieceKind::Knight => piece.shape_allows(start, end),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen | PieceKind::King => {
                self.is_path_clear(start, end) && piece.shape_allows(start, end)
            }
        }
    }
    /// Whether every square strictly between `start` and `end` is empty.
    pub fn is_path_clear(&self, start: Square, end: Square) -> bool {
        start.between(end).all(|square| self[square].is_none())
    }
    fn is_legal_pawn_move(&self, pawn: Piece, start: Square, end: Square) -> bool {
        if !pawn.shape_allows(start, end) {
            return false;
        }
        let movement = end - start;
        let forward = pawn.color.pawn_direction();
        if movement.file != 0 {
            self[end].is_some() || self.is_en_passant(start, end)
        } else if movement.rank == forward {
            self[end].is_none()
        } else {
            let skipped = Square::new(start.file(), start.rank().wrapping_add_signed(forward));
            self[end].is_none() && self[skipped].is_none()
        }
    }
    fn is_castling(&self, king: Piece, start: Square, end: Square) -> bool {
        if start != Square::new(4, king.color.back_rank()) {
            return false;
        }
        CastlingSide::from_king_destination(end.file())
            .is_some_and(|side| self.can_castle(king.color, side))
    }
    /// Whether the pawn on `start` may capture en passant by moving to `end`.
    ///
    /// Only the last executed move is consulted: it must be an enemy pawn's
    /// two-rank advance ending beside `start` on the file of `end`.
    pub fn is_en_passant(&self, start: Square, end: Square) -> bool {
        let Some(last_move) = self.last_move else {
            return false;
        };
        let (Some(pawn), Some(passed)) = (self[start], self[last_move.end]) else {
            return false;
        };
        pawn.kind == PieceKind::Pawn
            && passed.kind == PieceKind::Pawn
            && passed.color != pawn.color
            && (last_move.end - last_move.start).rank.abs() == 2
            && last_move.end.rank() == start.rank()
            && last_move.end.file() == end.file()
    }
}
