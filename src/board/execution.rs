use log::debug;

use crate::{
    board::{Board, LastMove},
    castling_right::{CastlingRights, CastlingSide},
    piece::{Piece, PieceKind},
    square::Square,
};

/// Everything a single move touches, enough to put the board back exactly
/// as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Undo {
    start: Square,
    end: Square,
    piece: Piece,
    capture: Option<(Square, Piece)>,
    castling_rook: Option<(Square, Square)>,
    castling_rights: CastlingRights,
}
impl Board {
    /// Plays the move if it is legal and does not leave the mover's king in
    /// check. Returns whether the move was played; a refused move leaves the
    /// board untouched.
    pub fn attempt_move(&mut self, start: Square, end: Square) -> bool {
        let Some(piece) = self[start] else {
            debug!("{start}{end} refused: {start} is empty");
            return false;
        };
        if !self.is_legal(start, end, true) {
            debug!("{start}{end} refused: illegal for {piece}");
            return false;
        }
        let undo = self.apply(piece, start, end);
        if self.is_in_check(piece.color) {
            self.undo(undo);
            debug!("{start}{end} refused: {piece} would leave its king in check");
            return false;
        }
        self.last_move = Some(LastMove { start, end });
        debug!("{piece} played {start}{end}");
        true
    }
    /// Moves `piece` from `start` to `end` along with every side effect:
    /// en passant capture, rook relocation, and castling right revocation.
    /// The move is assumed legal.
    pub(super) fn apply(&mut self, piece: Piece, start: Square, end: Square) -> Undo {
        let movement = end - start;
        let capture_square = if piece.kind == PieceKind::Pawn
            && movement.file != 0
            && self[end].is_none()
        {
            Square::new(end.file(), start.rank())
        } else {
            end
        };
        let capture = self
            .take(capture_square)
            .map(|captured| (capture_square, captured));

        let castling_rook = if piece.kind == PieceKind::King && movement.file.abs() == 2 {
            let side = if movement.file > 0 {
                CastlingSide::Kingside
            } else {
                CastlingSide::Queenside
            };
            let origin = Square::new(side.rook_origin(), start.rank());
            let destination = Square::new(side.rook_destination(), start.rank());
            self.take(origin).map(|rook| {
                self.set(destination, Some(rook));
                (origin, destination)
            })
        } else {
            None
        };

        self.set(start, None);
        self.set(end, Some(piece));

        let castling_rights = self.castling_rights;
        match piece.kind {
            PieceKind::King => self.castling_rights.revoke_all(piece.color),
            PieceKind::Rook if start.rank() == piece.color.back_rank() => {
                if let Some(side) = CastlingSide::from_rook_origin(start.file()) {
                    self.castling_rights.revoke(piece.color, side);
                }
            }
            _ => (),
        }
        Undo {
            start,
            end,
            piece,
            capture,
            castling_rook,
            castling_rights,
        }
    }
    pub(super) fn undo(&mut self, undo: Undo) {
        self.set(undo.end, None);
        self.set(undo.start, Some(undo.piece));
        if let Some((square, captured)) = undo.capture {
            self.set(square, Some(captured));
        }
        if let Some((origin, destination)) = undo.castling_rook {
            let rook = self.take(destination);
            self.set(origin, rook);
        }
        self.castling_rights = undo.castling_rights;
    }
}
