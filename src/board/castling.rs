use log::trace;

use crate::{
    board::Board,
    castling_right::CastlingSide,
    color::Color,
    piece::{Piece, PieceKind},
    square::Square,
};

impl Board {
    /// Whether `color` may castle towards `side` right now.
    ///
    /// The right must still be held, the king must stand on its origin
    /// square out of check, everything between king and corner rook must be
    /// empty, and the king may not cross or land on an attacked square.
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        let rank = color.back_rank();
        let king = Square::new(4, rank);
        let corner = Square::corner(color, side.rook_origin());
        if !self.castling_rights.get(color, side) {
            trace!("{color} {side} castling: right already revoked");
            return false;
        }
        if self[king] != Some(Piece::new(color, PieceKind::King)) {
            return false;
        }
        if self.is_in_check(color) {
            trace!("{color} {side} castling: king in check");
            return false;
        }
        if !self.is_path_clear(king, corner) {
            trace!("{color} {side} castling: path between king and rook occupied");
            return false;
        }
        if self[corner] != Some(Piece::new(color, PieceKind::Rook)) {
            trace!("{color} {side} castling: no rook on {corner}");
            return false;
        }
        let attacked = side
            .king_path()
            .into_iter()
            .map(|file| Square::new(file, rank))
            .find(|square| self.is_square_attacked(*square, !color));
        if let Some(square) = attacked {
            trace!("{color} {side} castling: {square} attacked");
            return false;
        }
        true
    }
}
