use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

use crate::{
    castling_right::CastlingRights,
    color::Color,
    piece::{Piece, PieceKind},
    square::Square,
};

mod castling;
mod evaluation;
mod execution;
mod legality;

/// The most recently executed move. Only the immediately preceding move is
/// remembered, which is all en passant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub start: Square,
    pub end: Square,
}
impl Display for LastMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
}
impl Board {
    pub fn starting_position() -> Self {
        let mut board = Board::empty().with_castling_rights(CastlingRights::all());
        for (file, kind) in (0..8).zip(PieceKind::STARTING_CONFIGURATION) {
            for color in Color::ALL {
                board.set(
                    Square::new(file, color.back_rank()),
                    Some(Piece::new(color, kind)),
                );
                board.set(
                    Square::new(file, color.pawn_home_rank()),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }
    /// A board with no pieces, no castling rights, and no last move. Use the
    /// `with_*` methods to set up a position before play.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling_rights: CastlingRights::none(),
            last_move: None,
        }
    }
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }
    pub fn with_castling_rights(mut self, castling_rights: CastlingRights) -> Self {
        self.castling_rights = castling_rights;
        self
    }
    pub fn with_last_move(mut self, start: Square, end: Square) -> Self {
        self.last_move = Some(LastMove { start, end });
        self
    }
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> {
        self.all_pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn all_pieces(&self) -> impl Iterator<Item = (Square, Piece)> {
        Square::all().filter_map(|square| self[square].map(|piece| (square, piece)))
    }
    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }
    fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.rank() as usize][index.file() as usize]
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        castling_right::CastlingRights,
        color::Color,
        piece::{Piece, PieceKind},
        square,
        square::Square,
    };

    #[test]
    fn starting_position() {
        let board = Board::starting_position();
        let pawns = board
            .all_pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
            .count();
        let others = board
            .all_pieces()
            .filter(|(_, piece)| piece.kind != PieceKind::Pawn)
            .count();
        assert_eq!(pawns, 16);
        assert_eq!(others, 16);
        for (square, piece) in board.all_pieces() {
            let mirrored = Square::new(square.file(), 7 - square.rank());
            assert_eq!(board[mirrored], Some(Piece::new(!piece.color, piece.kind)));
        }
        for file in 0..8 {
            assert!(
                board[Square::new(file, 1)]
                    .is_some_and(|piece| piece.is(Color::White, PieceKind::Pawn))
            );
            assert!(
                board[Square::new(file, 6)]
                    .is_some_and(|piece| piece.is(Color::Black, PieceKind::Pawn))
            );
            for rank in 2..6 {
                assert_eq!(board[Square::new(file, rank)], None);
            }
        }
        assert_eq!(board.king(Color::White), Some(square!("e1")));
        assert_eq!(board.king(Color::Black), Some(square!("e8")));
        assert_eq!(
            board[square!("d1")],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.last_move(), None);
    }
    #[test]
    fn empty_board_has_no_kings() {
        let board = Board::empty();
        assert_eq!(board.all_pieces().count(), 0);
        assert_eq!(board.king(Color::White), None);
    }
}
