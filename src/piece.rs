use std::fmt::{self, Display, Formatter};

use crate::{color::Color, square::Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
    /// Whether the movement shape fits this piece, ignoring every other piece
    /// on the board, whose turn it is, and check.
    ///
    /// Pawns are allowed their single step, the double step from their home
    /// rank, and both forward diagonals. The king only has its one-square
    /// moves here; castling is decided elsewhere.
    pub fn shape_allows(self, start: Square, end: Square) -> bool {
        let movement = end - start;
        let file = movement.file.unsigned_abs();
        let rank = movement.rank.unsigned_abs();
        if file == 0 && rank == 0 {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => {
                let forward = self.color.pawn_direction();
                (movement.rank == forward && file <= 1)
                    || (movement.rank == forward * 2
                        && file == 0
                        && start.rank() == self.color.pawn_home_rank())
            }
            PieceKind::Rook => file == 0 || rank == 0,
            PieceKind::Knight => (file == 2 && rank == 1) || (file == 1 && rank == 2),
            PieceKind::Bishop => file == rank,
            PieceKind::Queen => file == 0 || rank == 0 || file == rank,
            PieceKind::King => file <= 1 && rank <= 1,
        }
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
