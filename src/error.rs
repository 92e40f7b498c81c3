use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, end_state::EndState, piece::Piece, square::Square};

/// Why [`Game::play`](crate::game::Game::play) refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayError {
    GameOver(EndState),
    EmptySquare(Square),
    NotYourTurn { piece: Piece, side_to_move: Color },
    IllegalMove { start: Square, end: Square },
}
impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver(end_state) => write!(f, "the game is over: {end_state}")?,
            PlayError::EmptySquare(square) => write!(f, "there is no piece on {square}")?,
            PlayError::NotYourTurn {
                piece,
                side_to_move,
            } => write!(f, "cannot move a {piece}, {side_to_move} is to play")?,
            PlayError::IllegalMove { start, end } => write!(f, "{start}{end} is an illegal move")?,
        }
        Ok(())
    }
}
impl Error for PlayError {}
