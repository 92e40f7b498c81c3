use log::info;
use rustc_hash::FxHashSet;

use crate::{
    board::Board, color::Color, end_state::EndState, error::PlayError, square::Square,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ongoing { check: bool },
    Ended(EndState),
}

/// A game session: a board plus whose turn it is. White moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    outcome: Option<EndState>,
}
impl Game {
    pub fn new() -> Self {
        Game::from_board(Board::starting_position(), Color::White)
    }
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let outcome = board.end_state(side_to_move);
        Game {
            board,
            side_to_move,
            outcome,
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn outcome(&self) -> Option<EndState> {
        self.outcome
    }
    pub fn status(&self) -> Status {
        match self.outcome {
            Some(end_state) => Status::Ended(end_state),
            None => Status::Ongoing {
                check: self.board.is_in_check(self.side_to_move),
            },
        }
    }
    /// Destinations of the piece on `start`, empty unless it belongs to the
    /// side to move and the game is still going.
    pub fn legal_destinations(&self, start: Square) -> FxHashSet<Square> {
        let movable = self.outcome.is_none()
            && self.board[start].is_some_and(|piece| piece.color == self.side_to_move);
        if movable {
            self.board.legal_destinations(start)
        } else {
            FxHashSet::default()
        }
    }
    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        let mut moves: Vec<_> = self
            .board
            .pieces(self.side_to_move)
            .flat_map(|(start, _)| {
                self.legal_destinations(start)
                    .into_iter()
                    .map(move |end| (start, end))
            })
            .collect();
        moves.sort_unstable();
        moves
    }
    pub fn play(&mut self, start: Square, end: Square) -> Result<Status, PlayError> {
        if let Some(end_state) = self.outcome {
            return Err(PlayError::GameOver(end_state));
        }
        let Some(piece) = self.board[start] else {
            return Err(PlayError::EmptySquare(start));
        };
        if piece.color != self.side_to_move {
            return Err(PlayError::NotYourTurn {
                piece,
                side_to_move: self.side_to_move,
            });
        }
        if !self.board.attempt_move(start, end) {
            return Err(PlayError::IllegalMove { start, end });
        }
        self.side_to_move = !self.side_to_move;
        self.outcome = self.board.end_state(self.side_to_move);
        if let Some(end_state) = self.outcome {
            info!("{end_state}");
        }
        Ok(self.status())
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
