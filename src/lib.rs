#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    reason = "most methods are cheap predicates"
)]

//! Rules of chess over an 8×8 board: move legality including castling and
//! en passant, refusal of moves that leave the mover's own king in check,
//! and detection of check, checkmate, and stalemate.
//!
//! ```
//! use chess_rules::{board::Board, color::Color, square};
//!
//! let mut board = Board::starting_position();
//! assert!(board.attempt_move(square!("f2"), square!("f3")));
//! assert!(board.attempt_move(square!("e7"), square!("e5")));
//! assert!(board.attempt_move(square!("g2"), square!("g4")));
//! assert!(board.attempt_move(square!("d8"), square!("h4")));
//! assert!(board.is_checkmate(Color::White));
//! ```

pub mod board;
pub mod board_display;
pub mod castling_right;
pub mod color;
pub mod end_state;
pub mod error;
pub mod game;
pub mod piece;
pub mod repl;
pub mod square;

#[cfg(test)]
mod fuzz;
