//! Randomized checks of the rules: a differential run against the `chess`
//! crate's move generator and property tests over random games.

use std::{fmt::Write, str::FromStr};

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    castling_right::CastlingSide,
    color::Color,
    piece::{Piece, PieceKind},
    square::Square,
};

impl From<chess::Square> for Square {
    fn from(value: chess::Square) -> Self {
        Square::new(
            value.get_file().to_index().try_into().unwrap(),
            value.get_rank().to_index().try_into().unwrap(),
        )
    }
}
fn fen_char(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
/// Describes the position for the reference move generator. A castling right
/// is only written out while king and rook still stand on their origins.
fn reference_board(board: &Board, side_to_move: Color) -> chess::Board {
    let mut fen = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            if let Some(piece) = board[Square::new(file, rank)] {
                if empty > 0 {
                    write!(fen, "{empty}").unwrap();
                    empty = 0;
                }
                fen.push(fen_char(piece));
            } else {
                empty += 1;
            }
        }
        if empty > 0 {
            write!(fen, "{empty}").unwrap();
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    fen.push(' ');
    fen.push(match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });
    fen.push(' ');
    let mut castling = String::new();
    for (color, side, c) in [
        (Color::White, CastlingSide::Kingside, 'K'),
        (Color::White, CastlingSide::Queenside, 'Q'),
        (Color::Black, CastlingSide::Kingside, 'k'),
        (Color::Black, CastlingSide::Queenside, 'q'),
    ] {
        let king = Square::new(4, color.back_rank());
        let rook = Square::corner(color, side.rook_origin());
        if board.castling_rights().get(color, side)
            && board[king] == Some(Piece::new(color, PieceKind::King))
            && board[rook] == Some(Piece::new(color, PieceKind::Rook))
        {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push_str(&castling);
    fen.push(' ');
    let en_passant = board.last_move().filter(|last_move| {
        board[last_move.end].is_some_and(|piece| piece.kind == PieceKind::Pawn)
            && (last_move.end - last_move.start).rank.abs() == 2
    });
    match en_passant {
        Some(last_move) => {
            let skipped = Square::new(
                last_move.end.file(),
                u8::midpoint(last_move.start.rank(), last_move.end.rank()),
            );
            write!(fen, "{skipped}").unwrap();
        }
        None => fen.push('-'),
    }
    fen.push_str(" 0 1");
    chess::Board::from_str(&fen).unwrap_or_else(|err| panic!("{fen} rejected: {err}"))
}
fn is_castling(board: &Board, start: Square, end: Square) -> bool {
    board[start].is_some_and(|piece| piece.kind == PieceKind::King)
        && (end - start).file.abs() == 2
}
fn legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut moves: Vec<_> = board
        .pieces(color)
        .flat_map(|(start, _)| {
            board
                .legal_destinations(start)
                .into_iter()
                .map(move |end| (start, end))
        })
        .collect();
    moves.sort_unstable();
    moves
}
fn reaches_last_rank(board: &Board, start: Square, end: Square) -> bool {
    board[start].is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && end.rank() == (!piece.color).back_rank()
    })
}
/// Plays random games and compares the non-castling moves found with those of
/// the `chess` crate. Castling is left out: attacked transit squares are
/// decided with pawn pushes rather than pawn captures. Games restart once a
/// pawn would promote since promotion is not part of these rules.
#[test]
fn matches_reference_move_generator() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut board = Board::starting_position();
    let mut side_to_move = Color::White;
    for _ in 0..1500 {
        let moves = legal_moves(&board, side_to_move);
        let ours: FxHashSet<_> = moves
            .iter()
            .copied()
            .filter(|(start, end)| !is_castling(&board, *start, *end))
            .collect();
        let reference = reference_board(&board, side_to_move);
        let theirs: FxHashSet<(Square, Square)> = chess::MoveGen::new_legal(&reference)
            .map(|movement| (movement.get_source().into(), movement.get_dest().into()))
            .filter(|(start, end)| !is_castling(&board, *start, *end))
            .collect();
        if let Some((start, end)) = ours.difference(&theirs).next() {
            panic!("found {start}{end} but it's not a legal move\n{reference}");
        }
        if let Some((start, end)) = theirs.difference(&ours).next() {
            panic!("{start}{end} not found\n{reference}");
        }
        if moves.is_empty() {
            board = Board::starting_position();
            side_to_move = Color::White;
            continue;
        }
        let (start, end) = moves[rng.random_range(0..moves.len())];
        if reaches_last_rank(&board, start, end) {
            board = Board::starting_position();
            side_to_move = Color::White;
            continue;
        }
        assert!(board.attempt_move(start, end), "{start}{end} refused");
        side_to_move = !side_to_move;
    }
}
fn random_game(seed: u64, plies: usize) -> Vec<(Board, Color)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::starting_position();
    let mut side_to_move = Color::White;
    let mut positions = vec![(board.clone(), side_to_move)];
    for _ in 0..plies {
        let moves = legal_moves(&board, side_to_move);
        if moves.is_empty() {
            break;
        }
        let (start, end) = moves[rng.random_range(0..moves.len())];
        assert!(board.attempt_move(start, end));
        side_to_move = !side_to_move;
        positions.push((board.clone(), side_to_move));
    }
    positions
}
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// An accepted move never leaves the mover in check, and exactly the
    /// listed destinations are accepted.
    #[test]
    fn accepted_moves_are_safe_and_listed(seed in any::<u64>(), plies in 1..30usize) {
        for (board, side_to_move) in random_game(seed, plies) {
            for (start, _) in board.pieces(side_to_move) {
                let destinations = board.legal_destinations(start);
                for end in Square::all() {
                    let mut played = board.clone();
                    let accepted = played.attempt_move(start, end);
                    prop_assert_eq!(accepted, destinations.contains(&end));
                    if accepted {
                        prop_assert!(!played.is_in_check(side_to_move));
                        let rights = played.castling_rights();
                        prop_assert!(rights.is_subset_of(board.castling_rights()));
                    } else {
                        prop_assert_eq!(&played, &board);
                    }
                }
            }
        }
    }

    #[test]
    fn end_states_follow_their_definitions(seed in any::<u64>(), plies in 1..80usize) {
        for (board, _) in random_game(seed, plies) {
            for color in Color::ALL {
                let stuck = board
                    .pieces(color)
                    .all(|(start, _)| board.legal_destinations(start).is_empty());
                let check = board.is_in_check(color);
                prop_assert_eq!(board.is_checkmate(color), check && stuck);
                prop_assert_eq!(board.is_stalemate(color), !check && stuck);
            }
        }
    }
}
