use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Mul, Sub},
    str::FromStr,
};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseSquareError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParseSquareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseSquareError::InvalidFile(file) => write!(
                f,
                "found `{file}`, characters from `a` to `h` were expected instead"
            )?,
            ParseSquareError::InvalidRank(rank) => write!(
                f,
                "found `{rank}`, characters from `1` to `8` were expected instead"
            )?,
            ParseSquareError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParseSquareError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseSquareError {}

/// A square of the board. File 0 is the `a` file and rank 0 is white's back
/// rank, so `(0, 0)` is where white's queenside rook starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}
impl Square {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8, "{file} should be < 8");
        debug_assert!(rank < 8, "{rank} should be < 8");
        Square { rank, file }
    }
    pub fn new_checked(file: u8, rank: u8) -> Option<Self> {
        if file >= 8 || rank >= 8 {
            None
        } else {
            Some(Square { rank, file })
        }
    }
    /// Parses names like `e4`. Usable in const context, see [`square!`](crate::square!).
    pub const fn from_name(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !matches!(file, b'a'..=b'h') || !matches!(rank, b'1'..=b'8') {
            return None;
        }
        Some(Square {
            rank: rank - b'1',
            file: file - b'a',
        })
    }
    pub fn file(self) -> u8 {
        self.file
    }
    pub fn rank(self) -> u8 {
        self.rank
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square { rank, file }))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.file.checked_add_signed(movement.file)?,
            self.rank.checked_add_signed(movement.rank)?,
        )
    }
    /// Squares strictly between `self` and `end`, walked with the unit step
    /// of their difference. Only meaningful when both squares share a file,
    /// a rank, or a diagonal.
    pub fn between(self, end: Self) -> impl Iterator<Item = Self> {
        let difference = end - self;
        let unit = difference.as_unit();
        (1..difference.distance()).map_while(move |step| self.move_by(unit * step))
    }
    pub fn corner(color: Color, file: u8) -> Self {
        Square::new(file, color.back_rank())
    }
    /// Shade of the square on a physical board.
    pub fn shade(self) -> Color {
        if (self.file + self.rank) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.file + b'a') as char;
        let rank = self.rank + 1;
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParseSquareError::NotEnoughCharacter(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParseSquareError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseSquareError::Unexpected(c));
        }
        let file = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(ParseSquareError::InvalidFile(file)),
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return Err(ParseSquareError::InvalidRank(rank)),
        };
        Ok(Square::new(file, rank))
    }
}
impl Sub<Self> for Square {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            file: <i8>::try_from(self.file).unwrap() - <i8>::try_from(rhs.file).unwrap(),
            rank: <i8>::try_from(self.rank).unwrap() - <i8>::try_from(rhs.rank).unwrap(),
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub file: i8,
    pub rank: i8,
}
impl Vector {
    pub fn as_unit(self) -> Self {
        Vector {
            file: self.file.signum(),
            rank: self.rank.signum(),
        }
    }
    /// Number of king steps needed to cover this vector.
    pub fn distance(self) -> i8 {
        Ord::max(self.file.abs(), self.rank.abs())
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            file: self.file * rhs,
            rank: self.rank * rhs,
        }
    }
}
#[macro_export]
macro_rules! square {
    ($name:literal) => {
        const {
            match $crate::square::Square::from_name($name) {
                Some(square) => square,
                None => panic!("invalid square name"),
            }
        }
    };
}
#[cfg(test)]
mod test {
    use crate::square::{ParseSquareError, Square, Vector};

    #[test]
    fn adjacent_squares_have_nothing_between() {
        assert_eq!(square!("e4").between(square!("e5")).next(), None);
    }
    #[test]
    fn between_walks_diagonals_and_lines() {
        let diagonal: Vec<_> = square!("c1").between(square!("f4")).collect();
        assert_eq!(diagonal, [square!("d2"), square!("e3")]);
        let file: Vec<_> = square!("a8").between(square!("a5")).collect();
        assert_eq!(file, [square!("a7"), square!("a6")]);
    }
    #[test]
    fn origin_is_white_queenside_corner() {
        assert_eq!(square!("a1"), Square::new(0, 0));
        assert_eq!(square!("h8"), Square::new(7, 7));
        assert_eq!(square!("e2").to_string(), "e2");
    }
    #[test]
    fn out_of_range() {
        assert_eq!(Square::new_checked(8, 0), None);
        assert_eq!(Square::new_checked(0, 8), None);
        assert_eq!(square!("h1").move_by(Vector { file: 1, rank: 0 }), None);
        assert_eq!(square!("a1").move_by(Vector { file: 0, rank: -1 }), None);
    }
    #[test]
    fn parse() {
        assert_eq!("g7".parse(), Ok(square!("g7")));
        assert_eq!("i1".parse::<Square>(), Err(ParseSquareError::InvalidFile('i')));
        assert_eq!("a9".parse::<Square>(), Err(ParseSquareError::InvalidRank('9')));
        assert_eq!("a".parse::<Square>(), Err(ParseSquareError::NotEnoughCharacter(1)));
        assert_eq!("a1b".parse::<Square>(), Err(ParseSquareError::Unexpected('b')));
    }
    #[test]
    fn all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().next(), Some(square!("a1")));
        assert_eq!(Square::all().last(), Some(square!("h8")));
    }
    #[test]
    fn shade() {
        assert_eq!(square!("a1").shade(), crate::color::Color::Black);
        assert_eq!(square!("h1").shade(), crate::color::Color::White);
    }
}
