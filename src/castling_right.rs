use std::fmt::{self, Display, Formatter};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}
impl CastlingSide {
    pub const ALL: [Self; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// Side of a two-file king move from the king's origin file.
    pub fn from_king_destination(file: u8) -> Option<Self> {
        match file {
            6 => Some(CastlingSide::Kingside),
            2 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
    pub fn from_rook_origin(file: u8) -> Option<Self> {
        match file {
            7 => Some(CastlingSide::Kingside),
            0 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
    pub fn rook_origin(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
    pub fn rook_destination(self) -> u8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }
    pub fn king_destination(self) -> u8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }
    /// Files the king crosses or lands on, which must not be attacked.
    pub fn king_path(self) -> [u8; 2] {
        match self {
            CastlingSide::Kingside => [5, 6],
            CastlingSide::Queenside => [2, 3],
        }
    }
    fn bit(self) -> u8 {
        match self {
            CastlingSide::Kingside => 0b_01,
            CastlingSide::Queenside => 0b_10,
        }
    }
}
impl Display for CastlingSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CastlingSide::Kingside => write!(f, "kingside")?,
            CastlingSide::Queenside => write!(f, "queenside")?,
        }
        Ok(())
    }
}

/// Which castlings each color may still perform. During play rights are
/// only ever revoked; granting is reserved to board setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    white: u8,
    black: u8,
}
impl CastlingRights {
    pub fn none() -> Self {
        CastlingRights { white: 0, black: 0 }
    }
    pub fn all() -> Self {
        CastlingRights {
            white: 0b_11,
            black: 0b_11,
        }
    }
    fn byte(self, color: Color) -> u8 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
    fn byte_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
    pub fn get(self, color: Color, side: CastlingSide) -> bool {
        self.byte(color) & side.bit() != 0
    }
    pub fn with(self, color: Color, side: CastlingSide) -> Self {
        let mut new = self;
        *new.byte_mut(color) |= side.bit();
        new
    }
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        *self.byte_mut(color) &= !side.bit();
    }
    pub fn revoke_all(&mut self, color: Color) {
        *self.byte_mut(color) = 0;
    }
    /// Whether every right held by `self` is also held by `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.white & !other.white == 0 && self.black & !other.black == 0
    }
}
impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}
impl Display for CastlingRights {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for color in Color::ALL {
            for side in CastlingSide::ALL {
                if self.get(color, side) {
                    if written {
                        write!(f, ", ")?;
                    }
                    written = true;
                    write!(f, "{color} {side}")?;
                }
            }
        }
        if !written {
            write!(f, "-")?;
        }
        Ok(())
    }
}
