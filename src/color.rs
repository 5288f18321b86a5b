//! Color type representing each player side.

use std::fmt;

/// Represents each side of player. Black (sente) moves first in the standard
/// opening, White (gote) second.
///
/// White's pieces start on ranks 0–2 and advance toward increasing rank,
/// Black's start on ranks 6–8 and advance toward rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the color of the opposite side.
    #[must_use]
    pub fn flip(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns an iterator of both colors, Black first.
    pub fn iter() -> ColorIter {
        ColorIter { current: Some(Color::Black) }
    }

    /// Orients an offset written for White (advancing toward increasing rank)
    /// so that it applies to this side.
    #[inline]
    pub fn orient(self, (df, dr): (i8, i8)) -> (i8, i8) {
        match self {
            Color::White => (df, dr),
            Color::Black => (-df, -dr),
        }
    }

    /// Returns the side-to-move letter used in the position text.
    pub fn sfen_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// Parses the side-to-move letter.
    pub fn from_sfen(s: &str) -> Option<Color> {
        match s {
            "b" => Some(Color::Black),
            "w" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::Black => write!(f, "sente"),
            Color::White => write!(f, "gote"),
        }
    }
}

/// This struct is created by the [`Color::iter`] method.
pub struct ColorIter {
    current: Option<Color>,
}

impl Iterator for ColorIter {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        let cur = self.current?;
        self.current = match cur {
            Color::Black => Some(Color::White),
            Color::White => None,
        };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip() {
        assert_eq!(Color::White, Color::Black.flip());
        assert_eq!(Color::Black, Color::White.flip());
    }

    #[test]
    fn iter() {
        let colors: Vec<_> = Color::iter().collect();
        assert_eq!(vec![Color::Black, Color::White], colors);
    }

    #[test]
    fn orient() {
        assert_eq!((1, 2), Color::White.orient((1, 2)));
        assert_eq!((-1, -2), Color::Black.orient((1, 2)));
    }

    #[test]
    fn sfen_char() {
        for c in Color::iter() {
            assert_eq!(Some(c), Color::from_sfen(&c.sfen_char().to_string()));
        }
        assert_eq!(None, Color::from_sfen("x"));
    }
}
