use crate::Color;
use std::fmt;
use std::iter;
use std::str::FromStr;

const ASCII_0: u8 = b'0';

/// Number of files (and ranks) of the board.
pub const BOARD_SIZE: u8 = 9;

/// Represents a position of each cell in the 9×9 game board.
///
/// Both the file and the rank are zero-indexed, so every coordinate lies in
/// `[0, 8]`. Rank 0 is White's back rank and rank 8 is Black's.
///
/// # Examples
///
/// ```
/// use shogi_match::Square;
///
/// let sq = Square::new(4, 6).unwrap();
/// assert_eq!("46", sq.to_string());
/// assert_eq!(Some(sq), Square::from_notation("46"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    inner: u8,
}

impl Square {
    /// The total number of squares on the board.
    pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Creates a new instance of `Square`.
    ///
    /// `file` and `rank` can take a value from 0 to 8.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file >= BOARD_SIZE || rank >= BOARD_SIZE {
            return None;
        }

        Some(Square {
            inner: file * BOARD_SIZE + rank,
        })
    }

    /// Creates a new instance of `Square` from its two-digit notation,
    /// file first (`"46"` is file 4, rank 6).
    pub fn from_notation(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let digit = |b: u8| b.checked_sub(ASCII_0).filter(|&d| d < BOARD_SIZE);
        Square::new(digit(bytes[0])?, digit(bytes[1])?)
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: u8) -> Option<Square> {
        if index as usize >= Self::NUM_SQUARES {
            return None;
        }

        Some(Square { inner: index })
    }

    /// Returns an iterator of all squares on the board.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the file of the square.
    pub fn file(self) -> u8 {
        self.inner / BOARD_SIZE
    }

    /// Returns the rank of the square.
    pub fn rank(self) -> u8 {
        self.inner % BOARD_SIZE
    }

    /// Returns a new `Square` instance by moving the file and the rank values.
    ///
    /// Returns `None` when the result would fall off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogi_match::Square;
    ///
    /// let sq = Square::new(1, 1).unwrap();
    /// let shifted = sq.shift(2, 3).unwrap();
    ///
    /// assert_eq!(3, shifted.file());
    /// assert_eq!(4, shifted.rank());
    /// assert!(sq.shift(-2, 0).is_none());
    /// ```
    #[must_use]
    pub fn shift(self, df: i8, dr: i8) -> Option<Square> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;

        if !(0..BOARD_SIZE as i8).contains(&f) || !(0..BOARD_SIZE as i8).contains(&r) {
            return None;
        }

        Some(Square {
            inner: f as u8 * BOARD_SIZE + r as u8,
        })
    }

    /// Returns the distance of the square from the far edge of the given
    /// color, i.e. 0 is the last rank the color's pieces can advance to.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogi_match::{Color, Square};
    ///
    /// let sq = Square::new(0, 6).unwrap();
    ///
    /// assert_eq!(6, sq.relative_rank(Color::Black));
    /// assert_eq!(2, sq.relative_rank(Color::White));
    /// ```
    pub fn relative_rank(self, c: Color) -> u8 {
        match c {
            Color::Black => self.rank(),
            Color::White => BOARD_SIZE - 1 - self.rank(),
        }
    }

    /// Returns true if the square lies in the promotion zone of the given color.
    pub fn in_promotion_zone(self, c: Color) -> bool {
        self.relative_rank(c) < 3
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            (self.file() + ASCII_0) as char,
            (self.rank() + ASCII_0) as char
        )
    }
}

/// Error type for parsing a square from its notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s).ok_or(ParseSquareError)
    }
}

/// This struct is created by the [`Square::iter`] method.
///
/// Squares are yielded file by file, rank 0 first within each file.
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = Square::from_index(self.current)?;
        self.current += 1;
        Some(cur)
    }
}
