use std::fmt;

use crate::{Color, Move, Piece, PieceKind, Square};

/// Fixed 9×9 grid of optional occupants.
///
/// Each piece lives in exactly one cell. The board is `Copy`, so a
/// hypothetical position is a plain copy that can be mutated freely.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Option<Piece>; Square::NUM_SQUARES]);

impl Board {
    /// Creates a board with no pieces on it.
    pub fn empty() -> Board {
        Board([None; Square::NUM_SQUARES])
    }

    /// Creates a board with the standard opening setup.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogi_match::{Board, Color, PieceKind, Square};
    ///
    /// let board = Board::standard();
    /// let king = board.piece_at(Square::new(4, 8).unwrap()).unwrap();
    /// assert_eq!((PieceKind::King, Color::Black), (king.kind, king.color));
    /// assert_eq!(40, Square::iter().filter(|&sq| board.piece_at(sq).is_some()).count());
    /// ```
    pub fn standard() -> Board {
        use PieceKind::*;

        const BACK_RANK: [PieceKind; 9] = [Lance, Knight, Silver, Gold, King, Gold, Silver, Knight, Lance];

        let mut board = Board::empty();
        for file in 0..9 {
            board.place(file, 0, Piece::new(BACK_RANK[file as usize], Color::White));
            board.place(file, 2, Piece::new(Pawn, Color::White));
            board.place(file, 6, Piece::new(Pawn, Color::Black));
            board.place(file, 8, Piece::new(BACK_RANK[file as usize], Color::Black));
        }

        board.place(1, 1, Piece::new(Bishop, Color::White));
        board.place(7, 1, Piece::new(Rook, Color::White));
        board.place(1, 7, Piece::new(Rook, Color::Black));
        board.place(7, 7, Piece::new(Bishop, Color::Black));

        board
    }

    /// Returns the piece at the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    /// Returns the piece at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are outside the board.
    pub fn at(&self, file: u8, rank: u8) -> Option<Piece> {
        self.piece_at(Self::square(file, rank))
    }

    /// Sets a piece at the given square, returning the previous occupant.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.0[sq.index()], pc)
    }

    /// Puts a piece at the given coordinates; handy for building positions.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are outside the board.
    pub fn place(&mut self, file: u8, rank: u8, pc: Piece) -> &mut Board {
        self.set(Self::square(file, rank), Some(pc));
        self
    }

    /// Removes and returns the piece at the given square.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Plays a move on the grid alone and returns the captured piece, if any.
    ///
    /// Hand counters are left alone; see [`Position::apply`](crate::Position::apply).
    pub fn apply_move(&mut self, m: &Move) -> Option<Piece> {
        if let Some(from) = m.from() {
            self.take(from);
        }
        self.set(m.to(), Some(m.placed()))
    }

    /// Returns true if no piece occupies the given square.
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Iterates over the squares and pieces of the given color, in square order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == c => Some((sq, pc)),
            _ => None,
        })
    }

    /// Iterates over the empty squares, in square order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&sq| self.is_empty_at(sq))
    }

    /// Returns the position of the king with the given color.
    pub fn find_king(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns true if an unpromoted pawn of the given color stands on the file.
    pub fn has_pawn_on_file(&self, c: Color, file: u8) -> bool {
        (0..9).any(|rank| {
            matches!(
                self.at(file, rank),
                Some(Piece { kind: PieceKind::Pawn, promoted: false, color }) if color == c
            )
        })
    }

    fn square(file: u8, rank: u8) -> Square {
        Square::new(file, rank)
            .unwrap_or_else(|| panic!("position ({file},{rank}) is out of bounds"))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Board {{ ")?;

        for (sq, pc) in Square::iter().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc))) {
            write!(fmt, "{sq}:{pc} ")?;
        }
        write!(fmt, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    0   1   2   3   4   5   6   7   8")?;
        writeln!(f, "  +---+---+---+---+---+---+---+---+---+")?;

        for rank in 0..9 {
            write!(f, "{rank} |")?;
            for file in 0..9 {
                match self.at(file, rank) {
                    Some(pc) => write!(f, "{:>3}|", pc.to_string())?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+---+")?;
        }

        Ok(())
    }
}
