use std::fmt;

use crate::piece_kind::{Movement, Promotion};
use crate::{Color, PieceKind, Square};

/// Represents a piece on the board, or the piece a move leaves behind.
///
/// Pieces are plain values: capturing one turns it into a hand counter and
/// dropping creates a fresh unpromoted piece, so no piece is ever shared
/// between the board and a generated move.
///
/// # Examples
///
/// ```
/// use shogi_match::{Color, Piece, PieceKind};
///
/// let pc = Piece::new(PieceKind::Silver, Color::White);
/// assert_eq!("s", pc.to_string());
/// assert_eq!("+s", pc.promote().to_string());
/// assert_eq!(Some(pc.flip()), Piece::from_sfen('S'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub promoted: bool,
}

impl Piece {
    /// Creates an unpromoted piece.
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            promoted: false,
        }
    }

    /// Creates a new instance of `Piece` from its letter. Upper case is Black,
    /// lower case is White.
    pub fn from_sfen(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };

        PieceKind::from_char(c.to_ascii_lowercase()).map(|kind| Piece::new(kind, color))
    }

    /// Returns the promoted version of this piece.
    ///
    /// # Panics
    ///
    /// Panics if the piece is a Gold or a King, or is already promoted.
    #[must_use]
    pub fn promote(self) -> Piece {
        assert!(self.kind.can_promote(), "{:?} cannot be promoted", self.kind);
        assert!(!self.promoted, "{self} is already promoted");

        Piece {
            promoted: true,
            ..self
        }
    }

    /// Returns the same piece owned by the opponent.
    #[must_use]
    pub fn flip(self) -> Piece {
        Piece {
            color: self.color.flip(),
            ..self
        }
    }

    /// Returns the movement rule of this piece.
    pub fn movement(self) -> Movement {
        self.kind.movement(self.promoted)
    }

    /// Decides the promotion options of a board move of this piece.
    ///
    /// A move may promote when it starts or ends in the promotion zone; it
    /// must promote when it ends where the unpromoted piece could never move
    /// again.
    pub fn promotion(self, from: Square, to: Square) -> Promotion {
        if self.promoted || !self.kind.can_promote() {
            return Promotion::Never;
        }

        if to.relative_rank(self.color) < self.kind.forced_promotion_ranks() {
            Promotion::Mandatory
        } else if from.in_promotion_zone(self.color) || to.in_promotion_zone(self.color) {
            Promotion::Optional
        } else {
            Promotion::Never
        }
    }

    /// Returns true if this piece, unpromoted and freshly dropped, could move
    /// again from the given square.
    pub fn is_droppable_at(self, sq: Square, restrict_lance: bool) -> bool {
        sq.relative_rank(self.color) >= self.kind.dead_drop_ranks(restrict_lance)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.promoted {
            write!(f, "+")?;
        }

        match self.color {
            Color::Black => write!(f, "{}", self.kind.to_char().to_ascii_uppercase()),
            Color::White => write!(f, "{}", self.kind.to_char()),
        }
    }
}
