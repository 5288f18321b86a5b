use std::fmt;
use std::str::FromStr;

use crate::{Piece, Square};

/// Represents a move which either is a normal move or a drop move.
///
/// The destination always carries the *resultant* piece: already promoted if
/// the move promotes, a fresh unpromoted piece if it is a drop. Applying a move
/// therefore never has to look at what the source square held.
///
/// # Examples
///
/// ```
/// use shogi_match::{Color, Move, Piece, PieceKind, Square};
///
/// let pawn = Piece::new(PieceKind::Pawn, Color::Black);
/// let m = Move::Normal {
///     from: Square::new(6, 6).unwrap(),
///     to: Square::new(6, 5).unwrap(),
///     moved: pawn,
///     placed: pawn,
/// };
/// assert_eq!("66P 65P", m.to_string());
/// assert_eq!(Ok(m), "66P 65P".parse());
///
/// let drop: Move = "44p".parse().unwrap();
/// assert!(drop.is_drop());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        moved: Piece,
        placed: Piece,
    },
    Drop {
        to: Square,
        piece: Piece,
    },
}

impl Move {
    /// Returns the destination square.
    pub fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Returns the source square, or `None` for a drop.
    pub fn from(&self) -> Option<Square> {
        match *self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns the piece standing on the destination once the move is made.
    pub fn placed(&self) -> Piece {
        match *self {
            Move::Normal { placed, .. } => placed,
            Move::Drop { piece, .. } => piece,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// Returns true if the move turns an unpromoted piece into its promoted form.
    pub fn is_promotion(&self) -> bool {
        match *self {
            Move::Normal { moved, placed, .. } => !moved.promoted && placed.promoted,
            Move::Drop { .. } => false,
        }
    }

    /// Creates a new instance of `Move` from its text notation.
    ///
    /// A board move is two tokens, source then destination, each a square
    /// followed by a piece letter: the moving piece for the source, the
    /// resultant piece for the destination. A drop is the destination token
    /// alone.
    pub fn from_notation(s: &str) -> Option<Move> {
        let tokens = s.split(' ').collect::<Vec<_>>();

        match tokens.as_slice() {
            [dest] => {
                let (to, piece) = parse_token(dest)?;
                if piece.promoted || !piece.kind.is_hand_piece() {
                    return None;
                }

                Some(Move::Drop { to, piece })
            }
            [src, dest] => {
                let (from, moved) = parse_token(src)?;
                let (to, placed) = parse_token(dest)?;

                if from == to || moved.kind != placed.kind || moved.color != placed.color {
                    return None;
                }
                if moved.promoted && !placed.promoted {
                    return None;
                }

                Some(Move::Normal {
                    from,
                    to,
                    moved,
                    placed,
                })
            }
            _ => None,
        }
    }
}

/// Parses `<file><rank>[+]<letter>`.
fn parse_token(s: &str) -> Option<(Square, Piece)> {
    let sq = Square::from_notation(s.get(0..2)?)?;

    let mut chars = s[2..].chars();
    let (promoted, letter) = match (chars.next()?, chars.next(), chars.next()) {
        ('+', Some(c), None) => (true, c),
        (c, None, None) => (false, c),
        _ => return None,
    };

    let pc = Piece::from_sfen(letter)?;
    if !promoted {
        return Some((sq, pc));
    }
    if !pc.kind.can_promote() {
        return None;
    }

    Some((sq, pc.promote()))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Move::Normal {
                from,
                to,
                moved,
                placed,
            } => write!(f, "{from}{moved} {to}{placed}"),
            Move::Drop { to, piece } => write!(f, "{to}{piece}"),
        }
    }
}

/// Error type for parsing a move from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move notation")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s).ok_or(ParseMoveError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn from_notation() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let rook = Piece::new(PieceKind::Rook, Color::White);

        let ok_cases = [
            (
                "66P 65P",
                Move::Normal {
                    from: sq(6, 6),
                    to: sq(6, 5),
                    moved: pawn,
                    placed: pawn,
                },
            ),
            (
                "23P 22+P",
                Move::Normal {
                    from: sq(2, 3),
                    to: sq(2, 2),
                    moved: pawn,
                    placed: pawn.promote(),
                },
            ),
            (
                "71+r 78+r",
                Move::Normal {
                    from: sq(7, 1),
                    to: sq(7, 8),
                    moved: rook.promote(),
                    placed: rook.promote(),
                },
            ),
            (
                "44p",
                Move::Drop {
                    to: sq(4, 4),
                    piece: pawn.flip(),
                },
            ),
        ];
        let ng_cases = [
            "",
            "66P  65P",
            "66P 65P 64P",
            "66P 65p",
            "66P 65L",
            "66+P 65P",
            "66P 66P",
            "96P 95P",
            "66X 65X",
            "66+G 65+G",
            "44+p",
            "44k",
            "44pp",
            "4p",
        ];

        for (i, case) in ok_cases.iter().enumerate() {
            let m = Move::from_notation(case.0);
            assert_eq!(Some(case.1), m, "failed at #{i}");
            assert_eq!(case.0, m.unwrap().to_string(), "failed at #{i}");
        }

        for (i, case) in ng_cases.iter().enumerate() {
            assert!(Move::from_notation(case).is_none(), "failed at #{i}");
            assert_eq!(Err(ParseMoveError), case.parse::<Move>(), "failed at #{i}");
        }
    }

    #[test]
    fn accessors() {
        let silver = Piece::new(PieceKind::Silver, Color::White);
        let m = Move::Normal {
            from: sq(3, 5),
            to: sq(3, 6),
            moved: silver,
            placed: silver.promote(),
        };

        assert_eq!(Some(sq(3, 5)), m.from());
        assert_eq!(sq(3, 6), m.to());
        assert_eq!(silver.promote(), m.placed());
        assert!(m.is_promotion());
        assert!(!m.is_drop());

        let d = Move::Drop {
            to: sq(0, 0),
            piece: silver,
        };
        assert_eq!(None, d.from());
        assert!(d.is_drop());
        assert!(!d.is_promotion());
    }
}
