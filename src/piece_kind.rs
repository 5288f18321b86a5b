use std::fmt;

/// Represents a kind of piece.
///
/// Promotion does not change the kind of a piece; it is carried separately by
/// [`Piece::promoted`](crate::Piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Lance,
    Knight,
    Silver,
    Gold,
    Bishop,
    Rook,
    King,
}

/// How a piece moves: single steps to fixed offsets plus unbounded rays.
///
/// Offsets are written for White, the side advancing toward increasing rank.
/// [`Color::orient`](crate::Color::orient) mirrors them for Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub steps: &'static [(i8, i8)],
    pub rays: &'static [(i8, i8)],
}

/// Whether a particular board move may or must promote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// Only the non-promoting move exists.
    Never,
    /// Both the promoting and the non-promoting move exist.
    Optional,
    /// Only the promoting move exists.
    Mandatory,
}

const PAWN_STEPS: &[(i8, i8)] = &[(0, 1)];
const KNIGHT_STEPS: &[(i8, i8)] = &[(1, 2), (-1, 2)];
const SILVER_STEPS: &[(i8, i8)] = &[(0, 1), (1, 1), (-1, 1), (-1, -1), (1, -1)];
const GOLD_STEPS: &[(i8, i8)] = &[(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, 1)];
const KING_STEPS: &[(i8, i8)] = &[
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const ORTHOGONAL: &[(i8, i8)] = &[(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: &[(i8, i8)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
const LANCE_RAYS: &[(i8, i8)] = &[(0, 1)];

const NONE: &[(i8, i8)] = &[];

impl PieceKind {
    /// Piece kinds that can be held in hand, in their array-index order.
    pub const HAND_KINDS: [PieceKind; 7] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
    ];

    /// Returns an iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = PieceKind> {
        [
            PieceKind::Pawn,
            PieceKind::Lance,
            PieceKind::Knight,
            PieceKind::Silver,
            PieceKind::Gold,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::King,
        ]
        .into_iter()
    }

    /// Creates a new instance of `PieceKind` from its lower-case letter.
    pub fn from_char(c: char) -> Option<PieceKind> {
        Some(match c {
            'p' => PieceKind::Pawn,
            'l' => PieceKind::Lance,
            'n' => PieceKind::Knight,
            's' => PieceKind::Silver,
            'g' => PieceKind::Gold,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'k' => PieceKind::King,
            _ => return None,
        })
    }

    /// Returns the lower-case letter of this kind.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Lance => 'l',
            PieceKind::Knight => 'n',
            PieceKind::Silver => 's',
            PieceKind::Gold => 'g',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if a piece of this kind has a promoted form.
    pub fn can_promote(self) -> bool {
        !matches!(self, PieceKind::Gold | PieceKind::King)
    }

    /// Returns true if a piece of this kind can be held in hand.
    pub fn is_hand_piece(self) -> bool {
        self != PieceKind::King
    }

    /// Returns the index of this kind in [`PieceKind::HAND_KINDS`].
    ///
    /// # Panics
    ///
    /// Panics when called on `King`, which is never held in hand.
    pub fn hand_index(self) -> usize {
        assert!(self.is_hand_piece(), "a King cannot be held in hand");
        self as usize
    }

    /// Number of pieces of this kind in a full set, both sides together.
    pub fn supply(self) -> u8 {
        match self {
            PieceKind::Pawn => 18,
            PieceKind::Lance | PieceKind::Knight | PieceKind::Silver | PieceKind::Gold => 4,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::King => 2,
        }
    }

    /// Returns the movement rule of this kind for the given promotion state.
    pub fn movement(self, promoted: bool) -> Movement {
        if promoted {
            return match self {
                PieceKind::Pawn | PieceKind::Lance | PieceKind::Knight | PieceKind::Silver => {
                    PieceKind::Gold.movement(false)
                }
                PieceKind::Bishop => Movement {
                    steps: ORTHOGONAL,
                    rays: DIAGONAL,
                },
                PieceKind::Rook => Movement {
                    steps: DIAGONAL,
                    rays: ORTHOGONAL,
                },
                PieceKind::Gold | PieceKind::King => {
                    panic!("{self:?} has no promoted form")
                }
            };
        }

        match self {
            PieceKind::Pawn => Movement {
                steps: PAWN_STEPS,
                rays: NONE,
            },
            PieceKind::Lance => Movement {
                steps: NONE,
                rays: LANCE_RAYS,
            },
            PieceKind::Knight => Movement {
                steps: KNIGHT_STEPS,
                rays: NONE,
            },
            PieceKind::Silver => Movement {
                steps: SILVER_STEPS,
                rays: NONE,
            },
            PieceKind::Gold => Movement {
                steps: GOLD_STEPS,
                rays: NONE,
            },
            PieceKind::Bishop => Movement {
                steps: NONE,
                rays: DIAGONAL,
            },
            PieceKind::Rook => Movement {
                steps: NONE,
                rays: ORTHOGONAL,
            },
            PieceKind::King => Movement {
                steps: KING_STEPS,
                rays: NONE,
            },
        }
    }

    /// Number of ranks, counted from the far edge, an unpromoted piece of this
    /// kind may not end its move on without promoting.
    ///
    /// A Pawn or Lance on the last rank, or a Knight on the last two, would
    /// never be able to move again. Bishop and Rook are forced on the last
    /// rank as well.
    pub fn forced_promotion_ranks(self) -> u8 {
        match self {
            PieceKind::Pawn | PieceKind::Lance | PieceKind::Bishop | PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Silver | PieceKind::Gold | PieceKind::King => 0,
        }
    }

    /// Number of ranks, counted from the far edge, on which a piece of this
    /// kind may never be dropped.
    pub fn dead_drop_ranks(self, restrict_lance: bool) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Lance if restrict_lance => 1,
            PieceKind::Knight => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
