use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::error::SfenError;
use crate::{check, movegen};
use crate::{Board, Color, Hand, Move, Piece, PieceKind, RuleSet, Square};

/// Order in which hand counters are written, per side.
const HAND_ORDER: [PieceKind; 7] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
    PieceKind::Pawn,
];

/// Represents a state of the game: the board, both hands and the side to move.
///
/// # Examples
///
/// ```
/// use shogi_match::{Position, RuleSet};
///
/// let mut pos = Position::startpos();
/// assert_eq!("lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL b ", pos.to_sfen());
///
/// let m = "66P 65P".parse().unwrap();
/// assert!(pos.legal_moves(&RuleSet::default()).contains(&m));
/// pos.apply(&m);
///
/// assert_eq!("lnsgkgsnl/1b5r1/ppppppppp/9/9/6P2/PPPPPP1PP/1R5B1/LNSGKGSNL w ", pos.to_sfen());
/// assert_eq!(Ok(pos), pos.to_sfen().parse());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    hand: Hand,
    side_to_move: Color,
}

/////////////////////////////////////////////////////////////////////////////
// Type implementation
/////////////////////////////////////////////////////////////////////////////

impl Position {
    /// Creates a position from its parts.
    pub fn new(board: Board, hand: Hand, side_to_move: Color) -> Position {
        Position {
            board,
            hand,
            side_to_move,
        }
    }

    /// Creates the standard opening position with Black to move.
    pub fn startpos() -> Position {
        Position::new(Board::standard(), Hand::default(), Color::Black)
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns a piece at the given square.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Overrides the side to move.
    pub fn set_side_to_move(&mut self, c: Color) {
        self.side_to_move = c;
    }

    /////////////////////////////////////////////////////////////////////////
    // Making moves
    /////////////////////////////////////////////////////////////////////////

    /// Applies a move and passes the turn, returning the captured piece.
    ///
    /// A drop takes its piece out of the mover's hand. A capture adds the
    /// captured piece, unpromoted, to the mover's hand. The move is not
    /// checked for legality.
    ///
    /// # Panics
    ///
    /// Panics when the move belongs to the side not to move, when a drop is
    /// made from an empty counter, or when a King is captured.
    pub fn apply(&mut self, m: &Move) -> Option<Piece> {
        let mover = m.placed().color;
        assert_eq!(self.side_to_move, mover, "{m} is not a move of {}", self.side_to_move);

        if let Move::Drop { piece, .. } = *m {
            self.hand.decrement(piece.kind, mover);
        }

        let captured = self.board.apply_move(m);
        if let Some(pc) = captured {
            self.hand.increment(pc.kind, mover);
        }

        self.side_to_move = mover.flip();
        captured
    }

    /////////////////////////////////////////////////////////////////////////
    // Move generation
    /////////////////////////////////////////////////////////////////////////

    /// Returns every pseudo-legal move of the side to move.
    pub fn pseudo_legal_moves(&self, rules: &RuleSet) -> Vec<Move> {
        movegen::pseudo_legal_moves(&self.board, &self.hand, self.side_to_move, rules)
    }

    /// Returns every legal move of the side to move. An empty list means the
    /// side to move is checkmated.
    pub fn legal_moves(&self, rules: &RuleSet) -> Vec<Move> {
        check::legal_moves(&self.board, &self.hand, self.side_to_move, rules)
    }

    /// Checks if the king of the side to move is in check.
    pub fn in_check(&self) -> bool {
        check::king_is_in_check(&self.board, self.side_to_move)
    }

    /// Counts the leaf nodes of the legal-move tree of the given depth.
    pub fn perft(&self, depth: u32, rules: &RuleSet) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(rules);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|m| {
                let mut child = *self;
                child.apply(m);
                child.perft(depth - 1, rules)
            })
            .sum()
    }

    /////////////////////////////////////////////////////////////////////////
    // SFEN serialization / deserialization
    /////////////////////////////////////////////////////////////////////////

    /// Converts the current state into the position text.
    ///
    /// Ranks are written from 0 to 8 and files from 0 to 8 within a rank.
    /// Hands follow the side-to-move letter: Black's counters then White's.
    /// Only non-zero counters are written, so with both hands empty the text
    /// ends with the space after the side-to-move letter.
    pub fn to_sfen(&self) -> String {
        let board = (0..9)
            .map(|rank| {
                let mut s = String::new();
                let mut num_spaces = 0;
                for file in 0..9 {
                    match self.board.at(file, rank) {
                        Some(pc) => {
                            if num_spaces > 0 {
                                s.push_str(&num_spaces.to_string());
                                num_spaces = 0;
                            }

                            s.push_str(&pc.to_string());
                        }
                        None => num_spaces += 1,
                    }
                }

                if num_spaces > 0 {
                    s.push_str(&num_spaces.to_string());
                }

                s
            })
            .join("/");

        let hand = Color::iter()
            .map(|c| {
                HAND_ORDER
                    .iter()
                    .map(|&kind| {
                        let pc = Piece::new(kind, c);
                        match self.hand.get(kind, c) {
                            0 => "".to_string(),
                            1 => format!("{pc}"),
                            n => format!("{n}{pc}"),
                        }
                    })
                    .join("")
            })
            .join("");

        format!("{} {} {}", board, self.side_to_move.sfen_char(), hand)
    }

    /// Parses the position text written by [`Position::to_sfen`].
    ///
    /// Parsing is strict: anything `to_sfen` would never write is rejected,
    /// so `Position::from_sfen(&p.to_sfen()) == Ok(p)`. Hand counts above
    /// the number of pieces of that kind in a set, and positions where the
    /// side that just moved left its King attacked, are rejected too.
    pub fn from_sfen(s: &str) -> Result<Position, SfenError> {
        let mut parts = s.split(' ');

        let board = parts
            .next()
            .ok_or(SfenError::MissingDataFields)
            .and_then(parse_sfen_board)?;
        let side_to_move = parts
            .next()
            .ok_or(SfenError::MissingDataFields)
            .and_then(|s| Color::from_sfen(s).ok_or(SfenError::IllegalSideToMove))?;
        let hand = parts
            .next()
            .ok_or(SfenError::MissingDataFields)
            .and_then(parse_sfen_hand)?;

        if parts.next().is_some() {
            return Err(SfenError::ExtraDataFields);
        }

        // The side that just moved cannot have left its King attacked.
        if check::king_is_in_check(&board, side_to_move.flip()) {
            return Err(SfenError::IllegalBoardState);
        }

        Ok(Position::new(board, hand, side_to_move))
    }
}

fn parse_sfen_board(s: &str) -> Result<Board, SfenError> {
    let rows = s.split('/').collect::<Vec<_>>();
    if rows.len() != 9 {
        return Err(SfenError::IllegalBoardState);
    }

    let mut board = Board::empty();

    for (rank, row) in rows.iter().enumerate() {
        let mut file = 0;
        let mut is_promoted = false;
        let mut after_digit = false;

        for c in row.chars() {
            match c {
                '+' => {
                    if is_promoted {
                        return Err(SfenError::IllegalPieceType);
                    }
                    is_promoted = true;
                }
                n if n.is_ascii_digit() => {
                    let n = n.to_digit(10).unwrap_or(0) as u8;
                    if n == 0 || after_digit || is_promoted || file + n > 9 {
                        return Err(SfenError::IllegalBoardState);
                    }

                    file += n;
                    after_digit = true;
                }
                c => {
                    let mut pc = Piece::from_sfen(c).ok_or(SfenError::IllegalPieceType)?;
                    if file >= 9 {
                        return Err(SfenError::IllegalBoardState);
                    }

                    if is_promoted {
                        if !pc.kind.can_promote() {
                            return Err(SfenError::IllegalPieceType);
                        }
                        pc = pc.promote();
                    }

                    board.place(file, rank as u8, pc);
                    file += 1;
                    is_promoted = false;
                    after_digit = false;
                }
            }
        }

        if file != 9 || is_promoted {
            return Err(SfenError::IllegalBoardState);
        }
    }

    for c in Color::iter() {
        let kings = board
            .pieces(c)
            .filter(|(_, pc)| pc.kind == PieceKind::King)
            .count();
        if kings > 1 {
            return Err(SfenError::IllegalBoardState);
        }
    }

    Ok(board)
}

fn parse_sfen_hand(s: &str) -> Result<Hand, SfenError> {
    let mut hand = Hand::default();

    // Position of the last counter written, to enforce the canonical order.
    let mut last: Option<(usize, usize)> = None;
    let mut count = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if count.is_empty() && c == '0' {
                return Err(SfenError::IllegalHand);
            }
            count.push(c);
            continue;
        }

        let pc = Piece::from_sfen(c).ok_or(SfenError::IllegalPieceType)?;
        let order = HAND_ORDER
            .iter()
            .position(|&kind| kind == pc.kind)
            .ok_or(SfenError::IllegalHand)?;

        let key = (pc.color.index(), order);
        if last.map_or(false, |last| last >= key) {
            return Err(SfenError::IllegalHand);
        }
        last = Some(key);

        let n = if count.is_empty() {
            1
        } else {
            match count.parse::<u8>() {
                Ok(n) if n >= 2 && n <= pc.kind.supply() => n,
                _ => return Err(SfenError::IllegalHand),
            }
        };
        count.clear();

        hand.set(pc.kind, pc.color, n);
    }

    if !count.is_empty() {
        return Err(SfenError::IllegalHand);
    }

    Ok(hand)
}

/////////////////////////////////////////////////////////////////////////////
// Trait implementations
/////////////////////////////////////////////////////////////////////////////

impl Default for Position {
    fn default() -> Position {
        Position::startpos()
    }
}

impl FromStr for Position {
    type Err = SfenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_sfen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;

        let fmt_hand = |color: Color, f: &mut fmt::Formatter| -> fmt::Result {
            for kind in HAND_ORDER {
                let n = self.hand.get(kind, color);

                if n > 0 {
                    write!(f, "{}{n} ", Piece::new(kind, color))?;
                }
            }
            Ok(())
        };

        for c in Color::iter() {
            write!(f, "Hand ({c}): ")?;
            fmt_hand(c, f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
