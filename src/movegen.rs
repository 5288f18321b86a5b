//! Pseudo-legal move generation.
//!
//! Moves produced here obey the movement, promotion and drop rules of each
//! piece but may leave the mover's own King attacked; [`crate::check`] removes
//! those. Generation is deterministic: squares are visited in
//! [`Square::iter`] order and hand kinds in [`PieceKind::HAND_KINDS`] order.

use crate::piece_kind::Promotion;
use crate::{Board, Color, Hand, Move, Piece, PieceKind, RuleSet, Square};

/// Where the moving piece comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A piece standing on the board.
    Board(Square),
    /// A piece of the given kind taken from the hand.
    Hand(PieceKind),
}

/// Generates the pseudo-legal moves of one piece.
///
/// # Panics
///
/// Panics when the source square is empty or holds an opponent's piece, or
/// when asked to drop a King.
///
/// # Examples
///
/// ```
/// use shogi_match::movegen::{self, Origin};
/// use shogi_match::{Board, Color, Hand, RuleSet, Square};
///
/// let board = Board::standard();
/// let moves = movegen::generate(
///     &board,
///     &Hand::default(),
///     Color::Black,
///     Origin::Board(Square::new(6, 6).unwrap()),
///     &RuleSet::default(),
/// );
/// assert_eq!(vec!["66P 65P".to_string()], moves.iter().map(|m| m.to_string()).collect::<Vec<_>>());
/// ```
pub fn generate(
    board: &Board,
    hand: &Hand,
    color: Color,
    origin: Origin,
    rules: &RuleSet,
) -> Vec<Move> {
    match origin {
        Origin::Board(from) => board_moves(board, from, color),
        Origin::Hand(kind) => drop_moves(board, hand, kind, color, rules),
    }
}

/// Generates every pseudo-legal move of the given side: board moves first,
/// then drops.
pub fn pseudo_legal_moves(board: &Board, hand: &Hand, color: Color, rules: &RuleSet) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, _) in board.pieces(color) {
        moves.extend(board_moves(board, from, color));
    }
    for kind in hand.droppable(color) {
        moves.extend(drop_moves(board, hand, kind, color, rules));
    }

    moves
}

/// Generates the board moves of the piece on `from`, with a promoting and a
/// non-promoting variant per destination as the promotion rules allow.
///
/// # Panics
///
/// Panics when `from` is empty or holds a piece of the other side.
pub fn board_moves(board: &Board, from: Square, color: Color) -> Vec<Move> {
    let moved = match board.piece_at(from) {
        Some(pc) if pc.color == color => pc,
        Some(pc) => panic!("{pc} on {from} does not belong to {color}"),
        None => panic!("no piece on {from}"),
    };

    let mut moves = Vec::new();
    for to in destinations(board, from, moved) {
        let promotion = moved.promotion(from, to);

        if promotion != Promotion::Mandatory {
            moves.push(Move::Normal {
                from,
                to,
                moved,
                placed: moved,
            });
        }
        if promotion != Promotion::Never {
            moves.push(Move::Normal {
                from,
                to,
                moved,
                placed: moved.promote(),
            });
        }
    }

    moves
}

/// Generates the drops of the given kind from the side's hand.
///
/// Returns nothing when the side holds no piece of that kind.
///
/// # Panics
///
/// Panics when `kind` is a King.
pub fn drop_moves(
    board: &Board,
    hand: &Hand,
    kind: PieceKind,
    color: Color,
    rules: &RuleSet,
) -> Vec<Move> {
    assert!(kind.is_hand_piece(), "a King cannot be dropped");

    if !hand.has(kind, color) {
        return Vec::new();
    }

    let piece = Piece::new(kind, color);
    board
        .empty_squares()
        .filter(|&to| piece.is_droppable_at(to, rules.restrict_lance_drops))
        .filter(|&to| kind != PieceKind::Pawn || !board.has_pawn_on_file(color, to.file()))
        .map(|to| Move::Drop { to, piece })
        .collect()
}

/// Returns the squares the piece on `from` can reach: every step offset that
/// stays on the board, and every ray walked up to the first occupant. Squares
/// held by the piece's own side are excluded.
pub fn destinations(board: &Board, from: Square, pc: Piece) -> Vec<Square> {
    let movement = pc.movement();
    let can_land = |to: Square| board.piece_at(to).map_or(true, |other| other.color != pc.color);

    let mut dests = Vec::new();

    for &offset in movement.steps {
        let (df, dr) = pc.color.orient(offset);
        if let Some(to) = from.shift(df, dr).filter(|&to| can_land(to)) {
            dests.push(to);
        }
    }

    for &dir in movement.rays {
        let (df, dr) = pc.color.orient(dir);
        let mut cur = from;

        while let Some(to) = cur.shift(df, dr) {
            if can_land(to) {
                dests.push(to);
            }
            if board.piece_at(to).is_some() {
                break;
            }
            cur = to;
        }
    }

    dests
}
