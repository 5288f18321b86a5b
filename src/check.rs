//! Check detection and the legality filter.
//!
//! Every test runs on a copy of the board, so the board passed in is never
//! modified.

use log::trace;

use crate::movegen::{self, destinations};
use crate::{Board, Color, Hand, Move, PieceKind, RuleSet, Square};

/// Returns true if any piece of `by` can move to `sq`.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, pc)| destinations(board, from, pc).contains(&sq))
}

/// Returns true if the King of the given side is attacked.
///
/// A side without a King on the board is never in check.
pub fn king_is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.flip()),
        None => false,
    }
}

/// Returns true if playing `m` would leave the mover's King attacked.
pub fn leaves_king_in_check(board: &Board, m: &Move, color: Color) -> bool {
    let mut hypothetical = *board;
    hypothetical.apply_move(m);

    king_is_in_check(&hypothetical, color)
}

/// Keeps the moves that do not leave the mover's King in check, in their
/// original order.
pub fn filter_checks(board: &Board, moves: Vec<Move>, color: Color) -> Vec<Move> {
    moves
        .into_iter()
        .filter(|m| {
            let rejected = leaves_king_in_check(board, m, color);
            if rejected {
                trace!("{m} leaves the {color} king in check");
            }
            !rejected
        })
        .collect()
}

/// Returns true if `m` drops a Pawn that checkmates the opponent.
///
/// A Pawn gives check from the adjacent square, so no drop can interpose;
/// only the opponent's board moves are considered as replies.
pub fn is_pawn_drop_mate(board: &Board, m: &Move, color: Color) -> bool {
    let Move::Drop { piece, .. } = *m else {
        return false;
    };
    if piece.kind != PieceKind::Pawn {
        return false;
    }

    let mut hypothetical = *board;
    hypothetical.apply_move(m);

    let opponent = color.flip();
    if !king_is_in_check(&hypothetical, opponent) {
        return false;
    }

    let mated = hypothetical.pieces(opponent).all(|(from, _)| {
        let replies = movegen::board_moves(&hypothetical, from, opponent);
        filter_checks(&hypothetical, replies, opponent).is_empty()
    });
    mated
}

/// Generates every legal move of the given side.
///
/// An empty result means the side is checkmated: there is no stalemate and
/// passing is not allowed.
pub fn legal_moves(board: &Board, hand: &Hand, color: Color, rules: &RuleSet) -> Vec<Move> {
    let pseudo = movegen::pseudo_legal_moves(board, hand, color, rules);
    let mut moves = filter_checks(board, pseudo, color);

    if rules.forbid_pawn_drop_mate {
        moves.retain(|m| {
            let mate = is_pawn_drop_mate(board, m, color);
            if mate {
                trace!("{m} is a checkmating pawn drop");
            }
            !mate
        });
    }

    moves
}
