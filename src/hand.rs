use crate::{Color, PieceKind};

/// Manages the number of each piece kind held by each player.
///
/// Counters are keyed directly by `(PieceKind, Color)`; a held piece has no
/// identity of its own and is always unpromoted.
///
/// # Examples
///
/// ```
/// use shogi_match::{Color, Hand, PieceKind};
///
/// let mut hand = Hand::default();
/// hand.increment(PieceKind::Pawn, Color::Black);
/// hand.increment(PieceKind::Pawn, Color::Black);
/// hand.decrement(PieceKind::Pawn, Color::Black);
///
/// assert_eq!(1, hand.get(PieceKind::Pawn, Color::Black));
/// assert_eq!(0, hand.get(PieceKind::Pawn, Color::White));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    inner: [[u8; 7]; 2],
}

impl Hand {
    /// Returns the number of pieces of the given kind held by the given color.
    ///
    /// # Panics
    ///
    /// Panics when asked about a King.
    pub fn get(&self, kind: PieceKind, color: Color) -> u8 {
        self.inner[color.index()][kind.hand_index()]
    }

    /// Sets the number of pieces of the given kind held by the given color.
    pub fn set(&mut self, kind: PieceKind, color: Color, num: u8) {
        self.inner[color.index()][kind.hand_index()] = num;
    }

    /// Increments the number of pieces of the given kind held by the given color.
    pub fn increment(&mut self, kind: PieceKind, color: Color) {
        self.inner[color.index()][kind.hand_index()] += 1
    }

    /// Decrements the number of pieces of the given kind held by the given color.
    ///
    /// # Panics
    ///
    /// Panics when the counter is already zero.
    pub fn decrement(&mut self, kind: PieceKind, color: Color) {
        let count = &mut self.inner[color.index()][kind.hand_index()];
        assert!(*count > 0, "no {kind:?} in the hand of {color}");
        *count -= 1
    }

    /// Returns true if the given color holds at least one piece of the given kind.
    pub fn has(&self, kind: PieceKind, color: Color) -> bool {
        self.get(kind, color) > 0
    }

    /// Returns the piece kinds the given color can drop, in index order.
    pub fn droppable(&self, color: Color) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::HAND_KINDS
            .into_iter()
            .filter(move |&kind| self.has(kind, color))
    }

    /// Returns true if neither player holds anything.
    pub fn is_empty(&self) -> bool {
        self.inner.iter().flatten().all(|&n| n == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set() {
        let mut hand: Hand = Default::default();

        for kind in PieceKind::HAND_KINDS {
            for (i, color) in Color::iter().enumerate() {
                hand.set(kind, color, i as u8 + 1);
            }
        }

        for kind in PieceKind::HAND_KINDS {
            assert_eq!(1, hand.get(kind, Color::Black));
            assert_eq!(2, hand.get(kind, Color::White));
        }
    }

    #[test]
    fn increment_decrement() {
        let mut hand: Hand = Default::default();

        hand.increment(PieceKind::Rook, Color::White);
        hand.increment(PieceKind::Rook, Color::White);
        assert_eq!(2, hand.get(PieceKind::Rook, Color::White));
        assert_eq!(0, hand.get(PieceKind::Rook, Color::Black));

        hand.decrement(PieceKind::Rook, Color::White);
        assert_eq!(1, hand.get(PieceKind::Rook, Color::White));
    }

    #[test]
    #[should_panic]
    fn decrement_empty() {
        let mut hand: Hand = Default::default();
        hand.decrement(PieceKind::Gold, Color::Black);
    }

    #[test]
    #[should_panic]
    fn king_in_hand() {
        let mut hand: Hand = Default::default();
        hand.increment(PieceKind::King, Color::Black);
    }

    #[test]
    fn droppable() {
        let mut hand: Hand = Default::default();
        hand.set(PieceKind::Silver, Color::Black, 1);
        hand.set(PieceKind::Pawn, Color::Black, 3);
        hand.set(PieceKind::Bishop, Color::White, 1);

        assert_eq!(
            vec![PieceKind::Pawn, PieceKind::Silver],
            hand.droppable(Color::Black).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![PieceKind::Bishop],
            hand.droppable(Color::White).collect::<Vec<_>>()
        );
    }

    #[test]
    fn is_empty() {
        let mut hand: Hand = Default::default();
        assert!(hand.is_empty());

        hand.set(PieceKind::Knight, Color::White, 2);
        assert!(!hand.is_empty());

        hand.decrement(PieceKind::Knight, Color::White);
        hand.decrement(PieceKind::Knight, Color::White);
        assert!(hand.is_empty());
    }
}
