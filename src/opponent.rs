//! Move selection for the computer side.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Move;

/// Picks one move out of the legal moves of the side to move.
pub trait MoveSelector {
    /// Returns the chosen move, or `None` when `moves` is empty.
    fn select(&mut self, moves: &[Move]) -> Option<Move>;
}

/// Chooses uniformly at random among the legal moves.
///
/// # Examples
///
/// ```
/// use shogi_match::opponent::{MoveSelector, RandomSelector};
/// use shogi_match::{Position, RuleSet};
///
/// let moves = Position::startpos().legal_moves(&RuleSet::default());
/// let mut a = RandomSelector::from_seed(7);
/// let mut b = RandomSelector::from_seed(7);
///
/// let chosen = a.select(&moves);
/// assert!(chosen.is_some());
/// assert_eq!(chosen, b.select(&moves));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> RandomSelector<R> {
        RandomSelector { rng }
    }
}

impl RandomSelector<StdRng> {
    /// Creates a reproducible selector.
    pub fn from_seed(seed: u64) -> RandomSelector<StdRng> {
        RandomSelector::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> RandomSelector<StdRng> {
        RandomSelector::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, moves: &[Move]) -> Option<Move> {
        (**self).select(moves)
    }
}
