//! A human-versus-computer session without any transport attached.
//!
//! The session answers every human move with a computer move and reports the
//! resulting state in the shape a client needs: the position text plus the
//! human's legal moves, or the outcome.

use log::{debug, info};

use crate::error::MatchError;
use crate::game::MatchState;
use crate::opponent::MoveSelector;
use crate::{Color, Match, Player, Position, RuleSet};

/// What the human gets to see after each step of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The human is to move.
    State { board: String, moves: Vec<String> },
    /// The computer has no legal move left.
    HumanWins { board: String },
    /// The human has no legal move left.
    HumanLoses { board: String },
}

/// A match between a human and a computer opponent.
///
/// # Examples
///
/// ```
/// use shogi_match::opponent::RandomSelector;
/// use shogi_match::vs_computer::{Update, VsComputer};
/// use shogi_match::{Color, RuleSet};
///
/// let mut session =
///     VsComputer::new(Color::Black, RandomSelector::from_seed(3), RuleSet::default()).unwrap();
///
/// let Update::State { moves, .. } = session.snapshot() else { panic!("the match has just started") };
/// assert!(moves.contains(&"66P 65P".to_string()));
///
/// // The computer replies at once, so it is the human's turn again.
/// let update = session.submit("66P 65P").unwrap();
/// assert!(matches!(update, Update::State { .. }));
/// assert_eq!(2, session.game().history().len());
/// ```
#[derive(Debug)]
pub struct VsComputer<S: MoveSelector> {
    game: Match,
    human: Color,
    selector: S,
}

impl<S: MoveSelector> VsComputer<S> {
    /// Starts a session from the standard opening. Black moves first; when
    /// that is the computer, it plays right away.
    pub fn new(human_side: Color, selector: S, rules: RuleSet) -> Result<VsComputer<S>, MatchError> {
        VsComputer::with_position(human_side, selector, Position::startpos(), rules)
    }

    /// Starts a session from an arbitrary position.
    ///
    /// # Panics
    ///
    /// Panics when the King of the side not to move is attacked.
    pub fn with_position(
        human_side: Color,
        selector: S,
        position: Position,
        rules: RuleSet,
    ) -> Result<VsComputer<S>, MatchError> {
        let human = Player::human(human_side);
        let computer = Player::computer(human_side.flip());

        let mut session = VsComputer {
            game: Match::with_position(human, computer, position, rules),
            human: human_side,
            selector,
        };
        info!("new session, human plays {human_side}");

        if session.game.player_to_move() == computer {
            session.computer_turn()?;
        }

        Ok(session)
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn human_side(&self) -> Color {
        self.human
    }

    /// Reports the current state.
    pub fn snapshot(&self) -> Update {
        let board = self.game.serialize_board_state();

        match self.game.winner() {
            Some(winner) if winner == self.human => Update::HumanWins { board },
            Some(_) => Update::HumanLoses { board },
            None => Update::State {
                board,
                moves: Match::serialize_moves(self.game.legal_moves()),
            },
        }
    }

    /// Plays the human move given in text notation and lets the computer
    /// answer.
    ///
    /// An unknown move fails with [`MatchError::MoveNotFound`] and leaves the
    /// session as it was. When the selector answers with a move that is not
    /// legal, the human move stays played and the call fails with
    /// [`MatchError::IllegalComputerMove`].
    pub fn submit(&mut self, text: &str) -> Result<Update, MatchError> {
        if self.game.player_to_move().color != self.human {
            return Err(MatchError::MoveNotFound(text.to_string()));
        }

        if let MatchState::AwaitingMove(_) = self.game.do_turn(text)? {
            self.computer_turn()?;
        }

        Ok(self.snapshot())
    }

    fn computer_turn(&mut self) -> Result<(), MatchError> {
        if let Some(m) = self.selector.select(self.game.legal_moves()) {
            debug!("computer plays {m}");
            self.game
                .do_move(&m)
                .map_err(|_| MatchError::IllegalComputerMove(m.to_string()))?;
        }

        Ok(())
    }
}
