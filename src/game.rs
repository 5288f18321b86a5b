//! The turn-taking state machine of a match.

use log::{debug, info, warn};

use crate::check;
use crate::error::MatchError;
use crate::{Color, Move, Player, Position, RuleSet};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    /// The given side has to move.
    AwaitingMove(Color),
    /// The side to move has no legal move left.
    Checkmate { winner: Color },
}

/// A match between two players.
///
/// The match owns the position and caches the legal moves of the side to move;
/// a submitted move is accepted only if its text equals the text of one of the
/// cached moves.
///
/// # Examples
///
/// ```
/// use shogi_match::{Color, Match, MatchState, Player};
///
/// let mut game = Match::new(Player::human(Color::Black), Player::computer(Color::White));
/// assert_eq!(30, game.legal_moves().len());
///
/// let state = game.do_turn("66P 65P").unwrap();
/// assert_eq!(MatchState::AwaitingMove(Color::White), state);
/// assert_eq!(Color::White, game.player_to_move().color);
///
/// assert!(game.do_turn("66P 65P").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    position: Position,
    rules: RuleSet,
    legal_moves: Vec<Move>,
    history: Vec<Move>,
    state: MatchState,
}

impl Match {
    /// Creates a match from the standard opening with the standard rules.
    /// `first` makes the first move.
    ///
    /// # Panics
    ///
    /// Panics when both players play the same side.
    pub fn new(first: Player, second: Player) -> Match {
        Match::with_rules(first, second, RuleSet::default())
    }

    /// Creates a match from the standard opening with the given rules.
    pub fn with_rules(first: Player, second: Player, rules: RuleSet) -> Match {
        let mut position = Position::startpos();
        position.set_side_to_move(first.color);

        Match::with_position(first, second, position, rules)
    }

    /// Creates a match from an arbitrary position. The side to move is taken
    /// from the position.
    ///
    /// # Panics
    ///
    /// Panics when both players play the same side, or when the King of the
    /// side not to move is attacked.
    pub fn with_position(first: Player, second: Player, position: Position, rules: RuleSet) -> Match {
        assert_ne!(first.color, second.color, "both players play {}", first.color);

        let waiting = position.side_to_move().flip();
        assert!(
            !check::king_is_in_check(position.board(), waiting),
            "the {waiting} king is attacked while {} is to move",
            position.side_to_move()
        );

        let mut players = [first, second];
        players.sort_by_key(|p| p.color.index());

        let mut game = Match {
            players,
            position,
            rules,
            legal_moves: Vec::new(),
            history: Vec::new(),
            state: MatchState::AwaitingMove(position.side_to_move()),
        };
        game.refresh();
        game
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the winning side once the match is over.
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            MatchState::Checkmate { winner } => Some(winner),
            MatchState::AwaitingMove(_) => None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player of the given side.
    pub fn player(&self, c: Color) -> Player {
        self.players[c.index()]
    }

    /// Returns the player who must make the next move.
    pub fn player_to_move(&self) -> Player {
        self.player(self.position.side_to_move())
    }

    /// Checks if the king of the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.position.in_check()
    }

    /// Returns the legal moves of the side to move.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /////////////////////////////////////////////////////////////////////////
    // Turn taking
    /////////////////////////////////////////////////////////////////////////

    /// Converts moves into their text notation.
    pub fn serialize_moves(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    /// Returns the position text of the current state.
    pub fn serialize_board_state(&self) -> String {
        self.position.to_sfen()
    }

    /// Plays the legal move whose text notation equals `text`, then passes the
    /// turn to the other side.
    ///
    /// Fails with [`MatchError::MoveNotFound`] when no legal move matches,
    /// which is always the case once the match is over. The match is left
    /// untouched on failure.
    pub fn do_turn(&mut self, text: &str) -> Result<MatchState, MatchError> {
        let found = self.legal_moves.iter().find(|m| m.to_string() == text).copied();

        match found {
            Some(m) => Ok(self.play(m)),
            None => {
                warn!("move not found: {text:?}");
                Err(MatchError::MoveNotFound(text.to_string()))
            }
        }
    }

    /// Plays the given move if it is one of the legal moves of the side to
    /// move. Otherwise fails like [`Match::do_turn`].
    pub fn do_move(&mut self, m: &Move) -> Result<MatchState, MatchError> {
        if !self.legal_moves.contains(m) {
            warn!("move not found: {m}");
            return Err(MatchError::MoveNotFound(m.to_string()));
        }

        Ok(self.play(*m))
    }

    fn play(&mut self, m: Move) -> MatchState {
        let mover = self.position.side_to_move();
        self.position.apply(&m);
        self.history.push(m);
        self.refresh();

        debug!(
            "{mover} played {m}, {} has {} legal moves",
            self.position.side_to_move(),
            self.legal_moves.len()
        );

        self.state
    }

    /// Recomputes the legal moves of the side to move and the state.
    fn refresh(&mut self) {
        let side = self.position.side_to_move();
        self.legal_moves = self.position.legal_moves(&self.rules);

        self.state = if self.legal_moves.is_empty() {
            info!("{side} is checkmated, {} wins", side.flip());
            MatchState::Checkmate { winner: side.flip() }
        } else {
            MatchState::AwaitingMove(side)
        };
    }
}
