//! A rules engine for shogi matches.
//!
//! `shogi_match` generates the exact set of legal moves of a position,
//! including drops and promotions, detects check and checkmate, and runs the
//! turn-taking state machine of a match between two players. Positions can be
//! serialized to / deserialized from an SFEN-like text, and moves have a
//! canonical text notation that a transport layer can exchange with clients.
//!
//! Coordinates are zero-indexed `(file, rank)` pairs. White (gote, lower-case
//! letters) starts on ranks 0–2, Black (sente, upper-case letters) on ranks 6–8.
//!
//! # Examples
//!
//! ```
//! use shogi_match::{Color, Match, MatchState, Player};
//!
//! let mut game = Match::new(Player::human(Color::Black), Player::human(Color::White));
//! assert_eq!("lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL b ", game.serialize_board_state());
//!
//! // Moves are submitted in their text notation: source then destination,
//! // each a square followed by the piece letter.
//! game.do_turn("66P 65P").unwrap();
//! game.do_turn("22p 23p").unwrap();
//!
//! // The bishop captures and promotes; the captured bishop goes to Black's hand.
//! let state = game.do_turn("77B 11+B").unwrap();
//! assert_eq!(MatchState::AwaitingMove(Color::White), state);
//! assert_eq!("lnsgkgsnl/1+B5r1/pp1pppppp/2p6/9/6P2/PPPPPP1PP/1R7/LNSGKGSNL w B", game.serialize_board_state());
//! ```

pub mod board;
pub mod check;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod movegen;
pub mod moves;
pub mod opponent;
pub mod piece;
pub mod piece_kind;
pub mod player;
pub mod position;
pub mod rules;
pub mod square;
pub mod vs_computer;

pub use self::board::Board;
pub use self::color::Color;
pub use self::config::PlayConfig;
pub use self::error::{MatchError, SfenError};
pub use self::game::{Match, MatchState};
pub use self::hand::Hand;
pub use self::moves::{Move, ParseMoveError};
pub use self::piece::Piece;
pub use self::piece_kind::{PieceKind, Promotion};
pub use self::player::{Player, PlayerKind};
pub use self::position::Position;
pub use self::rules::RuleSet;
pub use self::square::{ParseSquareError, Square};
