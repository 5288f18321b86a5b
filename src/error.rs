/// The error type for position text parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SfenError {
    #[error("data fields are missing")]
    MissingDataFields,

    #[error("unexpected data fields after the hand")]
    ExtraDataFields,

    #[error("an illegal board state was found")]
    IllegalBoardState,

    #[error("an illegal piece type was found")]
    IllegalPieceType,

    #[error("an illegal side to move was found")]
    IllegalSideToMove,

    #[error("an illegal hand was found")]
    IllegalHand,
}

/// The error type for match operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The submitted text matches none of the current legal moves.
    #[error("move not found: {0}")]
    MoveNotFound(String),

    /// The computer's move selector picked a move that is not legal.
    #[error("the computer picked an illegal move: {0}")]
    IllegalComputerMove(String),
}
