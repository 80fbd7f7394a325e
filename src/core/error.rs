use super::types::{Player, Position};
use derive_more::{Display, Error};

/// 着手が拒否された理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    #[display("cell is occupied")]
    Occupied,
    #[display("game is already over")]
    GameOver,
    #[display("it is not {_0}'s turn")]
    NotYourTurn(Player),
}

/// Errors raised by the board model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Recoverable: the move is rejected and the board is left untouched.
    #[display("illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalReason,
    },
    /// Caller bug: coordinates outside the 3x3 grid.
    #[display("position ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },
}
