pub mod alpha_beta;
pub mod minimax;
pub mod random;

pub use alpha_beta::{alpha_beta, AlphaBetaAI};
pub use minimax::{minimax, MinimaxAI};
pub use random::RandomAI;

use crate::core::{Board, GameOutcome, Player};
use serde::{Deserialize, Serialize};

/// O の勝ち
pub const O_WIN: i32 = 1;
/// X の勝ち
pub const X_WIN: i32 = -1;
pub const DRAW: i32 = 0;

/// Node and cutoff counters for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Score of a decided position from O's point of view; `None` while in play.
pub fn terminal_score(board: &Board) -> Option<i32> {
    match board.outcome() {
        GameOutcome::Win(Player::O) => Some(O_WIN),
        GameOutcome::Win(Player::X) => Some(X_WIN),
        GameOutcome::Draw => Some(DRAW),
        GameOutcome::InProgress => None,
    }
}

/// O maximizes, X minimizes.
pub fn maximizes(player: Player) -> bool {
    player == Player::O
}

fn mover(is_maximizing: bool) -> Player {
    if is_maximizing {
        Player::O
    } else {
        Player::X
    }
}
