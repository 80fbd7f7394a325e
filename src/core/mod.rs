pub mod board;
pub mod error;
pub mod setup;
pub mod types;

pub use board::{Board, Hypothetical};
pub use error::{BoardError, IllegalReason};
pub use setup::board_from_strings;
pub use types::{
    Cell, Difficulty, GameOutcome, ParseDifficultyError, Player, Position, BOARD_SIZE,
};
