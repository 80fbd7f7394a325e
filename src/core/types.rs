use super::error::BoardError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 3;

/// プレイヤー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X, // 先手 (人間)
    O, // 後手 (コンピュータ)
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(p) => p.symbol(),
        }
    }
}

/// 盤面座標 (0-indexed, 行優先)
///
/// Only constructible inside the grid, so every `Position` is a valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All nine cells in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    pub const CORNERS: [Position; 4] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 2 },
    ];

    pub const CENTER: Position = Position { row: 1, col: 1 };

    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Position { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Cursor helpers for the terminal UI; they saturate at the edges.
    pub fn up(self) -> Self {
        Position { row: self.row.saturating_sub(1), ..self }
    }

    pub fn down(self) -> Self {
        Position { row: (self.row + 1).min(BOARD_SIZE - 1), ..self }
    }

    pub fn left(self) -> Self {
        Position { col: self.col.saturating_sub(1), ..self }
    }

    pub fn right(self) -> Self {
        Position { col: (self.col + 1).min(BOARD_SIZE - 1), ..self }
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 対局結果 (盤面から毎回導出する)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(p) => write!(f, "Player {} wins!", p),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// コンピュータの強さ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

/// `easy` / `hard` 以外の文字列
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty '{input}' (expected easy or hard)")]
pub struct ParseDifficultyError {
    pub input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}
