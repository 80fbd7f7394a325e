use super::error::{BoardError, IllegalReason};
use super::types::{Cell, GameOutcome, Player, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// 盤面 (3x3, 行優先)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.get(Position::new(row, col)?))
    }

    /// Places a mark. Rejected without side effects if the cell is taken or
    /// the game has already been decided.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if self.outcome().is_terminal() {
            return Err(BoardError::IllegalMove {
                position: pos,
                reason: IllegalReason::GameOver,
            });
        }
        if !self.get(pos).is_empty() {
            return Err(BoardError::IllegalMove {
                position: pos,
                reason: IllegalReason::Occupied,
            });
        }
        self.set(pos, Cell::Mark(player));
        Ok(())
    }

    pub fn place_at(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        self.place(Position::new(row, col)?, player)
    }

    /// Writes a cell without any rule checks (board setup only).
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// 強制的に空マスへ戻す (探索の手戻し専用)
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Cell::Empty);
    }

    /// Tentatively marks an empty cell. The mark is removed when the returned
    /// guard is dropped, on every exit path.
    pub fn hypothetical(&mut self, pos: Position, player: Player) -> Hypothetical<'_> {
        debug_assert!(self.get(pos).is_empty(), "hypothetical move on occupied {}", pos);
        self.set(pos, Cell::Mark(player));
        Hypothetical { board: self, pos }
    }

    pub fn outcome(&self) -> GameOutcome {
        crate::logic::outcome(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&p| self.is_empty_at(p))
            .collect()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Mark(player))
            .count()
    }

    /// X always opens, so equal counts mean X is to move.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    pub fn snapshot(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }
}

/// A mark placed for look-ahead; derefs to the board and undoes itself on drop.
pub struct Hypothetical<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
