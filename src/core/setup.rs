use super::board::Board;
use super::error::BoardError;
use super::types::{Cell, Player, Position, BOARD_SIZE};

/// 文字列配列から盤面を組み立てる
///
/// Each row holds three whitespace-separated tokens: `X`, `O` or `.`.
/// Marks are written directly, so positions that could not arise in play
/// (e.g. two winning lines) can still be built for tests.
pub fn board_from_strings(rows: [&str; BOARD_SIZE]) -> Result<Board, BoardError> {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() > BOARD_SIZE {
            return Err(BoardError::OutOfRange {
                row,
                col: tokens.len() - 1,
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            let pos = Position::new(row, col)?;
            board.set(pos, parse_cell(token));
        }
    }
    Ok(board)
}

fn parse_cell(token: &str) -> Cell {
    match token {
        "X" | "x" => Cell::Mark(Player::X),
        "O" | "o" => Cell::Mark(Player::O),
        _ => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_from_strings() {
        let board = board_from_strings(["X X .", "O O .", ". . ."]).unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(
            board.get(Position::new(1, 0).unwrap()),
            Cell::Mark(Player::O)
        );
        assert!(board.is_empty_at(Position::new(0, 2).unwrap()));
    }

    #[test]
    fn test_setup_rejects_wide_row() {
        assert_eq!(
            board_from_strings(["X X . O", ". . .", ". . ."]),
            Err(BoardError::OutOfRange { row: 0, col: 3 })
        );
    }
}
