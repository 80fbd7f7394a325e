use crate::core::{Board, Cell, GameOutcome, Player, Position};

/// 勝利ラインの列挙 (行 上→下, 列 左→右, 対角線 2本)
pub const LINES: [[Position; 3]; 8] = {
    let p = Position::ALL;
    [
        [p[0], p[1], p[2]],
        [p[3], p[4], p[5]],
        [p[6], p[7], p[8]],
        [p[0], p[3], p[6]],
        [p[1], p[4], p[7]],
        [p[2], p[5], p[8]],
        [p[0], p[4], p[8]],
        [p[2], p[4], p[6]],
    ]
};

/// First completed line in [`LINES`] order, with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Mark(p) if board.get(b) == Cell::Mark(p) && board.get(c) == Cell::Mark(p) => {
                Some((p, line))
            }
            _ => None,
        }
    })
}

pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(p, _)| p)
}

/// 勝敗判定
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(p) = winner(board) {
        GameOutcome::Win(p)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// 合法手生成 (決着済みなら空)
pub fn legal_moves(board: &Board) -> Vec<Position> {
    if outcome(board).is_terminal() {
        Vec::new()
    } else {
        board.empty_cells()
    }
}
