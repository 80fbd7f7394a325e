use super::{maximizes, mover, terminal_score, SearchStats};
use crate::core::{Board, Player, Position};
use crate::player::PlayerController;
use std::cell::RefCell;

/// 枝刈りなしのミニマックス (αβの検証・比較用)
pub struct MinimaxAI {
    pub player: Player,
    pub name: String,
    last_stats: RefCell<SearchStats>,
}

impl MinimaxAI {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
            last_stats: RefCell::new(SearchStats::default()),
        }
    }
}

/// Exhaustive minimax, same scoring and tie-break as [`super::alpha_beta`].
pub fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> (i32, Option<Position>) {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board) {
        return (score, None);
    }

    let player = mover(is_maximizing);
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for pos in Position::ALL {
        if !board.is_empty_at(pos) {
            continue;
        }
        let (score, _) = minimax(&mut board.hypothetical(pos, player), !is_maximizing, stats);

        let better = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(pos);
        }
    }

    (best_score, best_move)
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }
        let mut scratch = *board;
        let mut stats = SearchStats::default();
        let (_, best) = minimax(&mut scratch, maximizes(self.player), &mut stats);
        *self.last_stats.borrow_mut() = stats;
        best
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_search_stats(&self) -> Option<SearchStats> {
        Some(*self.last_stats.borrow())
    }
}
