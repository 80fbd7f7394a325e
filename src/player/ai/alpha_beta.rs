use super::{maximizes, mover, terminal_score, SearchStats};
use crate::core::{Board, Player, Position};
use crate::player::PlayerController;
use std::cell::RefCell;
use tracing::debug;

/// Hard: 全探索 + αβ枝刈り
pub struct AlphaBetaAI {
    player: Player,
    name: String,
    last_stats: RefCell<SearchStats>,
}

impl AlphaBetaAI {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
            last_stats: RefCell::new(SearchStats::default()),
        }
    }

    /// Full-window search from this engine's side. Works on a copy of the
    /// board; the copy is mutated in place and restored move by move.
    pub fn search(&self, board: &Board) -> (i32, Option<Position>) {
        let mut scratch = *board;
        let mut stats = SearchStats::default();
        let result = alpha_beta(
            &mut scratch,
            i32::MIN,
            i32::MAX,
            maximizes(self.player),
            &mut stats,
        );
        debug_assert_eq!(scratch, *board);

        debug!(
            player = %self.player,
            score = result.0,
            best = ?result.1,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "alpha-beta search finished"
        );
        *self.last_stats.borrow_mut() = stats;
        result
    }
}

/// Minimax with alpha-beta pruning over the whole remaining tree.
///
/// Scores are from O's side (+1 O wins, -1 X wins, 0 draw). O is the
/// maximizing layer. Ties keep the first move in row-major order.
pub fn alpha_beta(
    board: &mut Board,
    mut alpha: i32,
    mut beta: i32,
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

        let (score, _) = {
            let mut next = board.hypothetical(pos, player);
            alpha_beta(&mut next, alpha, beta, !is_maximizing, stats)
        };

        if is_maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(pos);
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    (best_score, best_move)
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }
        self.search(board).1
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_search_stats(&self) -> Option<SearchStats> {
        Some(*self.last_stats.borrow())
    }
}
