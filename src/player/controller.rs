use crate::core::{Board, Position};
use crate::player::ai::SearchStats;

/// プレイヤー操作のtrait
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;

    /// Statistics of the most recent search, for engines that search.
    fn last_search_stats(&self) -> Option<SearchStats> {
        None
    }
}
