use crate::core::{Board, Position};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Easy: 空きマスから一様ランダムに選ぶ
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut rng = self.rng.borrow_mut();
        legal_moves.choose(&mut *rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_strings;
    use std::collections::HashMap;

    #[test]
    fn test_picks_only_empty_cells() {
        let board = board_from_strings(["X O X", ". O .", "X . O"]).unwrap();
        let moves = board.empty_cells();
        let ai = RandomAI::with_seed("Random", 7);
        for _ in 0..100 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            assert!(board.is_empty_at(mv));
        }
    }

    #[test]
    fn test_no_moves() {
        let ai = RandomAI::new("Random");
        assert_eq!(ai.choose_move(&Board::new(), &[]), None);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let board = Board::new();
        let moves = board.empty_cells();
        let a = RandomAI::with_seed("a", 42);
        let b = RandomAI::with_seed("b", 42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board, &moves), b.choose_move(&board, &moves));
        }
    }

    #[test]
    fn test_roughly_uniform() {
        let board = Board::new();
        let moves = board.empty_cells();
        let ai = RandomAI::with_seed("Random", 1234);
        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..9000 {
            *counts.entry(ai.choose_move(&board, &moves).unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 9);
        // 期待値 1000, 十分に緩い範囲
        assert!(counts.values().all(|&c| (800..1200).contains(&c)), "{:?}", counts);
    }
}
