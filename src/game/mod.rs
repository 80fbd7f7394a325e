use crate::config::GameConfig;
use crate::core::{
    Board, BoardError, Cell, Difficulty, GameOutcome, IllegalReason, Player, Position, BOARD_SIZE,
};
use crate::logic::legal_moves;
use crate::player::{AlphaBetaAI, PlayerController, RandomAI};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 人間側の手番
pub const HUMAN: Player = Player::X;
/// コンピュータ側の手番
pub const COMPUTER: Player = Player::O;

/// Result of one human click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub applied: bool,
    /// Outcome right after the human move.
    pub outcome: GameOutcome,
    pub opponent_move: Option<Position>,
    /// Outcome after the opponent replied (same as `outcome` if it did not).
    pub final_outcome: GameOutcome,
}

impl MoveReport {
    fn rejected(outcome: GameOutcome) -> Self {
        MoveReport {
            applied: false,
            outcome,
            opponent_move: None,
            final_outcome: outcome,
        }
    }
}

/// One human-vs-computer game. Owns the board, the turn and the difficulty.
pub struct GameSession {
    board: Board,
    turn: Player,
    difficulty: Difficulty,
    easy: RandomAI,
    hard: AlphaBetaAI,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_engines(Board::new(), difficulty, RandomAI::new("Easy AI"))
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_engines(
            Board::new(),
            difficulty,
            RandomAI::with_seed("Easy AI", seed),
        )
    }

    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.difficulty, seed),
            None => Self::new(config.difficulty),
        }
    }

    /// Resumes from an arbitrary position; the side to move is inferred from
    /// the mark counts.
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        Self::with_engines(board, difficulty, RandomAI::new("Easy AI"))
    }

    fn with_engines(board: Board, difficulty: Difficulty, easy: RandomAI) -> Self {
        GameSession {
            turn: board.side_to_move(),
            board,
            difficulty,
            easy,
            hard: AlphaBetaAI::new(COMPUTER, "Hard AI"),
        }
    }

    /// Handles a human click: apply, check, let the computer reply, check again.
    ///
    /// Illegal moves come back as `applied: false` with nothing changed;
    /// coordinates off the board are an error.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveReport, BoardError> {
        let pos = Position::new(row, col)?;

        if let Err(err) = self.place_human(pos) {
            info!(%err, "move rejected");
            return Ok(MoveReport::rejected(self.outcome()));
        }
        self.turn = COMPUTER;

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "game over after human move");
            return Ok(MoveReport {
                applied: true,
                outcome,
                opponent_move: None,
                final_outcome: outcome,
            });
        }

        let opponent_move = self.opponent_move();
        let final_outcome = self.board.outcome();
        if final_outcome.is_terminal() {
            info!(outcome = %final_outcome, "game over after computer move");
        }

        Ok(MoveReport {
            applied: true,
            outcome,
            opponent_move,
            final_outcome,
        })
    }

    fn place_human(&mut self, pos: Position) -> Result<(), BoardError> {
        if self.turn != HUMAN && !self.board.outcome().is_terminal() {
            return Err(BoardError::IllegalMove {
                position: pos,
                reason: IllegalReason::NotYourTurn(HUMAN),
            });
        }
        self.board.place(pos, HUMAN)
    }

    /// Lets the computer move with the current difficulty. Returns `None`
    /// without touching the board when it is not the computer's turn or the
    /// game is already decided.
    pub fn opponent_move(&mut self) -> Option<Position> {
        if self.turn != COMPUTER || self.board.outcome().is_terminal() {
            warn!(turn = %self.turn, "opponent asked to move out of turn or after game end");
            return None;
        }

        let candidates = legal_moves(&self.board);
        let chosen = match self.difficulty {
            Difficulty::Easy => self.easy.choose_move(&self.board, &candidates),
            Difficulty::Hard => self.hard.choose_move(&self.board, &candidates),
        }?;

        if let Err(err) = self.board.place(chosen, COMPUTER) {
            warn!(%err, "engine produced an illegal move");
            return None;
        }
        self.turn = HUMAN;

        info!(position = %chosen, difficulty = %self.difficulty, "computer moved");
        Some(chosen)
    }

    /// Takes effect on the next computer move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "difficulty changed");
        self.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn reset_game(&mut self) {
        debug!("reset");
        self.board = Board::new();
        self.turn = Player::X;
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.board.cell_at(row, col)
    }

    pub fn board_snapshot(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.board.snapshot()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }
}
