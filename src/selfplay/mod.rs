use crate::core::{Board, Player};
use crate::logic::legal_moves;
use crate::player::{AlphaBetaAI, MinimaxAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Random,
    #[value(name = "alphabeta")]
    AlphaBeta,
    Minimax,
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub x_engine: EngineKind,
    pub o_engine: EngineKind,
    /// Base seed for the random engines; game `i` uses `seed + i`.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub moves: usize,
    /// Search nodes visited by both engines over the whole game.
    pub nodes: u64,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_nodes: f64,
    pub avg_time_ms: f64,
    pub total_moves: usize,
    pub total_nodes: u64,
    pub total_time_ms: u128,
    pub x_engine: String,
    pub o_engine: String,
    pub generated_at: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(x_engine: EngineKind, o_engine: EngineKind) -> Self {
        Self {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_nodes: 0.0,
            avg_time_ms: 0.0,
            total_moves: 0,
            total_nodes: 0,
            total_time_ms: 0,
            x_engine: format!("{:?}", x_engine),
            o_engine: format!("{:?}", o_engine),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += result.moves;
        self.total_nodes += result.nodes;
        self.total_time_ms += result.time_ms;
        self.games.push(result);
        self.recalculate_averages();
    }

    // 累計値から求めるので O(1)
    fn recalculate_averages(&mut self) {
        if self.total_games == 0 {
            return;
        }
        let n = self.total_games as f64;
        self.avg_moves = self.total_moves as f64 / n;
        self.avg_nodes = self.total_nodes as f64 / n;
        self.avg_time_ms = self.total_time_ms as f64 / n;
    }
}

pub fn build_engine(
    kind: EngineKind,
    player: Player,
    seed: Option<u64>,
) -> Box<dyn PlayerController> {
    let name = format!("{:?}-{}", kind, player);
    match kind {
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomAI::with_seed(&name, seed)),
            None => Box::new(RandomAI::new(&name)),
        },
        EngineKind::AlphaBeta => Box::new(AlphaBetaAI::new(player, &name)),
        EngineKind::Minimax => Box::new(MinimaxAI::new(player, &name)),
    }
}

/// Plays `num_games` independent games in parallel; results keep game order.
pub fn run_selfplay(config: &SelfPlayConfig) -> SelfPlayStats {
    info!(
        games = config.num_games,
        x = ?config.x_engine,
        o = ?config.o_engine,
        "self-play started"
    );

    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.map(|s| s.wrapping_add(i as u64));
            play_game(config.x_engine, config.o_engine, seed)
        })
        .collect();

    let mut stats = SelfPlayStats::new(config.x_engine, config.o_engine);
    for result in results {
        stats.add_result(result);
    }

    info!(
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        "self-play finished"
    );
    stats
}

pub fn play_game(x_engine: EngineKind, o_engine: EngineKind, seed: Option<u64>) -> GameResult {
    let start_time = Instant::now();
    // 両者が同じ乱数列にならないよう O 側の seed をずらす
    let x = build_engine(x_engine, Player::X, seed);
    let o = build_engine(o_engine, Player::O, seed.map(|s| s ^ 0x9E37_79B9_7F4A_7C15));

    let mut board = Board::new();
    let mut current = Player::X;
    let mut moves = 0;
    let mut nodes = 0;
    let mut winner = None;

    while !board.outcome().is_terminal() {
        let controller = match current {
            Player::X => x.as_ref(),
            Player::O => o.as_ref(),
        };
        let candidates = legal_moves(&board);

        let Some(mv) = controller.choose_move(&board, &candidates) else {
            // 投了扱い
            winner = Some(current.opponent());
            break;
        };
        if let Err(err) = board.place(mv, current) {
            warn!(%err, engine = controller.name(), "illegal engine move, forfeiting");
            winner = Some(current.opponent());
            break;
        }

        nodes += controller.last_search_stats().map_or(0, |s| s.nodes);
        moves += 1;
        current = current.opponent();
    }

    let winner = winner.or_else(|| board.outcome().winner());
    debug!(?winner, moves, nodes, "game finished");

    GameResult {
        winner,
        moves,
        nodes,
        time_ms: start_time.elapsed().as_millis(),
    }
}
