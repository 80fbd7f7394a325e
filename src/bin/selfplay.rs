//! Engine-vs-engine matches for checking and benchmarking the opponents.

use clap::Parser;
use tictactoe_ai::selfplay::{run_selfplay, EngineKind, SelfPlayConfig, SelfPlayStats};

#[derive(Parser)]
#[command(version, about = "Play tic-tac-toe engines against each other")]
struct Args {
    /// Number of games
    #[arg(short = 'n', long, default_value_t = 100)]
    games: usize,
    /// Engine playing X (moves first)
    #[arg(short = 'x', long = "x-engine", value_enum, default_value_t = EngineKind::Random)]
    x_engine: EngineKind,
    /// Engine playing O
    #[arg(short = 'o', long = "o-engine", value_enum, default_value_t = EngineKind::AlphaBeta)]
    o_engine: EngineKind,
    /// Base seed for random engines
    #[arg(long)]
    seed: Option<u64>,
    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

fn print_summary(stats: &SelfPlayStats) {
    let pct = |n: usize| n as f64 / stats.total_games.max(1) as f64 * 100.0;

    println!("=== Self-Play Result ({}) ===", stats.generated_at);
    println!("X: {} vs O: {}", stats.x_engine, stats.o_engine);
    println!("Games: {}", stats.total_games);
    println!("X Wins: {} ({:.1}%)", stats.x_wins, pct(stats.x_wins));
    println!("O Wins: {} ({:.1}%)", stats.o_wins, pct(stats.o_wins));
    println!("Draws: {} ({:.1}%)", stats.draws, pct(stats.draws));
    println!("Avg Moves: {:.2}", stats.avg_moves);
    println!("Avg Nodes: {:.0}", stats.avg_nodes);
    println!("Avg Time: {:.2}ms", stats.avg_time_ms);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tictactoe_ai::logging::init_stderr_logging("warn");

    let config = SelfPlayConfig {
        num_games: args.games,
        x_engine: args.x_engine,
        o_engine: args.o_engine,
        seed: args.seed,
    };
    let mut stats = run_selfplay(&config);

    if args.json {
        // 個々の対局は大きくなるので要約だけ出す
        stats.games.clear();
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&stats);
    }
    Ok(())
}
