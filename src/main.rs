use clap::Parser;
use crossterm::{cursor, execute, terminal};
use std::io;
use std::path::PathBuf;
use tictactoe_ai::config::{GameConfig, DEFAULT_CONFIG_PATH};
use tictactoe_ai::core::Difficulty;
use tictactoe_ai::game::GameSession;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Tic-tac-toe against a computer opponent")]
struct Args {
    /// JSON config file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Starting difficulty: easy or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Seed for the easy opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::load_or_default(&args.config);
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    match &config.log_file {
        Some(path) => tictactoe_ai::logging::init_file_logging(&config.log_filter, path)?,
        None => eprintln!(
            "note: log_file is null in {}; logging is off",
            args.config.display()
        ),
    }
    info!(difficulty = %config.difficulty, seed = ?config.seed, "starting");

    let mut session = GameSession::from_config(&config);

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let res = tictactoe_ai::ui::run(&mut session);

    // ターミナル復帰
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}
