use crate::core::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 起動時の難易度
    pub difficulty: Difficulty,
    /// Seed for the Easy opponent; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Log destination for the terminal UI. `null` turns logging off.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: Difficulty::Easy,
            seed: None,
            log_filter: "info".to_string(),
            log_file: Some(PathBuf::from("tictactoe.log")),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|_| Self::default())
    }

    /// The TUI owns the terminal, so logs only go to `log_file`.
    pub fn logging_enabled(&self) -> bool {
        self.log_file.is_some()
    }
}
