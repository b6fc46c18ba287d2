use cmdtactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use serde::{Deserialize, Serialize};

use crate::args::Args;

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 9;

const CONFIG_FILE_NAME: &str = "cmdtactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

/// Persisted defaults; command-line flags override on top.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub board_size: usize,
    pub second_player_first: bool,
    pub computer: bool,
    pub imperfect: bool,
    pub epsilon_percent: i64,
    pub numpad: bool,
    pub suppress_labels: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: 3,
            second_player_first: false,
            computer: false,
            imperfect: false,
            epsilon_percent: 20,
            numpad: false,
            suppress_labels: false,
            seed: None,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Overlays command-line flags. `--epsilon` implies `--imperfect`, which
    /// in turn implies `--computer`. Epsilon is clamped later, never rejected.
    pub fn apply_args(&mut self, args: &Args) {
        if args.switch {
            self.second_player_first = true;
        }
        if args.suppress {
            self.suppress_labels = true;
        }
        if args.numpad {
            self.numpad = true;
        }
        if args.computer {
            self.computer = true;
        }
        if args.imperfect {
            self.imperfect = true;
        }
        if let Some(epsilon) = args.epsilon {
            self.epsilon_percent = epsilon;
            self.imperfect = true;
        }
        if self.imperfect {
            self.computer = true;
        }
        if let Some(size) = args.size {
            self.board_size = size;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
    }
}
