use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER, MAX_BOARD_SIZE, MAX_NUMBER_OF_MOVES, MIN_BOARD_SIZE,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Requested board size. An even size is played on the next odd size.
    pub board_size: usize,
    pub walls_per_player: usize,
    /// Rejects any wall that would leave a player without a path to their goal row.
    pub require_path_to_goal: bool,
    /// Number of full rounds after which the game is drawn.
    pub max_moves: usize,
}

impl Rules {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(anyhow!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                self.board_size
            ));
        }

        if self.max_moves == 0 {
            return Err(anyhow!("max_moves must be at least 1"));
        }

        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
            require_path_to_goal: true,
            max_moves: MAX_NUMBER_OF_MOVES,
        }
    }
}

impl Config for Rules {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Rules::default();
        let rules = Rules {
            board_size: config.get_usize("board_size")?.unwrap_or(defaults.board_size),
            walls_per_player: config
                .get_usize("walls_per_player")?
                .unwrap_or(defaults.walls_per_player),
            require_path_to_goal: config
                .get_bool("require_path_to_goal")?
                .unwrap_or(defaults.require_path_to_goal),
            max_moves: config.get_usize("max_moves")?.unwrap_or(defaults.max_moves),
        };

        rules.validate()?;

        Ok(rules)
    }
}
