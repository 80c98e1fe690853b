use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{DEFAULT_BLOCK_SIZE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use super::grid::Grid;
use super::speed::SpeedOption;

/// Immutable session configuration, supplied at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_width: i32,
    pub board_height: i32,
    pub block_size: i32,
    /// Initial position of the speed selector.
    #[serde(default)]
    pub speed: SpeedOption,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            speed: SpeedOption::default(),
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_width <= 0 {
            return Err("Board width must be positive".to_string());
        }
        if self.board_height <= 0 {
            return Err("Board height must be positive".to_string());
        }
        if self.block_size <= 0 {
            return Err("Block size must be positive".to_string());
        }
        if self.board_width % self.block_size != 0 {
            return Err("Board width must be a multiple of the block size".to_string());
        }
        if self.board_height % self.block_size != 0 {
            return Err("Board height must be a multiple of the block size".to_string());
        }
        if self.board_width / self.block_size < 3 || self.board_height / self.block_size < 3 {
            return Err("Board must be at least 3 blocks wide and 3 blocks tall".to_string());
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_width, self.board_height, self.block_size)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        GameSettings::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.board_width, 400);
        assert_eq!(settings.board_height, 400);
        assert_eq!(settings.block_size, 20);
        assert_eq!(settings.speed, SpeedOption::Normal);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        let settings = GameSettings {
            board_width: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            board_height: -400,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            block_size: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_block_size_must_divide_board() {
        let settings = GameSettings {
            board_width: 410,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            board_height: 390,
            block_size: 40,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_board_must_fit_start_layout() {
        let settings = GameSettings {
            board_width: 40,
            board_height: 40,
            block_size: 20,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            board_width: 60,
            board_height: 60,
            block_size: 20,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = GameSettings {
            board_width: 600,
            board_height: 400,
            block_size: 20,
            speed: SpeedOption::Fast,
        };
        let yaml = serde_yaml_ng::to_string(&settings).unwrap();
        let parsed: GameSettings = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_speed_defaults_when_missing_from_yaml() {
        let parsed: GameSettings =
            serde_yaml_ng::from_str("board_width: 400\nboard_height: 400\nblock_size: 20\n")
                .unwrap();
        assert_eq!(parsed.speed, SpeedOption::Normal);
    }
}
