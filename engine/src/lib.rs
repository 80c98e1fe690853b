pub mod config;
pub mod game;
pub mod logger;
mod defaults;

pub use defaults::{DEFAULT_BLOCK_SIZE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
pub use game::{
    Cell, Direction, GameOverReason, GameSettings, GameState, SessionRng, Snake, SpeedOption,
};
