mod collision;
mod food;
mod game_state;
mod grid;
mod session_rng;
mod settings;
mod snake;
mod speed;
mod types;

pub use collision::{hits_self, hits_wall};
pub use food::spawn_food;
pub use game_state::GameState;
pub use grid::Grid;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use speed::SpeedOption;
pub use types::{Cell, Direction, GameOverReason};
