use std::time::Duration;

use crate::defaults::{START_DIRECTION, start_cells};
use crate::log;
use super::collision::{hits_self, hits_wall};
use super::food::spawn_food;
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::speed::SpeedOption;
use super::types::{Cell, Direction, GameOverReason};

/// The game-state engine: a tick-driven state machine over the whole
/// simulation. The host's scheduler calls [`GameState::tick`] at the interval
/// reported by [`GameState::tick_interval`] (re-read after each tick, since
/// eating food can change it); the input layer feeds
/// [`GameState::set_direction`]; the renderer redraws entirely from the
/// snapshot accessors after every tick.
///
/// All operations are synchronous and take `&mut self`, so a multi-threaded
/// host gets the required tick/input exclusivity by wrapping the state in a
/// lock of its choice.
pub struct GameState {
    settings: GameSettings,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    speed: SpeedOption,
    tick_interval: Duration,
    game_over: Option<GameOverReason>,
    rng: SessionRng,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::from_random())
    }

    pub fn new_with_seed(settings: &GameSettings, seed: u64) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::new(seed))
    }

    fn with_rng(settings: &GameSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let grid = settings.grid();
        let mut state = Self {
            settings: settings.clone(),
            grid,
            snake: Snake::new(start_cells(&grid)),
            food: None,
            direction: START_DIRECTION,
            pending_direction: None,
            score: 0,
            speed: settings.speed,
            tick_interval: settings.speed.tick_interval(),
            game_over: None,
            rng,
        };
        state.food = spawn_food(&state.grid, &state.snake, &mut state.rng);
        Ok(state)
    }

    /// Advances the simulation by one step. A no-op once the game is over.
    pub fn tick(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.snake.next_head(self.direction, self.grid.block_size());
        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            match spawn_food(&self.grid, &self.snake, &mut self.rng) {
                Some(cell) => {
                    self.food = Some(cell);
                    log!("Food spawned at ({}, {})", cell.x, cell.y);
                }
                None => {
                    // Nowhere left to spawn: the snake has filled the board.
                    self.food = None;
                    self.game_over = Some(GameOverReason::BoardFull);
                    log!("Board filled at score {}", self.score);
                    return;
                }
            }
            self.tick_interval = self.speed.tick_interval();
        } else if self.snake.len() > self.score as usize + 1 {
            self.snake.pop_tail();
        }

        if hits_wall(&self.grid, next_head) {
            self.game_over = Some(GameOverReason::WallCollision);
            log!("Hit the wall at ({}, {})", next_head.x, next_head.y);
        } else if hits_self(next_head, &self.snake) {
            self.game_over = Some(GameOverReason::SelfCollision);
            log!("Ran into itself at ({}, {})", next_head.x, next_head.y);
        }
    }

    /// Buffers a direction change for the next tick. A request that would
    /// reverse the committed direction is ignored; only the most recent
    /// valid request survives until the tick applies it.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Moves the speed selector. The interval is re-read from it on the next
    /// food pickup, not immediately.
    pub fn set_speed_option(&mut self, speed: SpeedOption) {
        self.speed = speed;
    }

    /// Resets to the start configuration. The speed selector keeps its live
    /// position; the interval falls back to the configured initial value
    /// until food is eaten again.
    pub fn restart(&mut self) {
        self.snake = Snake::new(start_cells(&self.grid));
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.tick_interval = self.settings.speed.tick_interval();
        self.game_over = None;
        self.food = spawn_food(&self.grid, &self.snake, &mut self.rng);
        log!("Game restarted");
    }

    pub fn snake_cells(&self) -> Vec<Cell> {
        self.snake.cells().collect()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn speed_option(&self) -> SpeedOption {
        self.speed
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval.as_millis() as u64
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
