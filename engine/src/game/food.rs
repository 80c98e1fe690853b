use std::collections::HashSet;

use super::grid::Grid;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::Cell;

/// Picks a uniformly-random free cell for the next food. Returns `None`
/// only when the snake occupies every cell. Terminates on any board state.
pub fn spawn_food(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Option<Cell> {
    let occupied: HashSet<Cell> = snake.cells().collect();
    let free = grid.free_cells(&occupied);
    if free.is_empty() {
        return None;
    }
    let index = rng.random_range(0..free.len());
    Some(free[index])
}
