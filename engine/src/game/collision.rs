use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;

// Both predicates run against the post-move head on every tick, wall first.

pub fn hits_wall(grid: &Grid, head: Cell) -> bool {
    !grid.in_bounds(head)
}

pub fn hits_self(head: Cell, snake: &Snake) -> bool {
    snake.cells_behind_head().any(|cell| cell == head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_wall_on_every_edge() {
        let grid = Grid::new(400, 400, 20);
        assert!(hits_wall(&grid, Cell::new(400, 100)));
        assert!(hits_wall(&grid, Cell::new(-20, 100)));
        assert!(hits_wall(&grid, Cell::new(100, 400)));
        assert!(hits_wall(&grid, Cell::new(100, -20)));
        assert!(!hits_wall(&grid, Cell::new(0, 0)));
        assert!(!hits_wall(&grid, Cell::new(380, 380)));
    }

    #[test]
    fn test_hits_self_ignores_head_cell() {
        let snake = Snake::new(vec![
            Cell::new(100, 100),
            Cell::new(80, 100),
            Cell::new(80, 120),
            Cell::new(100, 120),
        ]);
        // The head cell itself is not a self collision.
        assert!(!hits_self(Cell::new(100, 100), &snake));
        assert!(hits_self(Cell::new(80, 120), &snake));
        assert!(!hits_self(Cell::new(120, 100), &snake));
    }
}
