use crate::game::{Cell, Direction, Grid};

pub const DEFAULT_BOARD_WIDTH: i32 = 400;
pub const DEFAULT_BOARD_HEIGHT: i32 = 400;
pub const DEFAULT_BLOCK_SIZE: i32 = 20;

pub(crate) const START_DIRECTION: Direction = Direction::Right;

/// The stock 3-segment start layout: head at the block-aligned cell nearest
/// the board's quarter point, tail trailing left at half-block spacing.
/// On the default 400x400/20 board this is (100,100), (90,100), (80,100).
/// The half-block tail offsets are replaced by block-aligned cells within
/// two ticks.
pub(crate) fn start_cells(grid: &Grid) -> Vec<Cell> {
    let block = grid.block_size();
    let head = Cell::new(
        snap(grid.width() / 4, block).max(block),
        snap(grid.height() / 4, block),
    );
    vec![
        head,
        Cell::new(head.x - block / 2, head.y),
        Cell::new(head.x - block, head.y),
    ]
}

fn snap(value: i32, block: i32) -> i32 {
    value - value % block
}
