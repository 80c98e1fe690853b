use std::collections::VecDeque;

use super::types::{Cell, Direction};

/// The player-controlled chain of cells, head at the front.
///
/// Movement only ever grows the body by one at the head; whether the tail is
/// dropped afterwards is the engine's call, based on whether food was eaten.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            body: cells.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Body cells excluding the head, in order.
    pub fn cells_behind_head(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().skip(1).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Where the head lands when moving one block in `direction`.
    pub fn next_head(&self, direction: Direction, block_size: i32) -> Cell {
        let (dx, dy) = direction.delta();
        let head = self.head();
        Cell::new(head.x + dx * block_size, head.y + dy * block_size)
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> Cell {
        self.body
            .pop_back()
            .expect("Snake body should never be empty")
    }
}
