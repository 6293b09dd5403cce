use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction};

/// Snake body, head first. `body_set` mirrors `body` for constant-time occupancy checks.
#[derive(Clone, Debug, Default)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    /// Straight snake of `length` cells whose head moves in `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut cells = Vec::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            cells.push(cell);
            cell = cell.step(behind);
        }
        Self::from_cells(cells)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn tail(&self) -> Option<Cell> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body_set.contains(&cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
