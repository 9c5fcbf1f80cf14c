use std::ops::{Index, IndexMut};

use crate::{Position, direction::Direction};

/// A fixed-size 2D grid addressed as `[x][y]`.
///
/// Cells are stored in a flat vector in column-major order, so the cell at
/// `(x, y)` lives at `x * rows + y`. The dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid of `columns` x `rows` cells, all set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `columns * rows` overflows `usize`.
    pub fn new(columns: usize, rows: usize) -> Self
    where
        T: Default + Clone,
    {
        let size = columns.checked_mul(rows).expect("Grid size overflow");
        Grid {
            columns,
            rows,
            cells: vec![T::default(); size],
        }
    }

    /// Converts a position to its flat index, or `None` when it lies outside the grid.
    #[inline]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.x * self.rows + position.y)
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.columns && position.y < self.rows
    }

    /// The neighbour of `from` one step in `direction`, if it is inside the grid.
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let target = Position {
            x: from.x.checked_add_signed(dx)?,
            y: from.y.checked_add_signed(dy)?,
        };
        self.contains(target).then_some(target)
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        let index = self.index_of(position)?;
        self.cells.get(index)
    }

    /// Iterates over the cells in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: Position) -> &Self::Output {
        match self.index_of(position) {
            Some(idx) => &self.cells[idx],
            None => panic!(
                "Grid index ({}, {}) out of bounds for {} columns x {} rows",
                position.x, position.y, self.columns, self.rows
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        let (columns, rows) = (self.columns, self.rows);
        match self.index_of(position) {
            Some(idx) => &mut self.cells[idx],
            None => panic!(
                "Grid index ({}, {}) out of bounds for {} columns x {} rows",
                position.x, position.y, columns, rows
            ),
        }
    }
}
