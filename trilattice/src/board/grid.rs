//! Cell storage for the board. The grid is always square; which of its cells are part of
//! the playable region is decided by the [`Geometry`][crate::geometry::Geometry].

use std::ops::{Index, IndexMut};

use crate::board::{Coordinate, Player};

/// Square grid of cells, each either empty or owned by a single [`Player`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Number of rows, and of cells in each row.
    extent: usize,
    /// Cells in row-major order.
    cells: Box<[Option<Player>]>,
}

impl Grid {
    /// Allocate an empty grid with `extent` rows and columns. Returns `None` if
    /// `extent * extent` overflows or the allocation fails.
    pub(crate) fn try_new(extent: usize) -> Option<Self> {
        let total = extent.checked_mul(extent)?;
        let mut cells: Vec<Option<Player>> = Vec::new();
        cells.try_reserve_exact(total).ok()?;
        cells.resize(total, None);
        Some(Self {
            extent,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows, and of cells in each row.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Iterate every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let extent = self.extent;
        (0..extent).flat_map(move |i| (0..extent).map(move |j| Coordinate::new(i, j)))
    }

    /// Convert a coordinate to an index into `cells`. Returns `None` if the coordinate is
    /// outside the grid.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if coord.i < self.extent && coord.j < self.extent {
            Some(coord.i * self.extent + coord.j)
        } else {
            None
        }
    }

    /// Get the owner of the cell at the given [`Coordinate`]. The outer `Option` is `None`
    /// if the coordinate is outside the grid.
    pub fn get(&self, coord: &Coordinate) -> Option<Option<Player>> {
        self.try_linearize(coord).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Option<Player>> {
        self.try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Option<Player>;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match self.try_linearize(&coord) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for a grid of extent {}", coord, self.extent),
        }
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let extent = self.extent;
        match self.get_mut(&coord) {
            Some(cell) => cell,
            None => panic!("{} is out of bounds for a grid of extent {}", coord, extent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_start_empty() {
        let grid = Grid::try_new(3).unwrap();
        assert_eq!(grid.coords().count(), 9);
        assert!(grid.coords().all(|coord| grid[coord].is_none()));
        assert_eq!(grid.get(&Coordinate::new(3, 0)), None);
        assert_eq!(grid.get(&Coordinate::new(2, 2)), Some(None));
    }

    #[test]
    fn index_mut_sets_owner() {
        let mut grid = Grid::try_new(2).unwrap();
        grid[Coordinate::new(1, 0)] = Some(Player::Two);
        assert_eq!(grid.get(&Coordinate::new(1, 0)), Some(Some(Player::Two)));
        assert_eq!(grid.get(&Coordinate::new(0, 1)), Some(None));
    }

    #[test]
    fn oversized_grids_are_refused() {
        assert_eq!(Grid::try_new(usize::max_value()), None);
        assert!(Grid::try_new(0).is_some());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_grids_are_refused() {
        // 2^62 cells fit in `usize` but not in memory.
        assert_eq!(Grid::try_new(1 << 31), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_outside_panics() {
        let grid = Grid::try_new(2).unwrap();
        let _ = grid[Coordinate::new(0, 2)];
    }
}
