//! The three player board: a regular hexagon of the lattice.
use enumflags2::BitFlags;

use crate::{
    board::{Coordinate, Player},
    geometry::{boundary, Diagonal, Geometry, Side},
};

/// A hexagon with `size` steps along each of its six sides, centred on `(size, size)`.
/// Each player owns a pair of opposite sides. The six corners belong to two sides at once
/// and are not part of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Hexagon {
    size: usize,
}

impl Hexagon {
    /// Smallest size that leaves any vertices on the board.
    pub const MIN_SIZE: usize = 1;

    /// Create a [`Hexagon`] with the given side length. Panics if `size` is 0 or the grid
    /// would have more than `isize::MAX` cells.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(hexagon) => hexagon,
            None => panic!("unsupported hexagon size {}", size),
        }
    }

    /// Create a [`Hexagon`] with the given side length. Returns `None` if `size` is 0 or
    /// the grid would have more than `isize::MAX` cells.
    pub fn try_new(size: usize) -> Option<Self> {
        if size < Self::MIN_SIZE {
            return None;
        }
        let extent = size.checked_mul(2)?.checked_add(1)?;
        match extent.checked_mul(extent) {
            Some(cells) if cells <= isize::max_value() as usize => Some(Self { size }),
            _ => None,
        }
    }
}

impl Geometry for Hexagon {
    fn size(&self) -> usize {
        self.size
    }

    fn extent(&self) -> usize {
        2 * self.size + 1
    }

    fn players(&self) -> &'static [Player] {
        Player::ALL
    }

    fn diagonal(&self) -> Diagonal {
        Diagonal::Rising
    }

    fn boundary(&self, coord: &Coordinate) -> Option<BitFlags<Side>> {
        if coord.i > 2 * self.size || coord.j > 2 * self.size {
            return None;
        }
        let (i, j, n) = (coord.i as isize, coord.j as isize, self.size as isize);
        boundary::measure(&[
            (Side::FirstRow, i),
            (Side::FirstColumn, j),
            (Side::LastRow, 2 * n - i),
            (Side::LastColumn, 2 * n - j),
            (Side::UpperDiagonal, n + i - j),
            (Side::LowerDiagonal, n - i + j),
        ])
    }

    fn next(&self, player: Player) -> Player {
        match player {
            Player::One => Player::Two,
            Player::Two => Player::Three,
            Player::Three => Player::One,
        }
    }

    fn prev(&self, player: Player) -> Player {
        match player {
            Player::One => Player::Three,
            Player::Two => Player::One,
            Player::Three => Player::Two,
        }
    }
}
