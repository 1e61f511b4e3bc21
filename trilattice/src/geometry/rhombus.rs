//! The two player board: a rhombus of the lattice.
use enumflags2::BitFlags;

use crate::{
    board::{Coordinate, Player},
    geometry::{boundary, Diagonal, Geometry, Side},
};

/// A rhombus with `size` steps along each side. Player one owns the first and last rows,
/// player two owns the first and last columns. The four corners belong to two sides at
/// once and are not part of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rhombus {
    size: usize,
}

impl Rhombus {
    /// Smallest size that leaves any vertices on the board.
    pub const MIN_SIZE: usize = 2;

    /// Create a [`Rhombus`] with the given side length. Panics if `size` is less than
    /// [`Rhombus::MIN_SIZE`] or the grid would have more than `isize::MAX` cells.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(rhombus) => rhombus,
            None => panic!("unsupported rhombus size {}", size),
        }
    }

    /// Create a [`Rhombus`] with the given side length. Returns `None` if `size` is less
    /// than [`Rhombus::MIN_SIZE`] or the grid would have more than `isize::MAX` cells.
    pub fn try_new(size: usize) -> Option<Self> {
        if size < Self::MIN_SIZE {
            return None;
        }
        let extent = size.checked_add(1)?;
        match extent.checked_mul(extent) {
            Some(cells) if cells <= isize::max_value() as usize => Some(Self { size }),
            _ => None,
        }
    }
}

impl Geometry for Rhombus {
    fn size(&self) -> usize {
        self.size
    }

    fn extent(&self) -> usize {
        self.size + 1
    }

    fn players(&self) -> &'static [Player] {
        &[Player::One, Player::Two]
    }

    fn diagonal(&self) -> Diagonal {
        Diagonal::Falling
    }

    fn boundary(&self, coord: &Coordinate) -> Option<BitFlags<Side>> {
        if coord.i > self.size || coord.j > self.size {
            return None;
        }
        let (i, j, n) = (coord.i as isize, coord.j as isize, self.size as isize);
        boundary::measure(&[
            (Side::FirstRow, i),
            (Side::FirstColumn, j),
            (Side::LastRow, n - i),
            (Side::LastColumn, n - j),
        ])
    }

    fn next(&self, player: Player) -> Player {
        match player {
            Player::One => Player::Two,
            Player::Two => Player::One,
            Player::Three => panic!("{} does not play on a two player board", player),
        }
    }

    fn prev(&self, player: Player) -> Player {
        match player {
            Player::One => Player::Two,
            Player::Two => Player::One,
            Player::Three => panic!("{} does not play on a two player board", player),
        }
    }
}
