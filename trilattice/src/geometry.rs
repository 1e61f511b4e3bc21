//! Board shapes and turn orders.
//!
//! A [`Geometry`] decides which cells of the square [`Grid`] are vertices of the board,
//! which of them start out owned by a player, which diagonal completes the lattice, and in
//! what order players move. [`Rhombus`] is the two player board and [`Hexagon`] the three
//! player board; [`Variant`] selects one of them from a player count.
//!
//! The lattice has three edge directions: along a row, down a column, and the diagonal
//! given by [`Geometry::diagonal`]. [`vertices`], [`edges`] and [`faces`] enumerate the
//! lattice structure of any geometry.
use std::fmt::Debug;

use enumflags2::BitFlags;

use crate::board::{Coordinate, Grid, Player};

pub use self::{
    boundary::Side, errors::InvalidConfiguration, hexagon::Hexagon, rhombus::Rhombus,
};

mod boundary;
mod errors;
mod hexagon;
mod rhombus;

/// A pair of adjacent vertices.
pub type Edge = (Coordinate, Coordinate);

/// The three corners of a minimal triangle of the lattice.
pub type Face = [Coordinate; 3];

/// The third edge direction of the lattice, alongside rows and columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Diagonal {
    /// Joins `(i, j)` with `(i + 1, j - 1)`.
    Falling,
    /// Joins `(i, j)` with `(i + 1, j + 1)`.
    Rising,
}

const FALLING_STEPS: [(isize, isize); 3] = [(0, 1), (1, 0), (1, -1)];
const RISING_STEPS: [(isize, isize); 3] = [(0, 1), (1, 0), (1, 1)];

// Offsets of the two triangles of the unit cell anchored at (i, j), relative to it.
const FALLING_FACES: [[(isize, isize); 3]; 2] =
    [[(0, 0), (0, 1), (1, 0)], [(0, 1), (1, 0), (1, 1)]];
const RISING_FACES: [[(isize, isize); 3]; 2] =
    [[(0, 0), (0, 1), (1, 1)], [(0, 0), (1, 0), (1, 1)]];

impl Diagonal {
    /// Forward steps to each neighbour: along the row, down the column, then along the
    /// diagonal.
    pub fn steps(self) -> &'static [(isize, isize); 3] {
        match self {
            Diagonal::Falling => &FALLING_STEPS,
            Diagonal::Rising => &RISING_STEPS,
        }
    }

    /// Corner offsets of the two faces in each unit cell.
    fn face_offsets(self) -> &'static [[(isize, isize); 3]; 2] {
        match self {
            Diagonal::Falling => &FALLING_FACES,
            Diagonal::Rising => &RISING_FACES,
        }
    }

    /// Horizontal shift of each row, in units of the lattice spacing, that makes every
    /// edge the same length when rows are drawn `sin 60°` apart.
    pub fn skew(self) -> f64 {
        match self {
            Diagonal::Falling => 0.5,
            Diagonal::Rising => -0.5,
        }
    }
}

/// Shape of a board and the order of play on it.
pub trait Geometry: Debug {
    /// Number of lattice steps along each side of the board.
    fn size(&self) -> usize;

    /// Number of rows and columns of the grid that holds the board.
    fn extent(&self) -> usize;

    /// Players taking part, starting with the first to move.
    fn players(&self) -> &'static [Player];

    /// The diagonal edge direction of this board.
    fn diagonal(&self) -> Diagonal;

    /// Sides of the board that the coordinate lies on. Returns `None` if the coordinate
    /// is outside the board region altogether.
    fn boundary(&self, coord: &Coordinate) -> Option<BitFlags<Side>>;

    /// The player moving after `player`. Panics if `player` does not take part.
    fn next(&self, player: Player) -> Player;

    /// The player who moved before `player`. Exact inverse of [`Geometry::next`]. Panics
    /// if `player` does not take part.
    fn prev(&self, player: Player) -> Player;

    /// Returns true if the coordinate is a vertex of the board: inside the region and on
    /// at most one side.
    fn is_vertex(&self, coord: &Coordinate) -> bool {
        match self.boundary(coord) {
            Some(sides) => sides.bits().count_ones() <= 1,
            None => false,
        }
    }

    /// The player owning the coordinate from the start of the game, if it is a border
    /// vertex.
    fn sentinel(&self, coord: &Coordinate) -> Option<Player> {
        self.boundary(coord)
            .and_then(boundary::single)
            .map(Side::owner)
    }

    /// Allocate the grid for a new game with every border vertex owned by its side's
    /// player and everything else empty. Panics if the grid cannot be allocated.
    fn initialize_board(&self) -> Grid {
        match self.try_initialize_board() {
            Some(grid) => grid,
            None => panic!("cannot allocate a board for {:?}", self),
        }
    }

    /// Like [`Geometry::initialize_board`], but returns `None` if the grid cannot be
    /// allocated.
    fn try_initialize_board(&self) -> Option<Grid> {
        let mut grid = Grid::try_new(self.extent())?;
        for coord in grid.coords() {
            grid[coord] = self.sentinel(&coord);
        }
        Some(grid)
    }
}

/// Iterate the vertices of the board in row-major order.
pub fn vertices<'a, G: Geometry + ?Sized>(
    geometry: &'a G,
) -> impl Iterator<Item = Coordinate> + 'a {
    let extent = geometry.extent();
    (0..extent)
        .flat_map(move |i| (0..extent).map(move |j| Coordinate::new(i, j)))
        .filter(move |coord| geometry.is_vertex(coord))
}

/// Iterate every pair of adjacent vertices once. Edges are ordered by their first vertex
/// in row-major order, then by direction: row, column, diagonal.
pub fn edges<'a, G: Geometry + ?Sized>(
    geometry: &'a G,
) -> impl Iterator<Item = Edge> + 'a {
    let steps = geometry.diagonal().steps();
    vertices(geometry).flat_map(move |from| {
        steps.iter().filter_map(move |&(di, dj)| {
            from.offset(di, dj)
                .filter(|to| geometry.is_vertex(to))
                .map(|to| (from, to))
        })
    })
}

/// Iterate every minimal triangle whose corners are all vertices, once. Faces are
/// ordered by the unit cell they fill in row-major order.
pub fn faces<'a, G: Geometry + ?Sized>(
    geometry: &'a G,
) -> impl Iterator<Item = Face> + 'a {
    let extent = geometry.extent();
    let offsets = geometry.diagonal().face_offsets();
    (0..extent)
        .flat_map(move |i| (0..extent).map(move |j| Coordinate::new(i, j)))
        .flat_map(move |anchor| {
            offsets.iter().filter_map(move |corners| {
                let mut face = [anchor; 3];
                for (vertex, &(di, dj)) in face.iter_mut().zip(corners.iter()) {
                    *vertex = anchor.offset(di, dj).filter(|c| geometry.is_vertex(c))?;
                }
                Some(face)
            })
        })
}

/// The supported board variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Variant {
    /// Two players on a [`Rhombus`].
    TwoPlayer(Rhombus),
    /// Three players on a [`Hexagon`].
    ThreePlayer(Hexagon),
}

impl Variant {
    /// Select the variant for the given player count and board size.
    pub fn new(players: usize, size: usize) -> Result<Self, InvalidConfiguration> {
        let variant = match players {
            2 => Rhombus::try_new(size).map(Variant::TwoPlayer),
            3 => Hexagon::try_new(size).map(Variant::ThreePlayer),
            other => return Err(InvalidConfiguration::UnsupportedPlayerCount(other)),
        };
        variant.ok_or(InvalidConfiguration::InvalidSize { players, size })
    }

    /// Number of players taking part.
    pub fn player_count(&self) -> usize {
        self.players().len()
    }

    fn inner(&self) -> &dyn Geometry {
        match self {
            Variant::TwoPlayer(rhombus) => rhombus,
            Variant::ThreePlayer(hexagon) => hexagon,
        }
    }

    /// Iterate the vertices of the board in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        vertices(self)
    }

    /// Iterate every pair of adjacent vertices once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        edges(self)
    }

    /// Iterate every minimal triangle of the board once.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        faces(self)
    }
}

impl Geometry for Variant {
    fn size(&self) -> usize {
        self.inner().size()
    }

    fn extent(&self) -> usize {
        self.inner().extent()
    }

    fn players(&self) -> &'static [Player] {
        self.inner().players()
    }

    fn diagonal(&self) -> Diagonal {
        self.inner().diagonal()
    }

    fn boundary(&self, coord: &Coordinate) -> Option<BitFlags<Side>> {
        self.inner().boundary(coord)
    }

    fn next(&self, player: Player) -> Player {
        self.inner().next(player)
    }

    fn prev(&self, player: Player) -> Player {
        self.inner().prev(player)
    }
}
