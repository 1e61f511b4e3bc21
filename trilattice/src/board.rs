//! Types that make up the game board.

pub use self::{coordinate::Coordinate, grid::Grid, player::Player};

mod coordinate;
mod grid;
mod player;
